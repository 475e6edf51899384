//! Handlers for users and their credit summaries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use tutorhub_core::error::CoreError;
use tutorhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use tutorhub_core::roles;
use tutorhub_core::types::DbId;
use tutorhub_db::models::user::{CreateUser, User};
use tutorhub_db::repositories::{CreditTransactionRepo, InstitutionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::UserListParams;
use crate::response::{CreditSummary, Page};
use crate::state::AppState;

async fn ensure_user_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// Create a user. Role defaults to `student`; a duplicate email is a 409.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    if let Some(ref role) = input.role {
        roles::validate_role(role)?;
    }
    if let Some(institution_id) = input.institution_id {
        InstitutionRepo::find_by_id(&state.pool, institution_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Institution",
                id: institution_id,
            }))?;
    }

    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.id,
        role = %user.role,
        institution_id = ?user.institution_id,
        "User created",
    );

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let data = UserRepo::list(&state.pool, params.institution_id, limit, offset).await?;
    let total = UserRepo::count(&state.pool, params.institution_id).await?;

    Ok(Json(Page {
        data,
        total,
        limit,
        offset,
    }))
}

pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(ensure_user_exists(&state.pool, id).await?))
}

/// Current balance plus per-status counts and sums of `creditsEarned`.
pub async fn credit_summary(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = ensure_user_exists(&state.pool, id).await?;
    let totals = CreditTransactionRepo::totals_for_user(&state.pool, id).await?;

    Ok(Json(CreditSummary {
        user_id: user.id,
        credit_balance: user.credit_balance,
        totals,
    }))
}
