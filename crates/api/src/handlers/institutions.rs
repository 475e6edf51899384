use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use tutorhub_core::error::CoreError;
use tutorhub_core::types::DbId;
use tutorhub_db::models::institution::CreateInstitution;
use tutorhub_db::repositories::InstitutionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Register a partner institution. Names are unique.
pub async fn create_institution(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateInstitution>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let institution = InstitutionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        institution_id = institution.id,
        name = %institution.name,
        "Institution created",
    );

    Ok((StatusCode::CREATED, Json(institution)))
}

pub async fn list_institutions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let institutions = InstitutionRepo::list(&state.pool).await?;
    Ok(Json(institutions))
}

pub async fn get_institution(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let institution = InstitutionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Institution",
            id,
        }))?;
    Ok(Json(institution))
}
