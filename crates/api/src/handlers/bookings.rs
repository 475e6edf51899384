//! Handlers for tutoring session bookings.
//!
//! A booking must reach `completed` before it can be submitted for credit.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tutorhub_core::booking::{self, STATUS_CANCELLED, STATUS_COMPLETED, STATUS_CONFIRMED};
use tutorhub_core::credit;
use tutorhub_core::error::CoreError;
use tutorhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use tutorhub_core::roles::{ROLE_STUDENT, ROLE_TUTOR};
use tutorhub_core::types::DbId;
use tutorhub_db::models::booking::{Booking, BookingFilter, CreateBooking};
use tutorhub_db::repositories::{BookingRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::BookingListParams;
use crate::response::Page;
use crate::state::AppState;

/// Verify that a booking exists, returning the full row.
async fn ensure_booking_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Booking> {
    BookingRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))
}

/// Verify that user `id` exists and holds `role`.
async fn ensure_user_with_role(pool: &sqlx::PgPool, id: DbId, role: &str) -> AppResult<()> {
    let user = UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    if user.role != role {
        return Err(AppError::Core(CoreError::Validation(format!(
            "User {id} has role '{}', expected '{role}'",
            user.role
        ))));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// POST /bookings
// ---------------------------------------------------------------------------

/// Schedule a new session. The booking starts out `pending`.
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    booking::validate_subject(&input.subject)?;
    if let Some(minutes) = input.duration_minutes {
        booking::validate_duration(minutes)?;
    }
    if let Some(value) = input.credit_value {
        credit::validate_credit_value(value)?;
    }
    if input.student_id == input.tutor_id {
        return Err(AppError::Core(CoreError::Validation(
            "Student and tutor must be different users".into(),
        )));
    }

    ensure_user_with_role(&state.pool, input.student_id, ROLE_STUDENT).await?;
    ensure_user_with_role(&state.pool, input.tutor_id, ROLE_TUTOR).await?;

    let booking = BookingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        booking_id = booking.id,
        student_id = booking.student_id,
        tutor_id = booking.tutor_id,
        is_credit_eligible = booking.is_credit_eligible,
        "Booking created",
    );

    Ok((StatusCode::CREATED, Json(booking)))
}

// ---------------------------------------------------------------------------
// GET /bookings
// ---------------------------------------------------------------------------

pub async fn list_bookings(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<BookingListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        booking::validate_status(s)?;
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);
    let filter = BookingFilter {
        student_id: params.student_id,
        tutor_id: params.tutor_id,
        status: params.status,
    };

    let data = BookingRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = BookingRepo::count(&state.pool, &filter).await?;

    Ok(Json(Page {
        data,
        total,
        limit,
        offset,
    }))
}

// ---------------------------------------------------------------------------
// GET /bookings/{id}
// ---------------------------------------------------------------------------

pub async fn get_booking(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(ensure_booking_exists(&state.pool, id).await?))
}

// ---------------------------------------------------------------------------
// POST /bookings/{id}/{confirm,complete,cancel}
// ---------------------------------------------------------------------------

pub async fn confirm_booking(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(transition_booking(&state, id, STATUS_CONFIRMED).await?))
}

/// Mark a confirmed session as held. Stamps `completedAt`.
pub async fn complete_booking(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(transition_booking(&state, id, STATUS_COMPLETED).await?))
}

pub async fn cancel_booking(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(transition_booking(&state, id, STATUS_CANCELLED).await?))
}

async fn transition_booking(state: &AppState, id: DbId, to: &str) -> AppResult<Booking> {
    let current = ensure_booking_exists(&state.pool, id).await?;
    booking::validate_transition(&current.status, to)?;

    let updated = BookingRepo::transition(&state.pool, id, &current.status, to)
        .await?
        .ok_or_else(|| {
            CoreError::Conflict(format!(
                "Booking {id} changed status while being moved to '{to}'"
            ))
        })?;

    tracing::info!(
        booking_id = id,
        from = %current.status,
        to,
        "Booking status changed",
    );

    Ok(updated)
}
