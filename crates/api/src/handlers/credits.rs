//! Handlers for the credit transaction lifecycle.
//!
//! ```text
//! pending --approve--> approved --credit--> credited
//! pending --reject---> rejected
//! ```
//!
//! Every write goes through a guarded repository call. When the guard
//! misses, the handler re-reads the row and reports why with the same
//! precondition check it would have run up front.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tutorhub_core::credit::{self, STATUS_APPROVED, STATUS_REJECTED};
use tutorhub_core::error::CoreError;
use tutorhub_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use tutorhub_core::roles;
use tutorhub_core::types::DbId;
use tutorhub_db::models::credit_transaction::{
    CreateCreditTransaction, CreditTransaction, CreditTransactionFilter, ReviewCreditTransaction,
    ReviewDecision, SubmitCreditTransaction,
};
use tutorhub_db::repositories::{BookingRepo, CreditTransactionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{require_field, ApiJson, ApiPath, ApiQuery};
use crate::query::CreditListParams;
use crate::response::{Page, TransactionResponse};
use crate::state::AppState;

/// Verify that a credit transaction exists, returning the full row.
async fn ensure_transaction_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<CreditTransaction> {
    CreditTransactionRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CreditTransaction",
            id,
        }))
}

// ---------------------------------------------------------------------------
// POST /credits
// ---------------------------------------------------------------------------

/// Submit a completed, credit-eligible booking for institutional review.
pub async fn submit_credit(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<SubmitCreditTransaction>,
) -> AppResult<impl IntoResponse> {
    let booking_id = require_field(input.booking_id, "bookingId")?;
    let user_id = require_field(input.user_id, "userId")?;

    let booking = BookingRepo::find_by_id(&state.pool, booking_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id: booking_id,
        }))?;
    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    credit::ensure_submittable(&booking.status, booking.is_credit_eligible)?;
    let institution_id = user.institution_id.ok_or_else(|| {
        CoreError::Validation(format!("User {user_id} is not affiliated with an institution"))
    })?;

    if let Some(existing) = CreditTransactionRepo::find_by_booking_id(&state.pool, booking_id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Booking {booking_id} already has credit transaction {}",
            existing.id
        ))));
    }

    // A concurrent submit that slips past the check above still hits
    // uq_credit_transactions_booking_id and maps to 409.
    let transaction = CreditTransactionRepo::create(
        &state.pool,
        &CreateCreditTransaction {
            user_id,
            institution_id,
            booking_id,
            credits_earned: booking.credit_value,
        },
    )
    .await?;

    tracing::info!(
        transaction_id = transaction.id,
        booking_id,
        user_id,
        institution_id,
        credits_earned = %transaction.credits_earned,
        "Credit transaction submitted",
    );

    Ok((StatusCode::CREATED, Json(transaction)))
}

// ---------------------------------------------------------------------------
// GET /credits
// ---------------------------------------------------------------------------

/// List credit transactions with optional filters, newest first.
pub async fn list_credits(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CreditListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref s) = params.status {
        credit::validate_status(s)?;
    }

    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
    let offset = clamp_offset(params.offset);

    let filter = CreditTransactionFilter {
        user_id: params.user_id,
        institution_id: params.institution_id,
        status: params.status,
        academic_year: params.academic_year,
    };

    let data = CreditTransactionRepo::list(&state.pool, &filter, limit, offset).await?;
    let total = CreditTransactionRepo::count(&state.pool, &filter).await?;

    Ok(Json(Page {
        data,
        total,
        limit,
        offset,
    }))
}

// ---------------------------------------------------------------------------
// GET /credits/{id}
// ---------------------------------------------------------------------------

pub async fn get_credit(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let transaction = ensure_transaction_exists(&state.pool, id).await?;
    Ok(Json(transaction))
}

// ---------------------------------------------------------------------------
// POST /credits/{id}/approve
// ---------------------------------------------------------------------------

/// Approve a pending transaction. Reviewer notes are optional.
pub async fn approve_credit(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<ReviewCreditTransaction>,
) -> AppResult<impl IntoResponse> {
    let reviewed_by = require_field(input.reviewed_by, "reviewedBy")?;
    let review_notes = credit::normalize_review_notes(input.review_notes.as_deref())?;

    let decision = ReviewDecision {
        status: STATUS_APPROVED,
        reviewed_by,
        review_notes,
    };
    let transaction = review_transaction(&state, id, &decision).await?;

    tracing::info!(
        transaction_id = id,
        reviewed_by,
        "Credit transaction approved",
    );

    Ok(Json(TransactionResponse { transaction }))
}

// ---------------------------------------------------------------------------
// POST /credits/{id}/reject
// ---------------------------------------------------------------------------

/// Reject a pending transaction. Notes are mandatory and checked before
/// anything else.
pub async fn reject_credit(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<ReviewCreditTransaction>,
) -> AppResult<impl IntoResponse> {
    let review_notes = credit::require_rejection_notes(input.review_notes.as_deref())?;
    let reviewed_by = require_field(input.reviewed_by, "reviewedBy")?;

    let decision = ReviewDecision {
        status: STATUS_REJECTED,
        reviewed_by,
        review_notes: Some(review_notes),
    };
    let transaction = review_transaction(&state, id, &decision).await?;

    tracing::info!(
        transaction_id = id,
        reviewed_by,
        "Credit transaction rejected",
    );

    Ok(Json(TransactionResponse { transaction }))
}

/// Shared approve/reject path: existence (404), then status (400), then the
/// reviewer's role (403), then the guarded update.
async fn review_transaction(
    state: &AppState,
    id: DbId,
    decision: &ReviewDecision,
) -> AppResult<CreditTransaction> {
    let current = ensure_transaction_exists(&state.pool, id).await?;
    credit::ensure_reviewable(&current.status, decision.status)?;

    let reviewer = UserRepo::find_by_id(&state.pool, decision.reviewed_by)
        .await?
        .ok_or_else(|| {
            CoreError::Forbidden(format!(
                "Reviewer {} is not a known user",
                decision.reviewed_by
            ))
        })?;
    roles::ensure_credit_reviewer(&reviewer.role)?;

    if let Some(updated) = CreditTransactionRepo::review(&state.pool, id, decision).await? {
        return Ok(updated);
    }

    // Lost a race with another reviewer.
    let latest = ensure_transaction_exists(&state.pool, id).await?;
    credit::ensure_reviewable(&latest.status, decision.status)?;
    Err(AppError::InternalError(format!(
        "Review of credit transaction {id} matched no rows while pending"
    )))
}

// ---------------------------------------------------------------------------
// POST /credits/{id}/credit
// ---------------------------------------------------------------------------

/// Apply an approved transaction to the student's balance.
///
/// The balance increment, the `credited` stamp, and the booking's
/// `institutionApproved` flag commit together or not at all.
pub async fn apply_credit(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if let Some(applied) = CreditTransactionRepo::apply_credit(&state.pool, id).await? {
        tracing::info!(
            transaction_id = id,
            user_id = applied.user.id,
            booking_id = applied.transaction.booking_id,
            credits_earned = %applied.transaction.credits_earned,
            credit_balance = %applied.user.credit_balance,
            "Credit applied",
        );
        return Ok(Json(applied));
    }

    let current = ensure_transaction_exists(&state.pool, id).await?;
    credit::ensure_creditable(&current.status, current.credited_at.is_some())?;
    Err(AppError::InternalError(format!(
        "Credit step for transaction {id} matched no rows in status '{}'",
        current.status
    )))
}
