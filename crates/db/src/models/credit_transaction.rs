//! Credit transaction model, DTOs, and query filters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::types::{DbId, Timestamp};

use crate::models::user::User;

/// A row from the `credit_transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditTransaction {
    pub id: DbId,
    pub user_id: DbId,
    pub institution_id: DbId,
    pub booking_id: DbId,
    pub credits_earned: Decimal,
    pub status: String,
    pub reviewed_by: Option<DbId>,
    pub reviewed_at: Option<Timestamp>,
    pub review_notes: Option<String>,
    pub credited_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /credits`.
///
/// Both fields are optional at the serde level so a missing one is reported
/// by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCreditTransaction {
    pub booking_id: Option<DbId>,
    pub user_id: Option<DbId>,
}

/// Request body for approve/reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreditTransaction {
    pub reviewed_by: Option<DbId>,
    pub review_notes: Option<String>,
}

/// Insert DTO. Built by the submission handler from the booking and user
/// rows, never deserialized from a request directly.
#[derive(Debug, Clone)]
pub struct CreateCreditTransaction {
    pub user_id: DbId,
    pub institution_id: DbId,
    pub booking_id: DbId,
    pub credits_earned: Decimal,
}

/// A reviewer's decision on a pending transaction.
#[derive(Debug, Clone)]
pub struct ReviewDecision {
    /// Target status: `approved` or `rejected`.
    pub status: &'static str,
    pub reviewed_by: DbId,
    pub review_notes: Option<String>,
}

/// Result of a successful credit step: both rows as committed.
#[derive(Debug, Clone, Serialize)]
pub struct AppliedCredit {
    pub transaction: CreditTransaction,
    pub user: User,
}

/// Optional filters for listing credit transactions.
#[derive(Debug, Clone, Default)]
pub struct CreditTransactionFilter {
    pub user_id: Option<DbId>,
    pub institution_id: Option<DbId>,
    pub status: Option<String>,
    /// Matches the owning user's `academic_year`.
    pub academic_year: Option<String>,
}

/// Per-status aggregate for one user's transactions.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTotal {
    pub status: String,
    pub count: i64,
    pub total_credits: Decimal,
}
