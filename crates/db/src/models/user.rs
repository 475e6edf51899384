//! User entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::types::{DbId, Timestamp};
use validator::Validate;

/// Full user row from the `users` table.
///
/// `credit_balance` is only ever changed by
/// [`CreditTransactionRepo::apply_credit`](crate::repositories::CreditTransactionRepo::apply_credit).
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub institution_id: Option<DbId>,
    pub credit_balance: Decimal,
    pub academic_year: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Defaults to `student` if omitted.
    pub role: Option<String>,
    pub institution_id: Option<DbId>,
    #[validate(length(min = 1, max = 20, message = "academicYear must be 1-20 characters"))]
    pub academic_year: Option<String>,
}
