//! Booking entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tutorhub_core::types::{DbId, Timestamp};

/// A tutoring session row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub student_id: DbId,
    pub tutor_id: DbId,
    pub subject: String,
    pub scheduled_at: Timestamp,
    pub duration_minutes: i32,
    pub status: String,
    pub is_credit_eligible: bool,
    pub credit_value: Decimal,
    pub institution_approved: bool,
    pub completed_at: Option<Timestamp>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a new booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub student_id: DbId,
    pub tutor_id: DbId,
    pub subject: String,
    pub scheduled_at: Timestamp,
    /// Defaults to 60 if omitted.
    pub duration_minutes: Option<i32>,
    /// Defaults to `false` if omitted.
    pub is_credit_eligible: Option<bool>,
    /// Defaults to 0.5 if omitted.
    pub credit_value: Option<Decimal>,
}

/// Optional filters for listing bookings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFilter {
    pub student_id: Option<DbId>,
    pub tutor_id: Option<DbId>,
    pub status: Option<String>,
}
