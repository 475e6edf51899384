//! Repository for the `bookings` table.

use sqlx::PgPool;
use tutorhub_core::booking::STATUS_COMPLETED;
use tutorhub_core::credit::default_credit_value;
use tutorhub_core::types::DbId;

use crate::models::booking::{Booking, BookingFilter, CreateBooking};

const COLUMNS: &str = "id, student_id, tutor_id, subject, scheduled_at, duration_minutes, \
    status, is_credit_eligible, credit_value, institution_approved, completed_at, \
    approved_at, created_at, updated_at";

/// Session length applied when the request omits `durationMinutes`.
pub const DEFAULT_DURATION_MINUTES: i32 = 60;

pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new `pending` booking, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (student_id, tutor_id, subject, scheduled_at, duration_minutes,
                 is_credit_eligible, credit_value)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.student_id)
            .bind(input.tutor_id)
            .bind(input.subject.trim())
            .bind(input.scheduled_at)
            .bind(input.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
            .bind(input.is_credit_eligible.unwrap_or(false))
            .bind(input.credit_value.unwrap_or_else(default_credit_value))
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookings matching the optional filters, most recently scheduled first.
    pub async fn list(
        pool: &PgPool,
        filter: &BookingFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE ($1::BIGINT IS NULL OR student_id = $1)
               AND ($2::BIGINT IS NULL OR tutor_id = $2)
               AND ($3::TEXT IS NULL OR status = $3)
             ORDER BY scheduled_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(filter.student_id)
            .bind(filter.tutor_id)
            .bind(&filter.status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count bookings matching the optional filters.
    pub async fn count(pool: &PgPool, filter: &BookingFilter) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings
             WHERE ($1::BIGINT IS NULL OR student_id = $1)
               AND ($2::BIGINT IS NULL OR tutor_id = $2)
               AND ($3::TEXT IS NULL OR status = $3)",
        )
        .bind(filter.student_id)
        .bind(filter.tutor_id)
        .bind(&filter.status)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Move a booking from `from` to `to`, stamping `completed_at` when the
    /// target is `completed`.
    ///
    /// The `WHERE status = $2` guard makes the transition atomic: returns
    /// `None` if the booking does not exist or is no longer in `from`.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        from: &str,
        to: &str,
    ) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!(
            "UPDATE bookings SET
                status = $3,
                completed_at = CASE WHEN $3::TEXT = $4::TEXT THEN NOW() ELSE completed_at END
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(from)
            .bind(to)
            .bind(STATUS_COMPLETED)
            .fetch_optional(pool)
            .await
    }
}
