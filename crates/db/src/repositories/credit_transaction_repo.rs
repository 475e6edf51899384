//! Repository for the `credit_transactions` table.
//!
//! Every status change is a conditional `UPDATE ... WHERE status = <expected>`
//! so two concurrent requests cannot both win the same transition. Callers
//! get `None` back when the guard fails and re-read the row to report why.

use sqlx::PgPool;
use tutorhub_core::credit::{STATUS_APPROVED, STATUS_CREDITED, STATUS_PENDING};
use tutorhub_core::types::DbId;

use crate::models::credit_transaction::{
    AppliedCredit, CreateCreditTransaction, CreditTransaction, CreditTransactionFilter,
    ReviewDecision, StatusTotal,
};
use crate::models::user::User;
use crate::repositories::user_repo::COLUMNS as USER_COLUMNS;

const COLUMNS: &str = "id, user_id, institution_id, booking_id, credits_earned, status, \
    reviewed_by, reviewed_at, review_notes, credited_at, created_at, updated_at";

/// Same as [`COLUMNS`], qualified for queries that join `users u`.
const QUALIFIED_COLUMNS: &str = "ct.id, ct.user_id, ct.institution_id, ct.booking_id, \
    ct.credits_earned, ct.status, ct.reviewed_by, ct.reviewed_at, ct.review_notes, \
    ct.credited_at, ct.created_at, ct.updated_at";

/// Shared `WHERE` clause for [`CreditTransactionRepo::list`] and
/// [`CreditTransactionRepo::count`]; binds `$1..$4` from the filter.
const FILTER_CLAUSE: &str = "($1::BIGINT IS NULL OR ct.user_id = $1)
               AND ($2::BIGINT IS NULL OR ct.institution_id = $2)
               AND ($3::TEXT IS NULL OR ct.status = $3)
               AND ($4::TEXT IS NULL OR u.academic_year = $4)";

pub struct CreditTransactionRepo;

impl CreditTransactionRepo {
    /// Insert a new `pending` transaction, returning the created row.
    ///
    /// A second insert for the same booking fails with a unique violation on
    /// `uq_credit_transactions_booking_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCreditTransaction,
    ) -> Result<CreditTransaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO credit_transactions
                (user_id, institution_id, booking_id, credits_earned, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(input.user_id)
            .bind(input.institution_id)
            .bind(input.booking_id)
            .bind(input.credits_earned)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CreditTransaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM credit_transactions WHERE id = $1");
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_booking_id(
        pool: &PgPool,
        booking_id: DbId,
    ) -> Result<Option<CreditTransaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM credit_transactions WHERE booking_id = $1");
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(booking_id)
            .fetch_optional(pool)
            .await
    }

    /// List transactions matching the filter, newest first.
    pub async fn list(
        pool: &PgPool,
        filter: &CreditTransactionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CreditTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS}
             FROM credit_transactions ct
             JOIN users u ON u.id = ct.user_id
             WHERE {FILTER_CLAUSE}
             ORDER BY ct.created_at DESC, ct.id DESC
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(filter.user_id)
            .bind(filter.institution_id)
            .bind(&filter.status)
            .bind(&filter.academic_year)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count transactions matching the filter (ignores pagination).
    pub async fn count(
        pool: &PgPool,
        filter: &CreditTransactionFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*)
             FROM credit_transactions ct
             JOIN users u ON u.id = ct.user_id
             WHERE {FILTER_CLAUSE}"
        );
        let row: (i64,) = sqlx::query_as(&query)
            .bind(filter.user_id)
            .bind(filter.institution_id)
            .bind(&filter.status)
            .bind(&filter.academic_year)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Record a reviewer decision on a `pending` transaction.
    ///
    /// Returns `None` if the transaction does not exist or is no longer
    /// pending.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        decision: &ReviewDecision,
    ) -> Result<Option<CreditTransaction>, sqlx::Error> {
        let query = format!(
            "UPDATE credit_transactions SET
                status = $2,
                reviewed_by = $3,
                reviewed_at = NOW(),
                review_notes = $4
             WHERE id = $1 AND status = $5
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(id)
            .bind(decision.status)
            .bind(decision.reviewed_by)
            .bind(&decision.review_notes)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }

    /// Apply an approved transaction to the student's balance.
    ///
    /// In one database transaction:
    /// 1. flip the transaction to `credited` (only if `approved` and never credited),
    /// 2. add `credits_earned` to the user's `credit_balance`,
    /// 3. mark the booking `institution_approved`.
    ///
    /// Step 1 is the guard: it row-locks the transaction, so a concurrent
    /// second call blocks and then matches zero rows. Returns `None` (and
    /// rolls back) when the guard fails.
    pub async fn apply_credit(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AppliedCredit>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE credit_transactions SET
                status = $2,
                credited_at = NOW()
             WHERE id = $1 AND status = $3 AND credited_at IS NULL
             RETURNING {COLUMNS}"
        );
        let transaction = sqlx::query_as::<_, CreditTransaction>(&query)
            .bind(id)
            .bind(STATUS_CREDITED)
            .bind(STATUS_APPROVED)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(transaction) = transaction else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "UPDATE users SET credit_balance = credit_balance + $2
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(transaction.user_id)
            .bind(transaction.credits_earned)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE bookings SET institution_approved = true, approved_at = NOW()
             WHERE id = $1",
        )
        .bind(transaction.booking_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(AppliedCredit { transaction, user }))
    }

    /// Per-status counts and credit sums for one user.
    pub async fn totals_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<StatusTotal>, sqlx::Error> {
        sqlx::query_as::<_, StatusTotal>(
            "SELECT status, COUNT(*) AS count, COALESCE(SUM(credits_earned), 0) AS total_credits
             FROM credit_transactions
             WHERE user_id = $1
             GROUP BY status
             ORDER BY status ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
