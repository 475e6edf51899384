//! Repository for the `users` table.

use sqlx::PgPool;
use tutorhub_core::roles::ROLE_STUDENT;
use tutorhub_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries (also used by the credit step's
/// `RETURNING` clause).
pub(crate) const COLUMNS: &str = "id, name, email, role, institution_id, credit_balance, \
                                  academic_year, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a zero balance, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, role, institution_id, academic_year)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.name.trim())
            .bind(input.email.trim())
            .bind(input.role.as_deref().unwrap_or(ROLE_STUDENT))
            .bind(input.institution_id)
            .bind(&input.academic_year)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users, optionally restricted to one institution, newest first.
    pub async fn list(
        pool: &PgPool,
        institution_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users
             WHERE ($1::BIGINT IS NULL OR institution_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(institution_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count users, optionally restricted to one institution.
    pub async fn count(pool: &PgPool, institution_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM users WHERE ($1::BIGINT IS NULL OR institution_id = $1)",
        )
        .bind(institution_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
