//! Repository for the `institutions` table.

use sqlx::PgPool;
use tutorhub_core::types::DbId;

use crate::models::institution::{CreateInstitution, Institution};

const COLUMNS: &str = "id, name, domain, is_active, created_at, updated_at";

pub struct InstitutionRepo;

impl InstitutionRepo {
    /// Insert a new institution, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstitution,
    ) -> Result<Institution, sqlx::Error> {
        let query = format!(
            "INSERT INTO institutions (name, domain)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Institution>(&query)
            .bind(input.name.trim())
            .bind(&input.domain)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Institution>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM institutions WHERE id = $1");
        sqlx::query_as::<_, Institution>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all institutions ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Institution>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM institutions ORDER BY name ASC");
        sqlx::query_as::<_, Institution>(&query)
            .fetch_all(pool)
            .await
    }
}
