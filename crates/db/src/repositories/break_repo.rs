//! Repository for the `breaks` table.

use sqlx::PgPool;
use slotbook_core::types::DbId;

use crate::models::break_period::{Break, CreateBreak, UpdateBreak};

const COLUMNS: &str = "id, user_id, break_start, break_end, created_at, updated_at";

/// Provides CRUD operations for staff breaks.
pub struct BreakRepo;

impl BreakRepo {
    pub async fn create(pool: &PgPool, input: &CreateBreak) -> Result<Break, sqlx::Error> {
        let query = format!(
            "INSERT INTO breaks (user_id, break_start, break_end)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Break>(&query)
            .bind(input.user_id)
            .bind(input.break_start)
            .bind(input.break_end)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Break>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breaks WHERE id = $1");
        sqlx::query_as::<_, Break>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Break>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM breaks ORDER BY id");
        sqlx::query_as::<_, Break>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBreak,
    ) -> Result<Option<Break>, sqlx::Error> {
        let query = format!(
            "UPDATE breaks SET
                user_id = COALESCE($2, user_id),
                break_start = COALESCE($3, break_start),
                break_end = COALESCE($4, break_end)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Break>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(input.break_start)
            .bind(input.break_end)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM breaks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
