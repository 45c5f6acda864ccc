//! Repository for the `schedules` table.

use sqlx::PgPool;
use slotbook_core::types::DbId;

use crate::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};

const COLUMNS: &str = "id, user_id, schedule_day, start_time, end_time, created_at, updated_at";

/// Provides CRUD operations for staff schedules.
pub struct ScheduleRepo;

impl ScheduleRepo {
    pub async fn create(pool: &PgPool, input: &CreateSchedule) -> Result<Schedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO schedules (user_id, schedule_day, start_time, end_time)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(input.user_id)
            .bind(&input.schedule_day)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE id = $1");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules ORDER BY id");
        sqlx::query_as::<_, Schedule>(&query).fetch_all(pool).await
    }

    /// All schedule rows belonging to one staff user.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Schedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schedules WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Schedule>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a schedule. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<Schedule>, sqlx::Error> {
        let query = format!(
            "UPDATE schedules SET
                user_id = COALESCE($2, user_id),
                schedule_day = COALESCE($3, schedule_day),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Schedule>(&query)
            .bind(id)
            .bind(input.user_id)
            .bind(&input.schedule_day)
            .bind(&input.start_time)
            .bind(&input.end_time)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
