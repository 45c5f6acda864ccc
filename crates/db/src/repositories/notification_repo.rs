//! Repository for the `notifications` table.

use sqlx::PgPool;
use slotbook_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification, UpdateNotification};

const COLUMNS: &str = "id, client_id, message, notification_type, sent_at, status";

pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification record. `sent_at` defaults to now and `status`
    /// to `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (client_id, message, notification_type, sent_at, status)
             VALUES ($1, $2, $3, COALESCE($4, NOW()), COALESCE($5, 'pending'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.client_id)
            .bind(&input.message)
            .bind(&input.notification_type)
            .bind(input.sent_at)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications WHERE id = $1");
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notifications ORDER BY sent_at DESC, id DESC");
        sqlx::query_as::<_, Notification>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notifications WHERE client_id = $1
             ORDER BY sent_at DESC, id DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotification,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET
                message = COALESCE($2, message),
                notification_type = COALESCE($3, notification_type),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(&input.message)
            .bind(&input.notification_type)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
