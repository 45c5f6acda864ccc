//! Client notification records. Nothing here sends anything.

use slotbook_core::types::DbId;
use slotbook_core::validation::{reject_blank_override, require_id, require_non_empty};
use slotbook_db::models::notification::{CreateNotification, Notification, UpdateNotification};
use slotbook_db::repositories::{ClientRepo, NotificationRepo};
use sqlx::PgPool;

use crate::error::AppResult;
use crate::services::{dangling_reference, not_found};

pub struct NotificationService;

impl NotificationService {
    pub async fn create(pool: &PgPool, input: CreateNotification) -> AppResult<Notification> {
        require_id("client_id", input.client_id)?;
        require_non_empty("message", &input.message)?;
        reject_blank_override("status", input.status.as_deref())?;
        if ClientRepo::find_by_id(pool, input.client_id).await?.is_none() {
            return Err(dangling_reference("client_id", input.client_id));
        }

        Ok(NotificationRepo::create(pool, &input).await?)
    }

    pub async fn get(pool: &PgPool, id: DbId) -> AppResult<Notification> {
        NotificationRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found("Notification", id))
    }

    /// All notifications, or only those of one client.
    pub async fn list(pool: &PgPool, client_id: Option<DbId>) -> AppResult<Vec<Notification>> {
        let notifications = match client_id {
            Some(client_id) => NotificationRepo::list_by_client(pool, client_id).await?,
            None => NotificationRepo::list(pool).await?,
        };
        Ok(notifications)
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: UpdateNotification,
    ) -> AppResult<Notification> {
        reject_blank_override("message", input.message.as_deref())?;
        reject_blank_override("status", input.status.as_deref())?;

        NotificationRepo::update(pool, id, &input)
            .await?
            .ok_or_else(|| not_found("Notification", id))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        if NotificationRepo::delete(pool, id).await? {
            Ok(())
        } else {
            Err(not_found("Notification", id))
        }
    }
}
