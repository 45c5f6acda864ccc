//! Client notification model and DTOs.
//!
//! Notifications are stored records only; nothing here delivers them.

use serde::{Deserialize, Serialize};
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub client_id: DbId,
    pub message: String,
    pub notification_type: Option<String>,
    pub sent_at: Timestamp,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub client_id: DbId,
    pub message: String,
    pub notification_type: Option<String>,
    /// Defaults to now if omitted.
    pub sent_at: Option<Timestamp>,
    /// Defaults to `"pending"` if omitted.
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNotification {
    pub message: Option<String>,
    pub notification_type: Option<String>,
    pub status: Option<String>,
}
