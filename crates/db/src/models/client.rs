//! Client entity model and DTOs.

use serde::{Deserialize, Serialize};
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// Telegram user id.
    pub tg_id: Option<i64>,
    pub tg_nickname: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a client (full create and quick-add share it).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateClient {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub tg_id: Option<i64>,
    pub tg_nickname: Option<String>,
}

/// DTO for updating a client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub tg_id: Option<i64>,
    pub tg_nickname: Option<String>,
}
