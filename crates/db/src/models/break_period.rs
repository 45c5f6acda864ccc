//! Staff break model and DTOs (`breaks` table).

use serde::{Deserialize, Serialize};
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `breaks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Break {
    pub id: DbId,
    pub user_id: DbId,
    pub break_start: Timestamp,
    pub break_end: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBreak {
    pub user_id: DbId,
    pub break_start: Timestamp,
    pub break_end: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBreak {
    pub user_id: Option<DbId>,
    pub break_start: Option<Timestamp>,
    pub break_end: Option<Timestamp>,
}
