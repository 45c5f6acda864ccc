//! Staff working-schedule model and DTOs.

use serde::{Deserialize, Serialize};
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `schedules` table.
///
/// Day and times are free-form strings (e.g. `"monday"`, `"09:00"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Schedule {
    pub id: DbId,
    pub user_id: DbId,
    pub schedule_day: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchedule {
    pub user_id: DbId,
    pub schedule_day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSchedule {
    pub user_id: Option<DbId>,
    pub schedule_day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
