//! Query parameter types shared across handler modules.

use serde::Deserialize;
use slotbook_core::types::DbId;

/// `?active_only=true` on the service list.
#[derive(Debug, Default, Deserialize)]
pub struct ActiveOnlyParams {
    #[serde(default)]
    pub active_only: bool,
}

/// `?user_id=` filter (schedules).
#[derive(Debug, Deserialize)]
pub struct UserIdParams {
    pub user_id: Option<DbId>,
}

/// `?name=` filter (clients).
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: Option<String>,
}

/// `?email=&phone=` client search.
#[derive(Debug, Deserialize)]
pub struct ClientSearchParams {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// `?phone_number=&tg_id=` client existence check.
#[derive(Debug, Deserialize)]
pub struct ClientCheckParams {
    pub phone_number: Option<String>,
    pub tg_id: Option<i64>,
}

/// `?user_id=&booking_time=` slot availability.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub user_id: Option<DbId>,
    pub booking_time: Option<String>,
}
