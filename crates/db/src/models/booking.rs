//! Booking model, DTOs, and the expanded detail view.

use serde::{Deserialize, Serialize};
use slotbook_core::booking::{deserialize_booking_time, deserialize_optional_booking_time};
use slotbook_core::types::{DbId, Timestamp};
use sqlx::FromRow;

use crate::models::client::Client;
use crate::models::service::Service;
use crate::models::user::UserResponse;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub client_id: DbId,
    pub service_id: DbId,
    pub user_id: DbId,
    pub booking_time: Timestamp,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A booking together with the rows it references.
///
/// Serializes as the booking's own fields plus `client`, `service` and
/// `user` sub-objects (`null` if the referenced row is gone).
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: Booking,
    pub client: Option<Client>,
    pub service: Option<Service>,
    pub user: Option<UserResponse>,
}

/// DTO for creating a booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub client_id: DbId,
    pub service_id: DbId,
    pub user_id: DbId,
    /// RFC 3339, or a naive date-time taken as UTC.
    #[serde(deserialize_with = "deserialize_booking_time")]
    pub booking_time: Timestamp,
    /// Defaults to `"pending"` if omitted.
    pub status: Option<String>,
}

/// DTO for updating a booking. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub client_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub user_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_optional_booking_time")]
    pub booking_time: Option<Timestamp>,
    pub status: Option<String>,
}
