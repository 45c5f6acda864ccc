//! Booking slot rules.
//!
//! A slot is the pair (staff user id, exact booking timestamp). Two bookings
//! conflict only when both parts are equal; there is no interval overlap.

use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Status assigned to every new booking.
pub const STATUS_PENDING: &str = "pending";

/// Naive formats accepted in addition to RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// The booking conflict key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub user_id: DbId,
    pub booking_time: Timestamp,
}

impl Slot {
    pub fn new(user_id: DbId, booking_time: Timestamp) -> Self {
        Self {
            user_id,
            booking_time,
        }
    }
}

/// Resolve the status for a new booking: blank or absent means pending.
pub fn initial_status(requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(STATUS_PENDING)
        .to_string()
}

/// Parse a `booking_time` query value.
///
/// Accepts RFC 3339 (`2025-03-01T10:00:00Z`) and the naive forms
/// `2025-03-01T10:00:00` / `2025-03-01 10:00:00`, which are taken as UTC.
pub fn parse_booking_time(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::Validation("booking_time is required".to_string()));
    }

    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "booking_time '{raw}' is not a valid timestamp (expected RFC 3339)"
            ))
        })
}

/// Serde adapter for `booking_time` body fields. Accepts every form
/// [`parse_booking_time`] does, so bodies and query strings agree.
pub fn deserialize_booking_time<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_booking_time(&raw).map_err(serde::de::Error::custom)
}

/// Optional variant of [`deserialize_booking_time`]. Pair with
/// `#[serde(default)]` so an absent field stays `None`.
pub fn deserialize_optional_booking_time<'de, D>(
    deserializer: D,
) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_booking_time(&raw))
        .transpose()
        .map_err(serde::de::Error::custom)
}
