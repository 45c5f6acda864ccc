//! Field-level validation rules applied by the service layer before any
//! create or update reaches the database.

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Maximum length of `schedules.schedule_day` (matches the column width).
pub const MAX_SCHEDULE_DAY_LEN: usize = 10;

/* --------------------------------------------------------------------------
Generic helpers
-------------------------------------------------------------------------- */

/// Reject a missing or whitespace-only string field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject an override that is present but blank.
///
/// `None` means "leave unchanged" and always passes.
pub fn reject_blank_override(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    match value {
        Some(v) => require_non_empty(field, v),
        None => Ok(()),
    }
}

/// Trim an optional string, collapsing blank values to `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reject a non-positive foreign key.
pub fn require_id(field: &str, id: DbId) -> Result<(), CoreError> {
    if id <= 0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a positive id"
        )));
    }
    Ok(())
}

/// A break must end after it starts.
pub fn validate_break_window(start: Timestamp, end: Timestamp) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(
            "break_end must be after break_start".to_string(),
        ));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Entity rules
-------------------------------------------------------------------------- */

/// A service must have a positive price and a positive duration in minutes.
pub fn validate_service_terms(price: f64, duration: i32) -> Result<(), CoreError> {
    if price.is_nan() || price <= 0.0 {
        return Err(CoreError::Validation(
            "Price must be greater than 0".to_string(),
        ));
    }
    if duration <= 0 {
        return Err(CoreError::Validation(
            "Duration must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

/// A staff user needs a username, a password and a role.
pub fn validate_new_user(username: &str, password: &str, role: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() || password.is_empty() || role.trim().is_empty() {
        return Err(CoreError::Validation(
            "username, password and role are required".to_string(),
        ));
    }
    Ok(())
}

/// A schedule row needs its owner plus day, start and end.
pub fn validate_schedule(
    user_id: DbId,
    schedule_day: &str,
    start_time: &str,
    end_time: &str,
) -> Result<(), CoreError> {
    require_id("user_id", user_id)?;
    require_non_empty("schedule_day", schedule_day)?;
    require_non_empty("start_time", start_time)?;
    require_non_empty("end_time", end_time)?;
    validate_schedule_day_len(schedule_day)
}

/// Enforce the column width of `schedule_day`.
pub fn validate_schedule_day_len(schedule_day: &str) -> Result<(), CoreError> {
    if schedule_day.chars().count() > MAX_SCHEDULE_DAY_LEN {
        return Err(CoreError::Validation(format!(
            "schedule_day must be at most {MAX_SCHEDULE_DAY_LEN} characters"
        )));
    }
    Ok(())
}
