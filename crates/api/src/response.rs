//! Shared success envelope for API handlers.
//!
//! Every successful response is `{"success": true, "data": ...}`; the error
//! side of the envelope is rendered by [`AppError`](crate::error::AppError).

use serde::Serialize;
use slotbook_core::types::DbId;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(items)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: DbId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_shape() {
        let value = serde_json::to_value(ApiResponse::ok(Deleted { id: 5 })).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "data": {"id": 5}}));
    }
}
