//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use slotbook_core::error::CoreError;
use slotbook_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller, extracted from `Authorization: Bearer <token>`.
///
/// Adding this as a handler parameter makes the route require a valid token:
///
/// ```ignore
/// async fn list(_auth: AuthContext, State(state): State<AppState>) -> AppResult<...> {
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// The `auth_users` id (from `claims.sub`).
    pub account_id: DbId,
    /// Linked staff user id, if any.
    pub user_id: Option<DbId>,
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token.trim(), &state.config.jwt).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthContext {
            account_id: claims.sub,
            user_id: claims.user_id,
        })
    }
}
