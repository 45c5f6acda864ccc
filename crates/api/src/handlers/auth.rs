//! Handlers for the `/auth` resource (register, login). Both are public.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotbook_db::models::auth_user::AuthUserResponse;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::ApiResponse;
use crate::services::auth::{LoginRequest, LoginResponse, RegisterRequest};
use crate::services::AuthService;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthUserResponse>>)> {
    let account = AuthService::register(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(account))))
}

/// POST /api/auth/login
///
/// Exchange username + password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let session = AuthService::login(&state.pool, &state.config.jwt, input).await?;
    Ok(Json(ApiResponse::ok(session)))
}
