//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotbook_core::types::DbId;
use slotbook_db::models::user::UserResponse;

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::auth::AuthContext;
use crate::response::{ApiResponse, Deleted};
use crate::services::user::{CreateUserRequest, UpdateUserRequest};
use crate::services::UserService;
use crate::state::AppState;

/// POST /api/users
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<UserResponse>>)> {
    let user = UserService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// GET /api/users
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<UserResponse>>>> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    UserService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
