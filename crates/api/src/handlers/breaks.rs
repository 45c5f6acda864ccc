//! Handlers for the `/breaks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotbook_core::types::DbId;
use slotbook_db::models::break_period::{Break, CreateBreak, UpdateBreak};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath};
use crate::middleware::auth::AuthContext;
use crate::response::{ApiResponse, Deleted};
use crate::services::BreakService;
use crate::state::AppState;

/// POST /api/breaks
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateBreak>,
) -> AppResult<(StatusCode, Json<ApiResponse<Break>>)> {
    let item = BreakService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(item))))
}

/// GET /api/breaks
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Break>>>> {
    let items = BreakService::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// GET /api/breaks/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Break>>> {
    let item = BreakService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// PUT /api/breaks/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateBreak>,
) -> AppResult<Json<ApiResponse<Break>>> {
    let item = BreakService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(item)))
}

/// DELETE /api/breaks/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    BreakService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
