//! Handlers for the `/notifications` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use slotbook_core::types::DbId;
use slotbook_db::models::notification::{CreateNotification, Notification, UpdateNotification};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::middleware::auth::AuthContext;
use crate::response::{ApiResponse, Deleted};
use crate::services::NotificationService;
use crate::state::AppState;

/// `?client_id=` on the notification list.
#[derive(Debug, Deserialize)]
pub struct NotificationListParams {
    pub client_id: Option<DbId>,
}

/// POST /api/notifications
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<ApiResponse<Notification>>)> {
    let notification = NotificationService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(notification))))
}

/// GET /api/notifications?client_id=
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<NotificationListParams>,
) -> AppResult<Json<ApiResponse<Vec<Notification>>>> {
    let notifications = NotificationService::list(&state.pool, params.client_id).await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let notification = NotificationService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// PUT /api/notifications/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateNotification>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let notification = NotificationService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(notification)))
}

/// DELETE /api/notifications/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    NotificationService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
