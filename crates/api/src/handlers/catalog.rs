//! Handlers for the `/services` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotbook_core::types::DbId;
use slotbook_db::models::service::{CreateService, Service, UpdateService};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::middleware::auth::AuthContext;
use crate::query::ActiveOnlyParams;
use crate::response::{ApiResponse, Deleted};
use crate::services::CatalogService;
use crate::state::AppState;

/// POST /api/services
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateService>,
) -> AppResult<(StatusCode, Json<ApiResponse<Service>>)> {
    let service = CatalogService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(service))))
}

/// GET /api/services?active_only=true
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ActiveOnlyParams>,
) -> AppResult<Json<ApiResponse<Vec<Service>>>> {
    let services = CatalogService::list(&state.pool, params.active_only).await?;
    Ok(Json(ApiResponse::ok(services)))
}

/// GET /api/services/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = CatalogService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(service)))
}

/// PUT /api/services/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateService>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = CatalogService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(service)))
}

/// PUT /api/services/{id}/deactivate
pub async fn deactivate(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let service = CatalogService::deactivate(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(service)))
}

/// DELETE /api/services/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    CatalogService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
