//! Handlers for the `/schedules` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use slotbook_core::types::DbId;
use slotbook_db::models::schedule::{CreateSchedule, Schedule, UpdateSchedule};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::middleware::auth::AuthContext;
use crate::query::UserIdParams;
use crate::response::{ApiResponse, Deleted};
use crate::services::ScheduleService;
use crate::state::AppState;

/// POST /api/schedules
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSchedule>,
) -> AppResult<(StatusCode, Json<ApiResponse<Schedule>>)> {
    let schedule = ScheduleService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(schedule))))
}

/// GET /api/schedules
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Schedule>>>> {
    let schedules = ScheduleService::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(schedules)))
}

/// GET /api/schedules/filter?user_id=
pub async fn filter(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<UserIdParams>,
) -> AppResult<Json<ApiResponse<Vec<Schedule>>>> {
    let schedules = ScheduleService::list_by_user(&state.pool, params.user_id).await?;
    Ok(Json(ApiResponse::ok(schedules)))
}

/// GET /api/schedules/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Schedule>>> {
    let schedule = ScheduleService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(schedule)))
}

/// PUT /api/schedules/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateSchedule>,
) -> AppResult<Json<ApiResponse<Schedule>>> {
    let schedule = ScheduleService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(schedule)))
}

/// DELETE /api/schedules/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    ScheduleService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}
