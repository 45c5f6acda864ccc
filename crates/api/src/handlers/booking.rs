//! Handlers for the `/bookings` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use slotbook_core::types::DbId;
use slotbook_db::models::booking::{Booking, BookingDetail, CreateBooking, UpdateBooking};

use crate::error::AppResult;
use crate::extract::{ValidJson, ValidPath, ValidQuery};
use crate::middleware::auth::AuthContext;
use crate::query::AvailabilityParams;
use crate::response::{ApiResponse, Deleted};
use crate::services::BookingService;
use crate::state::AppState;

/// Payload of `GET /bookings/availability`.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// POST /api/bookings
///
/// 409 if the staff user already has a booking at exactly this time.
pub async fn create(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<ApiResponse<Booking>>)> {
    let booking = BookingService::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booking))))
}

/// GET /api/bookings
pub async fn list(
    _auth: AuthContext,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<BookingDetail>>>> {
    let bookings = BookingService::list(&state.pool).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<BookingDetail>>> {
    let booking = BookingService::get(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// PUT /api/bookings/{id}
pub async fn update(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
    ValidJson(input): ValidJson<UpdateBooking>,
) -> AppResult<Json<ApiResponse<Booking>>> {
    let booking = BookingService::update(&state.pool, id, input).await?;
    Ok(Json(ApiResponse::ok(booking)))
}

/// DELETE /api/bookings/{id}
pub async fn delete(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Deleted>>> {
    BookingService::delete(&state.pool, id).await?;
    Ok(Json(ApiResponse::ok(Deleted { id })))
}

/// GET /api/bookings/client/{client_id}
pub async fn list_by_client(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(client_id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = BookingService::list_by_client(&state.pool, client_id).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/user/{user_id}
pub async fn list_by_user(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(user_id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = BookingService::list_by_user(&state.pool, user_id).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/service/{service_id}
pub async fn list_by_service(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidPath(service_id): ValidPath<DbId>,
) -> AppResult<Json<ApiResponse<Vec<Booking>>>> {
    let bookings = BookingService::list_by_service(&state.pool, service_id).await?;
    Ok(Json(ApiResponse::ok(bookings)))
}

/// GET /api/bookings/availability?user_id=&booking_time=
pub async fn availability(
    _auth: AuthContext,
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<AvailabilityParams>,
) -> AppResult<Json<ApiResponse<AvailabilityResponse>>> {
    let available = BookingService::is_available(&state.pool, &params).await?;
    Ok(Json(ApiResponse::ok(AvailabilityResponse { available })))
}
