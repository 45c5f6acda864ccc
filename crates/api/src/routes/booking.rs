//! Route definitions for the `/bookings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// GET    /                                   -> list (with client/service/user)
/// POST   /                                   -> create
/// GET    /availability?user_id=&booking_time= -> availability
/// GET    /client/{client_id}                 -> list_by_client
/// GET    /user/{user_id}                     -> list_by_user
/// GET    /service/{service_id}               -> list_by_service
/// GET    /{id}                               -> get_by_id (with client/service/user)
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list).post(booking::create))
        .route("/availability", get(booking::availability))
        .route("/client/{client_id}", get(booking::list_by_client))
        .route("/user/{user_id}", get(booking::list_by_user))
        .route("/service/{service_id}", get(booking::list_by_service))
        .route(
            "/{id}",
            get(booking::get_by_id)
                .put(booking::update)
                .delete(booking::delete),
        )
}
