use axum::routing::get;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// Routes mounted at `/schedules`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /filter?user_id=   -> filter
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(schedule::list).post(schedule::create))
        .route("/filter", get(schedule::filter))
        .route(
            "/{id}",
            get(schedule::get_by_id)
                .put(schedule::update)
                .delete(schedule::delete),
        )
}
