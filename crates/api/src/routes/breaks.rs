use axum::routing::get;
use axum::Router;

use crate::handlers::breaks;
use crate::state::AppState;

/// Routes mounted at `/breaks`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(breaks::list).post(breaks::create))
        .route(
            "/{id}",
            get(breaks::get_by_id)
                .put(breaks::update)
                .delete(breaks::delete),
        )
}
