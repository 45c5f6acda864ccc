use axum::routing::{get, put};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/services`.
///
/// ```text
/// GET    /                     -> list (?active_only=true)
/// POST   /                     -> create
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// PUT    /{id}/deactivate      -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list).post(catalog::create))
        .route(
            "/{id}",
            get(catalog::get_by_id)
                .put(catalog::update)
                .delete(catalog::delete),
        )
        .route("/{id}/deactivate", put(catalog::deactivate))
}
