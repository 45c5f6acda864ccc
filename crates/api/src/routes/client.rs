//! Route definitions for the `/clients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /telegram/{tg_id}        -> get_by_telegram
/// GET    /filter?name=            -> filter
/// POST   /quick_add               -> quick_add
/// GET    /search?email=&phone=    -> search
/// GET    /check?phone_number=&tg_id=  -> check
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route("/telegram/{tg_id}", get(client::get_by_telegram))
        .route("/filter", get(client::filter))
        .route("/quick_add", post(client::quick_add))
        .route("/search", get(client::search))
        .route("/check", get(client::check))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
}
