pub mod auth;
pub mod booking;
pub mod breaks;
pub mod catalog;
pub mod client;
pub mod health;
pub mod notification;
pub mod schedule;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                          register (public)
/// /auth/login                             login (public)
///
/// /users                                  list, create
/// /users/{id}                             get, update, delete
///
/// /clients                                list, create
/// /clients/{id}                           get, update, delete
/// /clients/telegram/{tg_id}               lookup by telegram id
/// /clients/filter?name=                   name filter
/// /clients/quick_add                      quick add (POST)
/// /clients/search?email=&phone=           search
/// /clients/check?phone_number=&tg_id=     existence check
///
/// /services                               list (?active_only), create
/// /services/{id}                          get, update, delete
/// /services/{id}/deactivate               deactivate (PUT)
///
/// /schedules                              list, create
/// /schedules/filter?user_id=              by staff user
/// /schedules/{id}                         get, update, delete
///
/// /breaks                                 list, create
/// /breaks/{id}                            get, update, delete
///
/// /bookings                               list, create
/// /bookings/{id}                          get, update, delete
/// /bookings/client/{client_id}            by client
/// /bookings/user/{user_id}                by staff user
/// /bookings/service/{service_id}          by service
/// /bookings/availability                  slot check
///
/// /notifications                          list (?client_id), create
/// /notifications/{id}                     get, update, delete
/// ```
///
/// Everything outside `/auth` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/clients", client::router())
        .nest("/services", catalog::router())
        .nest("/schedules", schedule::router())
        .nest("/breaks", breaks::router())
        .nest("/bookings", booking::router())
        .nest("/notifications", notification::router())
}
