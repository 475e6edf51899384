pub mod bookings;
pub mod credits;
pub mod health;
pub mod institutions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /institutions                         list, create
/// /institutions/{id}                    get
///
/// /users                                list, create
/// /users/{id}                           get
/// /users/{id}/credit-summary            balance and per-status totals
///
/// /bookings                             list, create
/// /bookings/{id}                        get
/// /bookings/{id}/confirm                pending -> confirmed
/// /bookings/{id}/complete               confirmed -> completed
/// /bookings/{id}/cancel                 pending|confirmed -> cancelled
///
/// /credits                              list, submit
/// /credits/{id}                         get
/// /credits/{id}/approve                 pending -> approved
/// /credits/{id}/reject                  pending -> rejected
/// /credits/{id}/credit                  approved -> credited (applies balance)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/institutions", institutions::router())
        .nest("/users", users::router())
        .nest("/bookings", bookings::router())
        .nest("/credits", credits::router())
}
