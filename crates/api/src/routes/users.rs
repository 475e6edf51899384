//! Route definitions for users.
//!
//! Mounted at `/users` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST   /                      -> create_user
/// GET    /                      -> list_users
/// GET    /{id}                  -> get_user
/// GET    /{id}/credit-summary   -> credit_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::create_user).get(users::list_users))
        .route("/{id}", get(users::get_user))
        .route("/{id}/credit-summary", get(users::credit_summary))
}
