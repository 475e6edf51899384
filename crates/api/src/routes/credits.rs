//! Route definitions for the credit transaction lifecycle.
//!
//! Mounted at `/credits` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::credits;
use crate::state::AppState;

/// Credit transaction routes.
///
/// ```text
/// POST   /                  -> submit_credit
/// GET    /                  -> list_credits
/// GET    /{id}              -> get_credit
/// POST   /{id}/approve      -> approve_credit
/// POST   /{id}/reject       -> reject_credit
/// POST   /{id}/credit       -> apply_credit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(credits::submit_credit).get(credits::list_credits))
        .route("/{id}", get(credits::get_credit))
        .route("/{id}/approve", post(credits::approve_credit))
        .route("/{id}/reject", post(credits::reject_credit))
        .route("/{id}/credit", post(credits::apply_credit))
}
