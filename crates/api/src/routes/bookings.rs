//! Route definitions for tutoring session bookings.
//!
//! Mounted at `/bookings` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Booking routes.
///
/// ```text
/// POST   /                  -> create_booking
/// GET    /                  -> list_bookings
/// GET    /{id}              -> get_booking
/// POST   /{id}/confirm      -> confirm_booking
/// POST   /{id}/complete     -> complete_booking
/// POST   /{id}/cancel       -> cancel_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route("/{id}", get(bookings::get_booking))
        .route("/{id}/confirm", post(bookings::confirm_booking))
        .route("/{id}/complete", post(bookings::complete_booking))
        .route("/{id}/cancel", post(bookings::cancel_booking))
}
