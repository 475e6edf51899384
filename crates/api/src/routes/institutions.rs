use axum::routing::{get, post};
use axum::Router;

use crate::handlers::institutions;
use crate::state::AppState;

/// Institution routes, mounted at `/institutions`.
///
/// ```text
/// POST   /                  -> create_institution
/// GET    /                  -> list_institutions
/// GET    /{id}              -> get_institution
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(institutions::create_institution).get(institutions::list_institutions),
        )
        .route("/{id}", get(institutions::get_institution))
}
