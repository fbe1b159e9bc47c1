//! Route definitions for the `/plots` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::plot;
use crate::state::AppState;

/// Routes mounted at `/plots`.
///
/// ```text
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// GET    /{id}/measurements   -> list_measurements
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(plot::create))
        .route("/{id}", get(plot::get_by_id))
        .route("/{id}/measurements", get(plot::list_measurements))
}
