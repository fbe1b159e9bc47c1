//! Route definitions for the `/measurements` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::measurement;
use crate::state::AppState;

/// Routes mounted at `/measurements`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(measurement::create))
        .route("/{id}", get(measurement::get_by_id))
}
