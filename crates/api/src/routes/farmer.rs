//! Route definitions for the `/farmers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::farmer;
use crate::state::AppState;

/// Routes mounted at `/farmers`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> register
/// GET    /{id}            -> get_by_id
/// GET    /{id}/plots      -> list_plots
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(farmer::list).post(farmer::register))
        .route("/{id}", get(farmer::get_by_id))
        .route("/{id}/plots", get(farmer::list_plots))
}
