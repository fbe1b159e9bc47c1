//! Route definitions for the farmer dashboard.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET    /          -> dashboard
/// GET    /export    -> export (?format=csv|json)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/export", get(dashboard::export))
}
