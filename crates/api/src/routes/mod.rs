pub mod dashboard;
pub mod farmer;
pub mod health;
pub mod measurement;
pub mod plot;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /farmers                                 register, list
/// /farmers/{id}                            get
/// /farmers/{id}/plots                      list plots
///
/// /plots                                   register
/// /plots/{id}                              get (with measurements)
/// /plots/{id}/measurements                 list measurements
///
/// /measurements                            record
/// /measurements/{id}                       get
///
/// /calculate_carbon/{plot_id}              plot carbon totals
///
/// /dashboard                               per-farmer plot summaries
/// /dashboard/export                        flattened export (?format=csv|json)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/farmers", farmer::router())
        .nest("/plots", plot::router())
        .nest("/measurements", measurement::router())
        .nest("/dashboard", dashboard::router())
        .route(
            "/calculate_carbon/{plot_id}",
            get(handlers::carbon::calculate_carbon),
        )
}
