//! Handlers for the `/plots` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mrv_core::error::CoreError;
use mrv_core::types::DbId;
use mrv_core::validation;
use mrv_db::models::measurement::Measurement;
use mrv_db::models::plot::{CreatePlot, Plot, PlotWithMeasurements, DEFAULT_GEOMETRY};
use mrv_db::store::MrvStore;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::farmer::ensure_farmer_exists;
use crate::response::Created;
use crate::state::AppState;

/// Request body for plot registration.
#[derive(Debug, Deserialize)]
pub struct CreatePlotRequest {
    pub farmer_id: Option<DbId>,
    pub area_ha: Option<f64>,
    pub geometry: Option<String>,
}

/// Verify that a plot exists, returning the full row.
pub(crate) async fn ensure_plot_exists(store: &dyn MrvStore, id: DbId) -> AppResult<Plot> {
    store
        .find_plot(id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Plot", id }))
}

/// POST /api/plots
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePlotRequest>,
) -> AppResult<(StatusCode, Json<Created<Plot>>)> {
    let input = match (body.farmer_id, body.area_ha) {
        (Some(farmer_id), Some(area_ha)) => CreatePlot {
            farmer_id,
            area_ha,
            geometry: body
                .geometry
                .unwrap_or_else(|| DEFAULT_GEOMETRY.to_string()),
        },
        (farmer_id, area_ha) => {
            return Err(validation::missing_fields(&[
                ("farmer_id", farmer_id.is_none()),
                ("area_ha", area_ha.is_none()),
            ])
            .into())
        }
    };

    ensure_farmer_exists(state.store.as_ref(), input.farmer_id).await?;
    let plot = state.store.create_plot(&input).await?;

    tracing::info!(plot_id = plot.id, farmer_id = plot.farmer_id, "Plot registered");
    Ok((StatusCode::CREATED, Json(Created::new("Plot added", plot))))
}

/// GET /api/plots/{id}
///
/// Returns the plot with every measurement recorded on it.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlotWithMeasurements>> {
    let plot = state
        .store
        .get_plot_with_measurements(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Plot", id }))?;
    Ok(Json(plot))
}

/// GET /api/plots/{id}/measurements
///
/// An existing plot with no measurements yields an empty list.
pub async fn list_measurements(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Measurement>>> {
    ensure_plot_exists(state.store.as_ref(), id).await?;
    let measurements = state.store.get_measurements_for_plot(id).await?;
    Ok(Json(measurements))
}
