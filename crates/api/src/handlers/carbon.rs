//! Handler for plot-level carbon totals.

use axum::extract::{Path, State};
use axum::Json;
use mrv_core::aggregation::aggregate_plot;
use mrv_core::error::CoreError;
use mrv_core::types::DbId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Carbon totals for one plot, recomputed from its raw measurements.
#[derive(Debug, Serialize)]
pub struct PlotCarbonResponse {
    pub plot_id: DbId,
    pub plot_area_ha: f64,
    pub measurement_count: usize,
    pub total_biomass_kg: f64,
    pub total_carbon_kg: f64,
}

/// GET /api/calculate_carbon/{plot_id}
///
/// 404 `NOT_FOUND` if the plot does not exist, 404 `NO_DATA` if it exists
/// but has no measurements yet. The per-measurement `carbon_kg` stored at
/// write time is ignored; totals come from `dbh_cm` and `height_m`.
pub async fn calculate_carbon(
    State(state): State<AppState>,
    Path(plot_id): Path<DbId>,
) -> AppResult<Json<PlotCarbonResponse>> {
    let plot = state
        .store
        .get_plot_with_measurements(plot_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Plot",
            id: plot_id,
        }))?;

    if plot.measurements.is_empty() {
        return Err(AppError::Core(CoreError::NoData {
            entity: "Plot",
            id: plot_id,
            detail: "No measurements found for this plot".to_string(),
        }));
    }

    let totals = aggregate_plot(&plot.measurements);

    tracing::debug!(
        plot_id,
        measurement_count = totals.measurement_count,
        total_carbon_kg = totals.total_carbon_kg,
        "Plot carbon computed",
    );

    Ok(Json(PlotCarbonResponse {
        plot_id,
        plot_area_ha: plot.plot.area_ha,
        measurement_count: totals.measurement_count,
        total_biomass_kg: totals.total_biomass_kg,
        total_carbon_kg: totals.total_carbon_kg,
    }))
}
