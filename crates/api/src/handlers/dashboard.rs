//! Handlers for the farmer dashboard and its export.

use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use mrv_core::aggregation::aggregate_farmer;
use mrv_core::report::{build_dashboard_csv, flatten_dashboard, FarmerDashboard};
use mrv_db::store::MrvStore;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /dashboard/export`.
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// `csv` or `json` (default).
    pub format: Option<String>,
}

/// Build one dashboard entry per farmer, each plot summarised independently.
///
/// No farmer-level carbon total is computed.
async fn build_dashboard(store: &dyn MrvStore) -> AppResult<Vec<FarmerDashboard>> {
    let farmers = store.list_farmers().await?;
    let mut dashboard = Vec::with_capacity(farmers.len());

    for farmer in farmers {
        let plots = store.get_plots_for_farmer(farmer.id).await?;
        dashboard.push(FarmerDashboard {
            farmer_id: farmer.id,
            farmer_name: farmer.name,
            plots: aggregate_farmer(&plots),
        });
    }

    Ok(dashboard)
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<Vec<FarmerDashboard>>> {
    let dashboard = build_dashboard(state.store.as_ref()).await?;
    Ok(Json(dashboard))
}

/// GET /api/dashboard/export?format=csv|json
///
/// One row per plot. Farmers without plots do not appear.
pub async fn export(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> AppResult<Response> {
    let dashboard = build_dashboard(state.store.as_ref()).await?;

    match params.format.as_deref().unwrap_or("json") {
        "csv" => Ok((
            [
                (CONTENT_TYPE, "text/csv; charset=utf-8"),
                (
                    CONTENT_DISPOSITION,
                    "attachment; filename=\"mrv-dashboard.csv\"",
                ),
            ],
            build_dashboard_csv(&dashboard),
        )
            .into_response()),
        "json" => Ok(Json(flatten_dashboard(&dashboard)).into_response()),
        other => Err(AppError::BadRequest(format!(
            "Unsupported export format '{other}', expected 'csv' or 'json'"
        ))),
    }
}
