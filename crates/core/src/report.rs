//! Farmer dashboard report shapes and the flattened CSV export.

use serde::Serialize;

use crate::aggregation::PlotSummary;
use crate::types::DbId;

/// CSV header for the dashboard export.
pub const DASHBOARD_CSV_HEADER: &str = "farmer_id,farmer_name,plot_id,area_ha,total_carbon_kg";

/// One farmer on the dashboard with a summary per plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FarmerDashboard {
    pub farmer_id: DbId,
    pub farmer_name: String,
    pub plots: Vec<PlotSummary>,
}

/// A dashboard entry flattened to one row per plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    pub farmer_id: DbId,
    pub farmer_name: String,
    pub plot_id: DbId,
    pub area_ha: f64,
    pub total_carbon_kg: f64,
}

/// Flatten the dashboard into plot rows. Farmers without plots produce none.
pub fn flatten_dashboard(dashboard: &[FarmerDashboard]) -> Vec<DashboardRow> {
    dashboard
        .iter()
        .flat_map(|farmer| {
            farmer.plots.iter().map(move |plot| DashboardRow {
                farmer_id: farmer.farmer_id,
                farmer_name: farmer.farmer_name.clone(),
                plot_id: plot.plot_id,
                area_ha: plot.area_ha,
                total_carbon_kg: plot.total_carbon,
            })
        })
        .collect()
}

/// Escape a value for CSV: wrap in quotes if it contains comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r')
    {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the dashboard as CSV, header first, one line per plot.
pub fn build_dashboard_csv(dashboard: &[FarmerDashboard]) -> String {
    let rows = flatten_dashboard(dashboard);
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(DASHBOARD_CSV_HEADER.to_string());

    for row in &rows {
        lines.push(format!(
            "{},{},{},{},{}",
            row.farmer_id,
            csv_escape(&row.farmer_name),
            row.plot_id,
            row.area_ha,
            row.total_carbon_kg,
        ));
    }

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}
