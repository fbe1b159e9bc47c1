//! Plot entity model and DTOs.

use mrv_core::aggregation::PlotMeasurements;
use mrv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::measurement::Measurement;

/// Geometry stored when a plot is registered without one.
pub const DEFAULT_GEOMETRY: &str = "{}";

/// A plot row from the `plots` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Plot {
    pub id: DbId,
    pub farmer_id: DbId,
    pub area_ha: f64,
    /// Opaque boundary text (GeoJSON or WKT). Never parsed.
    pub geometry: String,
    pub created_at: Timestamp,
}

/// DTO for registering a plot under an existing farmer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlot {
    pub farmer_id: DbId,
    pub area_ha: f64,
    pub geometry: String,
}

/// A plot together with every measurement recorded on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotWithMeasurements {
    #[serde(flatten)]
    pub plot: Plot,
    pub measurements: Vec<Measurement>,
}

impl PlotMeasurements for PlotWithMeasurements {
    type Measurement = Measurement;

    fn plot_id(&self) -> DbId {
        self.plot.id
    }

    fn area_ha(&self) -> f64 {
        self.plot.area_ha
    }

    fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }
}
