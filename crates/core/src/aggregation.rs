//! Plot- and farmer-level carbon rollups.
//!
//! Totals are always recomputed from raw tree dimensions. The carbon value
//! cached on each stored measurement is never read here, so the aggregate
//! endpoints stay the source of truth even if that cache were stale.
//!
//! Per-tree values are summed at full precision and only the reported totals
//! are rounded, which keeps `aggregate(A ++ B)` equal to the rounded raw sum
//! rather than the sum of two rounded sub-totals.

use serde::Serialize;

use crate::carbon::{carbon_from_biomass, estimate_biomass, round_kg};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Input abstractions
// ---------------------------------------------------------------------------

/// Anything carrying the two allometric inputs of one tree.
pub trait Allometry {
    fn dbh_cm(&self) -> f64;
    fn height_m(&self) -> f64;
}

/// A bare `(dbh_cm, height_m)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeDimensions {
    pub dbh_cm: f64,
    pub height_m: f64,
}

impl TreeDimensions {
    pub fn new(dbh_cm: f64, height_m: f64) -> Self {
        Self { dbh_cm, height_m }
    }
}

impl Allometry for TreeDimensions {
    fn dbh_cm(&self) -> f64 {
        self.dbh_cm
    }

    fn height_m(&self) -> f64 {
        self.height_m
    }
}

impl<T: Allometry + ?Sized> Allometry for &T {
    fn dbh_cm(&self) -> f64 {
        (**self).dbh_cm()
    }

    fn height_m(&self) -> f64 {
        (**self).height_m()
    }
}

/// A plot together with the measurements taken on it.
pub trait PlotMeasurements {
    type Measurement: Allometry;

    fn plot_id(&self) -> DbId;
    fn area_ha(&self) -> f64;
    fn measurements(&self) -> &[Self::Measurement];
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Rounded carbon totals for one plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotTotals {
    pub measurement_count: usize,
    pub total_biomass_kg: f64,
    pub total_carbon_kg: f64,
}

/// One row of the farmer dashboard: a plot and its rounded carbon total.
///
/// There is intentionally no farmer-level total alongside these rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSummary {
    pub plot_id: DbId,
    pub area_ha: f64,
    pub total_carbon: f64,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Sum of unrounded per-tree biomass.
fn raw_biomass<M: Allometry>(measurements: &[M]) -> f64 {
    measurements
        .iter()
        .map(|m| estimate_biomass(m.dbh_cm(), m.height_m()))
        .sum()
}

/// Total biomass and carbon for one plot's measurements.
///
/// An empty slice yields zero totals. Callers that must distinguish "nothing
/// measured" from "zero carbon" check cardinality before calling.
pub fn aggregate_plot<M: Allometry>(measurements: &[M]) -> PlotTotals {
    let total_biomass = raw_biomass(measurements);
    let total_carbon = carbon_from_biomass(total_biomass);

    PlotTotals {
        measurement_count: measurements.len(),
        total_biomass_kg: round_kg(total_biomass),
        total_carbon_kg: round_kg(total_carbon),
    }
}

/// Per-plot summaries for a farmer's plots, in input order.
///
/// Each plot is aggregated independently; a plot with no measurements is
/// reported with `total_carbon == 0.0`.
pub fn aggregate_farmer<P: PlotMeasurements>(plots: &[P]) -> Vec<PlotSummary> {
    plots
        .iter()
        .map(|plot| PlotSummary {
            plot_id: plot.plot_id(),
            area_ha: plot.area_ha(),
            total_carbon: aggregate_plot(plot.measurements()).total_carbon_kg,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
