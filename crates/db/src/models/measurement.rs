//! Measurement entity model and DTOs.

use mrv_core::aggregation::Allometry;
use mrv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A measurement row from the `measurements` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Measurement {
    pub id: DbId,
    pub plot_id: DbId,
    pub species: String,
    pub dbh_cm: f64,
    pub height_m: f64,
    pub sample_point: String,
    pub photo_path: Option<String>,
    /// Carbon computed when the row was written. Informational only;
    /// aggregates recompute from `dbh_cm` and `height_m`.
    pub carbon_kg: f64,
    pub measured_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// DTO for recording a measurement. `carbon_kg` is filled in by the caller
/// from the estimator before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMeasurement {
    pub plot_id: DbId,
    pub species: String,
    pub dbh_cm: f64,
    pub height_m: f64,
    pub sample_point: String,
    pub photo_path: Option<String>,
    pub carbon_kg: f64,
    pub measured_at: Option<Timestamp>,
}

impl Allometry for Measurement {
    fn dbh_cm(&self) -> f64 {
        self.dbh_cm
    }

    fn height_m(&self) -> f64 {
        self.height_m
    }
}
