//! Handlers for the `/measurements` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mrv_core::carbon;
use mrv_core::error::CoreError;
use mrv_core::types::{DbId, Timestamp};
use mrv_core::validation;
use mrv_db::models::measurement::{CreateMeasurement, Measurement};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::plot::ensure_plot_exists;
use crate::response::Created;
use crate::state::AppState;

/// Request body for recording a tree measurement.
#[derive(Debug, Deserialize)]
pub struct CreateMeasurementRequest {
    pub plot_id: Option<DbId>,
    pub species: Option<String>,
    pub dbh_cm: Option<f64>,
    pub height_m: Option<f64>,
    pub sample_point: Option<String>,
    pub photo_path: Option<String>,
    pub measured_at: Option<Timestamp>,
}

impl CreateMeasurementRequest {
    /// Check required fields and compute the carbon value to store.
    fn into_create(self) -> Result<CreateMeasurement, CoreError> {
        match (
            self.plot_id,
            self.species,
            self.dbh_cm,
            self.height_m,
            self.sample_point,
        ) {
            (Some(plot_id), Some(species), Some(dbh_cm), Some(height_m), Some(sample_point)) => {
                Ok(CreateMeasurement {
                    plot_id,
                    species,
                    dbh_cm,
                    height_m,
                    sample_point,
                    photo_path: self.photo_path,
                    carbon_kg: carbon::stored_carbon_kg(dbh_cm, height_m),
                    measured_at: self.measured_at,
                })
            }
            (plot_id, species, dbh_cm, height_m, sample_point) => {
                Err(validation::missing_fields(&[
                    ("plot_id", plot_id.is_none()),
                    ("species", species.is_none()),
                    ("dbh_cm", dbh_cm.is_none()),
                    ("height_m", height_m.is_none()),
                    ("sample_point", sample_point.is_none()),
                ]))
            }
        }
    }
}

/// POST /api/measurements
///
/// Stores the measurement with its carbon estimate and returns the full
/// record, `carbon_kg` included.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateMeasurementRequest>,
) -> AppResult<(StatusCode, Json<Created<Measurement>>)> {
    let input = body.into_create()?;

    ensure_plot_exists(state.store.as_ref(), input.plot_id).await?;
    let measurement = state.store.create_measurement(&input).await?;

    tracing::info!(
        measurement_id = measurement.id,
        plot_id = measurement.plot_id,
        carbon_kg = measurement.carbon_kg,
        "Measurement recorded",
    );
    Ok((
        StatusCode::CREATED,
        Json(Created::new("Measurement added", measurement)),
    ))
}

/// GET /api/measurements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Measurement>> {
    let measurement = state
        .store
        .find_measurement(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Measurement",
            id,
        }))?;
    Ok(Json(measurement))
}
