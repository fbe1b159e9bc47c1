//! Repository for the `measurements` table.

use mrv_core::types::DbId;
use sqlx::PgPool;

use crate::models::measurement::{CreateMeasurement, Measurement};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, plot_id, species, dbh_cm, height_m, sample_point, \
     photo_path, carbon_kg, measured_at, created_at";

/// Provides create/read operations for tree measurements.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// Insert a new measurement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMeasurement,
    ) -> Result<Measurement, sqlx::Error> {
        let query = format!(
            "INSERT INTO measurements
                (plot_id, species, dbh_cm, height_m, sample_point, photo_path, carbon_kg, measured_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(input.plot_id)
            .bind(&input.species)
            .bind(input.dbh_cm)
            .bind(input.height_m)
            .bind(&input.sample_point)
            .bind(&input.photo_path)
            .bind(input.carbon_kg)
            .bind(input.measured_at)
            .fetch_one(pool)
            .await
    }

    /// Find a measurement by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Measurement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE id = $1");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a plot's measurements in recording order. May be empty.
    pub async fn list_by_plot(
        pool: &PgPool,
        plot_id: DbId,
    ) -> Result<Vec<Measurement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE plot_id = $1 ORDER BY id");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(plot_id)
            .fetch_all(pool)
            .await
    }
}
