//! Repository for the `plots` table.

use std::collections::HashMap;

use mrv_core::types::DbId;
use sqlx::PgPool;

use crate::models::measurement::Measurement;
use crate::models::plot::{CreatePlot, Plot, PlotWithMeasurements};
use crate::repositories::measurement_repo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, farmer_id, area_ha, geometry, created_at";

/// Provides create/read operations for plots.
pub struct PlotRepo;

impl PlotRepo {
    /// Insert a new plot, returning the created row.
    ///
    /// A missing farmer surfaces as a foreign-key violation from the database.
    pub async fn create(pool: &PgPool, input: &CreatePlot) -> Result<Plot, sqlx::Error> {
        let query = format!(
            "INSERT INTO plots (farmer_id, area_ha, geometry)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plot>(&query)
            .bind(input.farmer_id)
            .bind(input.area_ha)
            .bind(&input.geometry)
            .fetch_one(pool)
            .await
    }

    /// Find a plot by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Plot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plots WHERE id = $1");
        sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a farmer's plots in registration order.
    pub async fn list_by_farmer(pool: &PgPool, farmer_id: DbId) -> Result<Vec<Plot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM plots WHERE farmer_id = $1 ORDER BY id");
        sqlx::query_as::<_, Plot>(&query)
            .bind(farmer_id)
            .fetch_all(pool)
            .await
    }

    /// Find a plot by ID together with all of its measurements.
    ///
    /// Both reads share one READ COMMITTED transaction. Plot rows are never
    /// updated, and the measurement list comes from a single statement, so
    /// the result never mixes two versions of a plot's measurement set.
    pub async fn find_with_measurements(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlotWithMeasurements>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM plots WHERE id = $1");
        let plot = sqlx::query_as::<_, Plot>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let result = match plot {
            Some(plot) => {
                let query = format!(
                    "SELECT {} FROM measurements WHERE plot_id = $1 ORDER BY id",
                    measurement_repo::COLUMNS
                );
                let measurements = sqlx::query_as::<_, Measurement>(&query)
                    .bind(plot.id)
                    .fetch_all(&mut *tx)
                    .await?;
                Some(PlotWithMeasurements { plot, measurements })
            }
            None => None,
        };

        tx.commit().await?;
        Ok(result)
    }

    /// List a farmer's plots, each with its measurements.
    ///
    /// Under READ COMMITTED a measurement inserted between the two reads may
    /// or may not appear; each plot's list is still the result of one
    /// statement.
    ///
    /// Measurements for all plots are fetched with a single `ANY($1)` query
    /// and grouped in memory.
    pub async fn list_with_measurements_by_farmer(
        pool: &PgPool,
        farmer_id: DbId,
    ) -> Result<Vec<PlotWithMeasurements>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM plots WHERE farmer_id = $1 ORDER BY id");
        let plots = sqlx::query_as::<_, Plot>(&query)
            .bind(farmer_id)
            .fetch_all(&mut *tx)
            .await?;

        let plot_ids: Vec<DbId> = plots.iter().map(|p| p.id).collect();
        let query = format!(
            "SELECT {} FROM measurements WHERE plot_id = ANY($1) ORDER BY id",
            measurement_repo::COLUMNS
        );
        let measurements = sqlx::query_as::<_, Measurement>(&query)
            .bind(&plot_ids)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let mut by_plot: HashMap<DbId, Vec<Measurement>> = HashMap::new();
        for m in measurements {
            by_plot.entry(m.plot_id).or_default().push(m);
        }

        Ok(plots
            .into_iter()
            .map(|plot| {
                let measurements = by_plot.remove(&plot.id).unwrap_or_default();
                PlotWithMeasurements { plot, measurements }
            })
            .collect())
    }
}
