use async_trait::async_trait;
use mrv_core::types::DbId;

use crate::models::farmer::{CreateFarmer, Farmer};
use crate::models::measurement::{CreateMeasurement, Measurement};
use crate::models::plot::{CreatePlot, Plot, PlotWithMeasurements};
use crate::repositories::{FarmerRepo, MeasurementRepo, PlotRepo};
use crate::store::{MrvStore, StoreError, StoreResult};
use crate::DbPool;

/// PostgreSQL SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// [`MrvStore`] backed by a PostgreSQL pool, delegating to the repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate a foreign-key violation on insert into a missing-parent error.
fn map_insert_error(err: sqlx::Error, entity: &'static str, id: DbId) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            tracing::debug!(entity, id, "Insert rejected by foreign key");
            StoreError::MissingParent { entity, id }
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl MrvStore for PgStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_farmer_by_identity(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> StoreResult<Option<Farmer>> {
        Ok(FarmerRepo::find_by_identity(&self.pool, name, phone).await?)
    }

    async fn create_farmer(&self, input: &CreateFarmer) -> StoreResult<Farmer> {
        Ok(FarmerRepo::create(&self.pool, input).await?)
    }

    async fn find_farmer(&self, id: DbId) -> StoreResult<Option<Farmer>> {
        Ok(FarmerRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_farmers(&self) -> StoreResult<Vec<Farmer>> {
        Ok(FarmerRepo::list(&self.pool).await?)
    }

    async fn create_plot(&self, input: &CreatePlot) -> StoreResult<Plot> {
        PlotRepo::create(&self.pool, input)
            .await
            .map_err(|e| map_insert_error(e, "Farmer", input.farmer_id))
    }

    async fn find_plot(&self, id: DbId) -> StoreResult<Option<Plot>> {
        Ok(PlotRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_plots_for_farmer(&self, farmer_id: DbId) -> StoreResult<Vec<Plot>> {
        Ok(PlotRepo::list_by_farmer(&self.pool, farmer_id).await?)
    }

    async fn create_measurement(&self, input: &CreateMeasurement) -> StoreResult<Measurement> {
        MeasurementRepo::create(&self.pool, input)
            .await
            .map_err(|e| map_insert_error(e, "Plot", input.plot_id))
    }

    async fn find_measurement(&self, id: DbId) -> StoreResult<Option<Measurement>> {
        Ok(MeasurementRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_measurements_for_plot(&self, plot_id: DbId) -> StoreResult<Vec<Measurement>> {
        Ok(MeasurementRepo::list_by_plot(&self.pool, plot_id).await?)
    }

    async fn get_plot_with_measurements(
        &self,
        plot_id: DbId,
    ) -> StoreResult<Option<PlotWithMeasurements>> {
        Ok(PlotRepo::find_with_measurements(&self.pool, plot_id).await?)
    }

    async fn get_plots_for_farmer(
        &self,
        farmer_id: DbId,
    ) -> StoreResult<Vec<PlotWithMeasurements>> {
        Ok(PlotRepo::list_with_measurements_by_farmer(&self.pool, farmer_id).await?)
    }
}
