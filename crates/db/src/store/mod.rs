//! The persistence capability handed to the HTTP layer.
//!
//! Handlers never reach for a global connection; they receive an
//! `Arc<dyn MrvStore>` through application state. [`PgStore`] backs it with
//! PostgreSQL and [`MemoryStore`] keeps everything in process for tests and
//! throwaway runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use mrv_core::types::DbId;

use crate::models::farmer::{CreateFarmer, Farmer};
use crate::models::measurement::{CreateMeasurement, Measurement};
use crate::models::plot::{CreatePlot, Plot, PlotWithMeasurements};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An insert referenced a parent row that does not exist.
    #[error("{entity} with id {id} does not exist")]
    MissingParent { entity: &'static str, id: DbId },

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Create/read operations over farmers, plots, and measurements.
///
/// Every collection is returned in ascending id order. A plot's measurement
/// list is produced by one read, so it never mixes two states of the plot.
#[async_trait]
pub trait MrvStore: Send + Sync {
    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// The earliest farmer with exactly this name and phone, if any.
    async fn find_farmer_by_identity(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> StoreResult<Option<Farmer>>;

    async fn create_farmer(&self, input: &CreateFarmer) -> StoreResult<Farmer>;

    async fn find_farmer(&self, id: DbId) -> StoreResult<Option<Farmer>>;

    async fn list_farmers(&self) -> StoreResult<Vec<Farmer>>;

    /// Insert a plot. Fails with [`StoreError::MissingParent`] if the farmer
    /// does not exist.
    async fn create_plot(&self, input: &CreatePlot) -> StoreResult<Plot>;

    async fn find_plot(&self, id: DbId) -> StoreResult<Option<Plot>>;

    async fn list_plots_for_farmer(&self, farmer_id: DbId) -> StoreResult<Vec<Plot>>;

    /// Insert a measurement. Fails with [`StoreError::MissingParent`] if the
    /// plot does not exist.
    async fn create_measurement(&self, input: &CreateMeasurement) -> StoreResult<Measurement>;

    async fn find_measurement(&self, id: DbId) -> StoreResult<Option<Measurement>>;

    /// All measurements for a plot; empty if the plot has none or is unknown.
    async fn get_measurements_for_plot(&self, plot_id: DbId) -> StoreResult<Vec<Measurement>>;

    async fn get_plot_with_measurements(
        &self,
        plot_id: DbId,
    ) -> StoreResult<Option<PlotWithMeasurements>>;

    async fn get_plots_for_farmer(&self, farmer_id: DbId)
        -> StoreResult<Vec<PlotWithMeasurements>>;
}
