use async_trait::async_trait;
use chrono::Utc;
use mrv_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::farmer::{CreateFarmer, Farmer};
use crate::models::measurement::{CreateMeasurement, Measurement};
use crate::models::plot::{CreatePlot, Plot, PlotWithMeasurements};
use crate::store::{MrvStore, StoreError, StoreResult};

/// Append-only tables. Ids are 1-based and equal to `index + 1`.
#[derive(Default)]
struct Tables {
    farmers: Vec<Farmer>,
    plots: Vec<Plot>,
    measurements: Vec<Measurement>,
}

impl Tables {
    fn next_id(len: usize) -> DbId {
        len as DbId + 1
    }

    fn plot_with_measurements(&self, plot: &Plot) -> PlotWithMeasurements {
        PlotWithMeasurements {
            plot: plot.clone(),
            measurements: self
                .measurements
                .iter()
                .filter(|m| m.plot_id == plot.id)
                .cloned()
                .collect(),
        }
    }
}

/// In-process [`MrvStore`]. All tables sit behind one lock, so every read
/// sees a consistent snapshot across farmers, plots, and measurements.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MrvStore for MemoryStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn find_farmer_by_identity(
        &self,
        name: &str,
        phone: Option<&str>,
    ) -> StoreResult<Option<Farmer>> {
        let tables = self.tables.read().await;
        Ok(tables
            .farmers
            .iter()
            .find(|f| f.has_identity(name, phone))
            .cloned())
    }

    async fn create_farmer(&self, input: &CreateFarmer) -> StoreResult<Farmer> {
        let mut tables = self.tables.write().await;
        let farmer = Farmer {
            id: Tables::next_id(tables.farmers.len()),
            name: input.name.clone(),
            phone: input.phone.clone(),
            created_at: Utc::now(),
        };
        tables.farmers.push(farmer.clone());
        Ok(farmer)
    }

    async fn find_farmer(&self, id: DbId) -> StoreResult<Option<Farmer>> {
        let tables = self.tables.read().await;
        Ok(tables.farmers.iter().find(|f| f.id == id).cloned())
    }

    async fn list_farmers(&self) -> StoreResult<Vec<Farmer>> {
        Ok(self.tables.read().await.farmers.clone())
    }

    async fn create_plot(&self, input: &CreatePlot) -> StoreResult<Plot> {
        let mut tables = self.tables.write().await;
        if !tables.farmers.iter().any(|f| f.id == input.farmer_id) {
            return Err(StoreError::MissingParent {
                entity: "Farmer",
                id: input.farmer_id,
            });
        }
        let plot = Plot {
            id: Tables::next_id(tables.plots.len()),
            farmer_id: input.farmer_id,
            area_ha: input.area_ha,
            geometry: input.geometry.clone(),
            created_at: Utc::now(),
        };
        tables.plots.push(plot.clone());
        Ok(plot)
    }

    async fn find_plot(&self, id: DbId) -> StoreResult<Option<Plot>> {
        let tables = self.tables.read().await;
        Ok(tables.plots.iter().find(|p| p.id == id).cloned())
    }

    async fn list_plots_for_farmer(&self, farmer_id: DbId) -> StoreResult<Vec<Plot>> {
        let tables = self.tables.read().await;
        Ok(tables
            .plots
            .iter()
            .filter(|p| p.farmer_id == farmer_id)
            .cloned()
            .collect())
    }

    async fn create_measurement(&self, input: &CreateMeasurement) -> StoreResult<Measurement> {
        let mut tables = self.tables.write().await;
        if !tables.plots.iter().any(|p| p.id == input.plot_id) {
            return Err(StoreError::MissingParent {
                entity: "Plot",
                id: input.plot_id,
            });
        }
        let measurement = Measurement {
            id: Tables::next_id(tables.measurements.len()),
            plot_id: input.plot_id,
            species: input.species.clone(),
            dbh_cm: input.dbh_cm,
            height_m: input.height_m,
            sample_point: input.sample_point.clone(),
            photo_path: input.photo_path.clone(),
            carbon_kg: input.carbon_kg,
            measured_at: input.measured_at,
            created_at: Utc::now(),
        };
        tables.measurements.push(measurement.clone());
        Ok(measurement)
    }

    async fn find_measurement(&self, id: DbId) -> StoreResult<Option<Measurement>> {
        let tables = self.tables.read().await;
        Ok(tables.measurements.iter().find(|m| m.id == id).cloned())
    }

    async fn get_measurements_for_plot(&self, plot_id: DbId) -> StoreResult<Vec<Measurement>> {
        let tables = self.tables.read().await;
        Ok(tables
            .measurements
            .iter()
            .filter(|m| m.plot_id == plot_id)
            .cloned()
            .collect())
    }

    async fn get_plot_with_measurements(
        &self,
        plot_id: DbId,
    ) -> StoreResult<Option<PlotWithMeasurements>> {
        let tables = self.tables.read().await;
        Ok(tables
            .plots
            .iter()
            .find(|p| p.id == plot_id)
            .map(|plot| tables.plot_with_measurements(plot)))
    }

    async fn get_plots_for_farmer(
        &self,
        farmer_id: DbId,
    ) -> StoreResult<Vec<PlotWithMeasurements>> {
        let tables = self.tables.read().await;
        Ok(tables
            .plots
            .iter()
            .filter(|p| p.farmer_id == farmer_id)
            .map(|plot| tables.plot_with_measurements(plot))
            .collect())
    }
}
