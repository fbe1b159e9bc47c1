//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async create/read
//! methods that accept `&PgPool` as the first argument. There are no update
//! or delete paths: every table is append-only.

pub mod farmer_repo;
pub mod measurement_repo;
pub mod plot_repo;

pub use farmer_repo::FarmerRepo;
pub use measurement_repo::MeasurementRepo;
pub use plot_repo::PlotRepo;
