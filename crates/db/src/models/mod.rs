//! Row models and DTOs, one module per table.

pub mod farmer;
pub mod measurement;
pub mod plot;
