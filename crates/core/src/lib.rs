//! Domain logic for the MRV carbon service.
//!
//! Everything in this crate is pure and synchronous: the allometric carbon
//! estimator, the plot/farmer aggregator, request presence checks, and the
//! dashboard report builders. Persistence and HTTP live in `mrv-db` and
//! `mrv-api`.

pub mod aggregation;
pub mod carbon;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;
