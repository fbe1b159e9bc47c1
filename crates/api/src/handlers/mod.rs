pub mod carbon;
pub mod dashboard;
pub mod farmer;
pub mod measurement;
pub mod plot;
