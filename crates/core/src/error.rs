use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// The entity exists but has nothing to report yet (e.g. a plot with no
    /// measurements). Kept apart from `NotFound` so "nothing measured" is
    /// never confused with "zero carbon".
    #[error("No data for {entity} with id {id}: {detail}")]
    NoData {
        entity: &'static str,
        id: DbId,
        detail: String,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
