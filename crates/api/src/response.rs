//! Shared response types for API handlers.
//!
//! Responses are bare JSON objects (no `data` envelope) so existing field
//! clients can read `id`, `message`, and `carbon_kg` at the top level.

use serde::Serialize;

/// A freshly written (or deduplicated) record with a status message merged
/// into the record's own fields.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(Created::new("Plot added", plot))))
/// ```
#[derive(Debug, Serialize)]
pub struct Created<T: Serialize> {
    pub message: &'static str,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Serialize> Created<T> {
    pub fn new(message: &'static str, record: T) -> Self {
        Self { message, record }
    }
}
