//! Farmer entity model and DTOs.

use mrv_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A farmer row from the `farmers` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Farmer {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for registering a new farmer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFarmer {
    pub name: String,
    pub phone: Option<String>,
}

impl Farmer {
    /// Whether this farmer has exactly the given identity. An absent phone
    /// only matches an absent phone.
    pub fn has_identity(&self, name: &str, phone: Option<&str>) -> bool {
        self.name == name && self.phone.as_deref() == phone
    }
}
