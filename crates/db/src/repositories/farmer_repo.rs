//! Repository for the `farmers` table.

use mrv_core::types::DbId;
use sqlx::PgPool;

use crate::models::farmer::{CreateFarmer, Farmer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, phone, created_at";

/// Provides create/read operations for farmers.
pub struct FarmerRepo;

impl FarmerRepo {
    /// Insert a new farmer, returning the created row.
    ///
    /// Does not check for duplicates; see [`FarmerRepo::find_by_identity`].
    pub async fn create(pool: &PgPool, input: &CreateFarmer) -> Result<Farmer, sqlx::Error> {
        let query = format!(
            "INSERT INTO farmers (name, phone)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Farmer>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find the oldest farmer with exactly this name and phone.
    ///
    /// `IS NOT DISTINCT FROM` makes a NULL phone match only a NULL phone.
    pub async fn find_by_identity(
        pool: &PgPool,
        name: &str,
        phone: Option<&str>,
    ) -> Result<Option<Farmer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM farmers
             WHERE name = $1 AND phone IS NOT DISTINCT FROM $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Farmer>(&query)
            .bind(name)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Find a farmer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Farmer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM farmers WHERE id = $1");
        sqlx::query_as::<_, Farmer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all farmers in registration order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Farmer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM farmers ORDER BY id");
        sqlx::query_as::<_, Farmer>(&query).fetch_all(pool).await
    }
}
