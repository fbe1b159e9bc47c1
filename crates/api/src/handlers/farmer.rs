//! Handlers for the `/farmers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use mrv_core::error::CoreError;
use mrv_core::types::DbId;
use mrv_core::validation;
use mrv_db::models::farmer::{CreateFarmer, Farmer};
use mrv_db::models::plot::Plot;
use mrv_db::store::MrvStore;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::Created;
use crate::state::AppState;

/// Request body for farmer registration. Fields are optional here so a
/// missing `name` is reported as a validation error rather than a decode
/// failure.
#[derive(Debug, Deserialize)]
pub struct RegisterFarmerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Verify that a farmer exists, returning the full row.
pub(crate) async fn ensure_farmer_exists(store: &dyn MrvStore, id: DbId) -> AppResult<Farmer> {
    store.find_farmer(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Farmer",
            id,
        })
    })
}

/// POST /api/farmers
///
/// Registers a farmer, or returns the existing record with 200 when a farmer
/// with the same name and phone is already registered.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterFarmerRequest>,
) -> AppResult<(StatusCode, Json<Created<Farmer>>)> {
    let name = body
        .name
        .ok_or_else(|| validation::missing_fields(&[("name", true)]))?;
    validation::validate_farmer_name(&name)?;

    if let Some(existing) = state
        .store
        .find_farmer_by_identity(&name, body.phone.as_deref())
        .await?
    {
        tracing::info!(farmer_id = existing.id, "Farmer already registered");
        return Ok((
            StatusCode::OK,
            Json(Created::new("Farmer already exists", existing)),
        ));
    }

    let farmer = state
        .store
        .create_farmer(&CreateFarmer {
            name,
            phone: body.phone,
        })
        .await?;

    tracing::info!(farmer_id = farmer.id, "Farmer registered");
    Ok((StatusCode::CREATED, Json(Created::new("Farmer added", farmer))))
}

/// GET /api/farmers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Farmer>>> {
    let farmers = state.store.list_farmers().await?;
    Ok(Json(farmers))
}

/// GET /api/farmers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Farmer>> {
    let farmer = ensure_farmer_exists(state.store.as_ref(), id).await?;
    Ok(Json(farmer))
}

/// GET /api/farmers/{id}/plots
pub async fn list_plots(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Plot>>> {
    ensure_farmer_exists(state.store.as_ref(), id).await?;
    let plots = state.store.list_plots_for_farmer(id).await?;
    Ok(Json(plots))
}
