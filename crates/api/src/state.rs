use std::sync::Arc;

use mrv_db::store::MrvStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence capability. Handlers only ever talk to the store through
    /// this handle, so tests can swap in an in-memory implementation.
    pub store: Arc<dyn MrvStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
