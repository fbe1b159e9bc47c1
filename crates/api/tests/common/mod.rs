#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use mrv_api::config::{LogFormat, ServerConfig, StoreBackend};
use mrv_api::router::build_app_router;
use mrv_api::state::AppState;
use mrv_db::store::{MemoryStore, MrvStore, PgStore};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory,
        log_format: LogFormat::Text,
    }
}

/// Build the full application router over a caller-provided store.
pub fn build_with_store(store: Arc<dyn MrvStore>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Build the full application router over a fresh in-memory store.
///
/// The returned router shares its store across clones, so a test can issue
/// several requests against the same data by cloning it per request.
pub fn build_test_app() -> Router {
    build_with_store(Arc::new(MemoryStore::new()))
}

/// Build the full application router over a PostgreSQL pool.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    build_with_store(Arc::new(PgStore::new(pool)))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a farmer and return its id.
pub async fn create_farmer(app: &Router, name: &str, phone: Option<&str>) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/farmers",
        serde_json::json!({"name": name, "phone": phone}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a plot and return its id.
pub async fn create_plot(app: &Router, farmer_id: i64, area_ha: f64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/plots",
        serde_json::json!({"farmer_id": farmer_id, "area_ha": area_ha}),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Record a measurement and return the response body.
pub async fn create_measurement(
    app: &Router,
    plot_id: i64,
    dbh_cm: f64,
    height_m: f64,
) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/api/measurements",
        serde_json::json!({
            "plot_id": plot_id,
            "species": "Gliricidia",
            "dbh_cm": dbh_cm,
            "height_m": height_m,
            "sample_point": "N-1",
        }),
    )
    .await;
    body_json(response).await
}
