//! HTTP-level integration tests for plot carbon totals and the farmer
//! dashboard.

mod common;

use std::sync::Arc;

use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_json, body_text, get};
use mrv_db::models::farmer::CreateFarmer;
use mrv_db::models::measurement::CreateMeasurement;
use mrv_db::models::plot::{CreatePlot, DEFAULT_GEOMETRY};
use mrv_db::store::{MemoryStore, MrvStore};

// ---------------------------------------------------------------------------
// calculate_carbon
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_calculate_carbon_sums_measurements() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha", None).await;
    let plot = common::create_plot(&app, farmer, 2.5).await;
    common::create_measurement(&app, plot, 10.0, 5.0).await;
    common::create_measurement(&app, plot, 15.0, 8.0).await;

    let response = get(app, &format!("/api/calculate_carbon/{plot}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["plot_id"], plot);
    assert_eq!(json["plot_area_ha"], 2.5);
    assert_eq!(json["measurement_count"], 2);
    assert_eq!(json["total_biomass_kg"], 230.0);
    assert_eq!(json["total_carbon_kg"], 108.1);
}

#[tokio::test]
async fn test_calculate_carbon_is_repeatable() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha", None).await;
    let plot = common::create_plot(&app, farmer, 1.0).await;
    common::create_measurement(&app, plot, 20.0, 10.0).await;

    let uri = format!("/api/calculate_carbon/{plot}");
    let first = body_json(get(app.clone(), &uri).await).await;
    let second = body_json(get(app, &uri).await).await;
    assert_eq!(first, second);
    assert_eq!(first["total_carbon_kg"], 188.0);
}

#[tokio::test]
async fn test_totals_recompute_from_dimensions_not_stored_carbon() {
    let store = Arc::new(MemoryStore::new());
    let farmer = store
        .create_farmer(&CreateFarmer {
            name: "Asha".to_string(),
            phone: None,
        })
        .await
        .unwrap();
    let plot = store
        .create_plot(&CreatePlot {
            farmer_id: farmer.id,
            area_ha: 1.0,
            geometry: DEFAULT_GEOMETRY.to_string(),
        })
        .await
        .unwrap();
    let measurement = store
        .create_measurement(&CreateMeasurement {
            plot_id: plot.id,
            species: "Teak".to_string(),
            dbh_cm: 20.0,
            height_m: 10.0,
            sample_point: "N-1".to_string(),
            photo_path: None,
            carbon_kg: 9999.0,
            measured_at: None,
        })
        .await
        .unwrap();

    let app = common::build_with_store(store);

    let uri = format!("/api/measurements/{}", measurement.id);
    let stored = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(stored["carbon_kg"], 9999.0);

    let uri = format!("/api/calculate_carbon/{}", plot.id);
    let json = body_json(get(app.clone(), &uri).await).await;
    assert_eq!(json["total_carbon_kg"], 188.0);
    assert_eq!(json["total_biomass_kg"], 400.0);

    let dashboard = body_json(get(app, "/api/dashboard").await).await;
    assert_eq!(dashboard[0]["plots"][0]["total_carbon"], 188.0);
}

#[tokio::test]
async fn test_calculate_carbon_for_empty_plot_returns_no_data() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha", None).await;
    let plot = common::create_plot(&app, farmer, 1.0).await;

    let response = get(app, &format!("/api/calculate_carbon/{plot}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NO_DATA");
    assert_eq!(json["error"], "No measurements found for this plot");
}

#[tokio::test]
async fn test_calculate_carbon_for_unknown_plot_returns_not_found() {
    let app = common::build_test_app();
    let response = get(app, "/api/calculate_carbon/41").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Plot with id 41 not found");
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_dashboard_lists_every_plot_without_farmer_total() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha", Some("98450")).await;
    let empty = common::create_plot(&app, farmer, 2.0).await;
    let measured = common::create_plot(&app, farmer, 1.0).await;
    common::create_measurement(&app, measured, 10.0, 5.0).await;
    common::create_measurement(&app, measured, 15.0, 8.0).await;
    let idle = common::create_farmer(&app, "Ravi", None).await;

    let response = get(app, "/api/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let farmers = json.as_array().unwrap();
    assert_eq!(farmers.len(), 2);

    let entry = &farmers[0];
    assert_eq!(entry["farmer_id"], farmer);
    assert_eq!(entry["farmer_name"], "Asha");
    assert!(entry.get("total_carbon").is_none());
    assert!(entry.get("total_carbon_kg").is_none());

    let plots = entry["plots"].as_array().unwrap();
    assert_eq!(plots.len(), 2);
    assert_eq!(plots[0]["plot_id"], empty);
    assert_eq!(plots[0]["area_ha"], 2.0);
    assert_eq!(plots[0]["total_carbon"], 0.0);
    assert_eq!(plots[1]["plot_id"], measured);
    assert_eq!(plots[1]["total_carbon"], 108.1);

    assert_eq!(farmers[1]["farmer_id"], idle);
    assert!(farmers[1]["plots"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_dashboard_empty_store() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/dashboard").await).await;
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_export_csv() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha, Jr.", None).await;
    let plot = common::create_plot(&app, farmer, 1.0).await;
    common::create_measurement(&app, plot, 20.0, 10.0).await;
    common::create_farmer(&app, "Ravi", None).await;

    let response = get(app, "/api/dashboard/export?format=csv").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert!(response.headers()[CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("attachment"));

    let text = body_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "farmer_id,farmer_name,plot_id,area_ha,total_carbon_kg");
    assert_eq!(lines[1], format!("{farmer},\"Asha, Jr.\",{plot},1,188"));
    assert_eq!(lines.len(), 2);
}

#[tokio::test]
async fn test_export_json_rows() {
    let app = common::build_test_app();
    let farmer = common::create_farmer(&app, "Asha", None).await;
    common::create_plot(&app, farmer, 1.0).await;
    common::create_plot(&app, farmer, 3.0).await;

    let json = body_json(get(app, "/api/dashboard/export").await).await;
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["farmer_name"], "Asha");
    assert_eq!(rows[1]["area_ha"], 3.0);
    assert_eq!(rows[1]["total_carbon_kg"], 0.0);
}

#[tokio::test]
async fn test_export_unknown_format_returns_400() {
    let app = common::build_test_app();
    let response = get(app, "/api/dashboard/export?format=xlsx").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
