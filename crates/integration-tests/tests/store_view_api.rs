//! Integration tests for the aggregated store view.

use std::collections::HashSet;

use reqwest::StatusCode;
use serde_json::{Value, json};

use trolley_integration_tests::TestApp;

async fn store_view(app: &TestApp, store_id: &str) -> Value {
    let response = app
        .client
        .get(app.api(&format!("/stores/{store_id}")))
        .send()
        .await
        .expect("store view request");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("store view body")
}

#[tokio::test]
async fn test_unknown_store_view_is_404() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .get(app.api("/stores/nonexistent-id"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_seeded_store_view_contents() {
    let app = TestApp::spawn().await;
    let store_id = app.seed().await;
    let view = store_view(&app, &store_id).await;

    assert_eq!(view["store"]["name"], json!("SuperMart Central"));
    assert_eq!(view["sections"].as_array().expect("sections").len(), 14);
    assert_eq!(view["categories"].as_array().expect("categories").len(), 17);
    assert_eq!(view["products"].as_array().expect("products").len(), 34);

    // The canonical fixture product, reachable through the view
    let apples = view["products"]
        .as_array()
        .expect("products")
        .iter()
        .find(|p| p["name"] == json!("Fresh Apples"))
        .expect("Fresh Apples in products");
    assert_eq!(apples["price"], json!("2.99"));
}

#[tokio::test]
async fn test_view_is_internally_consistent() {
    let app = TestApp::spawn().await;
    let store_id = app.seed().await;
    let view = store_view(&app, &store_id).await;

    for section in view["sections"].as_array().expect("sections") {
        assert_eq!(section["store_id"].as_str(), Some(store_id.as_str()));
    }
    for category in view["categories"].as_array().expect("categories") {
        assert_eq!(category["store_id"].as_str(), Some(store_id.as_str()));
    }

    let category_ids: HashSet<&str> = view["categories"]
        .as_array()
        .expect("categories")
        .iter()
        .map(|c| c["id"].as_str().expect("category id"))
        .collect();
    for product in view["products"].as_array().expect("products") {
        let category_id = product["category_id"].as_str().expect("category_id");
        assert!(category_ids.contains(category_id));
    }
}

#[tokio::test]
async fn test_view_excludes_other_stores() {
    let app = TestApp::spawn().await;
    let seeded_id = app.seed().await;

    // A second store with its own section must not leak into the view
    let other: Value = app
        .client
        .post(app.api("/stores"))
        .json(&json!({
            "name": "Other Mart",
            "address": "2 Side Street",
            "layout_map": "<svg><rect id=\"other-aisle\"/></svg>",
        }))
        .send()
        .await
        .expect("create store")
        .json()
        .await
        .expect("store body");
    app.client
        .post(app.api("/sections"))
        .json(&json!({
            "store_id": other["id"],
            "name": "Other Aisle",
            "color": "#000000",
            "map_element_id": "other-aisle",
        }))
        .send()
        .await
        .expect("create section");

    let view = store_view(&app, &seeded_id).await;
    assert_eq!(view["sections"].as_array().expect("sections").len(), 14);
}

#[tokio::test]
async fn test_root_greeting_and_health() {
    let app = TestApp::spawn().await;

    let root: Value = app
        .client
        .get(app.api("/"))
        .send()
        .await
        .expect("root")
        .json()
        .await
        .expect("root body");
    assert_eq!(root["message"], json!("Smart Supermarket Trolley Assistant API"));

    let health = app
        .client
        .get(format!("{}/health", app.base_url))
        .send()
        .await
        .expect("health");
    assert_eq!(health.status(), StatusCode::OK);

    let ready = app
        .client
        .get(format!("{}/health/ready", app.base_url))
        .send()
        .await
        .expect("readiness");
    assert_eq!(ready.status(), StatusCode::OK);
}
