//! Integration tests for reset-and-seed.

use reqwest::StatusCode;
use serde_json::Value;

use trolley_integration_tests::TestApp;

async fn collection_sizes(app: &TestApp, store_id: &str) -> (usize, usize, usize) {
    let view: Value = app
        .client
        .get(app.api(&format!("/stores/{store_id}")))
        .send()
        .await
        .expect("store view")
        .json()
        .await
        .expect("view body");
    (
        view["sections"].as_array().expect("sections").len(),
        view["categories"].as_array().expect("categories").len(),
        view["products"].as_array().expect("products").len(),
    )
}

#[tokio::test]
async fn test_seed_reports_new_store() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.api("/initialize-sample-data"))
        .send()
        .await
        .expect("seed request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("seed body");
    assert_eq!(
        body["message"],
        serde_json::json!("Sample data initialized successfully!")
    );
    assert!(!body["store_id"].as_str().expect("store_id").is_empty());
}

#[tokio::test]
async fn test_seeding_twice_replaces_the_catalog() {
    let app = TestApp::spawn().await;

    let first = app.seed().await;
    let first_counts = collection_sizes(&app, &first).await;

    let second = app.seed().await;
    assert_ne!(first, second);

    // Same shape every run; only the identifiers differ
    let second_counts = collection_sizes(&app, &second).await;
    assert_eq!(first_counts, second_counts);
    assert_eq!(second_counts, (14, 17, 34));

    // The first store was wiped
    let gone = app
        .client
        .get(app.api(&format!("/stores/{first}")))
        .send()
        .await
        .expect("request");
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);

    // Only one store remains listed
    let stores: Vec<Value> = app
        .client
        .get(app.api("/stores"))
        .send()
        .await
        .expect("list stores")
        .json()
        .await
        .expect("stores body");
    assert_eq!(stores.len(), 1);
}
