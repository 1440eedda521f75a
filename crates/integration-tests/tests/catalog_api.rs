//! Integration tests for catalog entity creation and validation.

use reqwest::StatusCode;
use serde_json::{Value, json};

use trolley_integration_tests::TestApp;

/// Create a store via the API and return its JSON record.
async fn create_store(app: &TestApp) -> Value {
    let response = app
        .client
        .post(app.api("/stores"))
        .json(&json!({
            "name": "Corner Shop",
            "address": "1 High Street",
            "layout_map": "<svg><rect id=\"aisle-1\"/></svg>",
        }))
        .send()
        .await
        .expect("create store");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("store body")
}

#[tokio::test]
async fn test_create_store_returns_generated_fields() {
    let app = TestApp::spawn().await;
    let store = create_store(&app).await;

    assert_eq!(store["name"], json!("Corner Shop"));
    assert!(!store["id"].as_str().expect("id").is_empty());
    assert!(store["created_at"].as_str().expect("created_at").contains('T'));
}

#[tokio::test]
async fn test_create_store_rejects_blank_name() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.api("/stores"))
        .json(&json!({
            "name": "   ",
            "address": "1 High Street",
            "layout_map": "<svg/>",
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_stores() {
    let app = TestApp::spawn().await;
    create_store(&app).await;
    create_store(&app).await;

    let response = app
        .client
        .get(app.api("/stores"))
        .send()
        .await
        .expect("list stores");
    assert_eq!(response.status(), StatusCode::OK);

    let stores: Vec<Value> = response.json().await.expect("stores body");
    assert_eq!(stores.len(), 2);
}

#[tokio::test]
async fn test_create_section_for_unknown_store_is_404() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.api("/sections"))
        .json(&json!({
            "store_id": "nonexistent-id",
            "name": "Dairy",
            "color": "#6f42c1",
            "map_element_id": "dairy-section",
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_category_rejects_cross_store_section() {
    let app = TestApp::spawn().await;
    let store_a = create_store(&app).await;
    let store_b = create_store(&app).await;

    let section: Value = app
        .client
        .post(app.api("/sections"))
        .json(&json!({
            "store_id": store_a["id"],
            "name": "Dairy",
            "color": "#6f42c1",
            "map_element_id": "aisle-1",
        }))
        .send()
        .await
        .expect("create section")
        .json()
        .await
        .expect("section body");

    let response = app
        .client
        .post(app.api("/categories"))
        .json(&json!({
            "store_id": store_b["id"],
            "section_id": section["id"],
            "name": "Milk & Cheese",
            "color": "#6f42c1",
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_with_negative_price_is_400_and_not_persisted() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .post(app.api("/products"))
        .json(&json!({
            "category_id": "cat-1",
            "section_id": "sec-1",
            "name": "Bad Apple",
            "price": "-1",
        }))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The failed create left nothing behind
    let found: Vec<Value> = app
        .client
        .get(app.api("/categories/cat-1/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("products body");
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_product_round_trip_and_category_listing() {
    let app = TestApp::spawn().await;
    let product: Value = app
        .client
        .post(app.api("/products"))
        .json(&json!({
            "category_id": "cat-1",
            "section_id": "sec-1",
            "name": "Whole Milk",
            "price": "3.49",
            "description": "1 gallon whole milk",
        }))
        .send()
        .await
        .expect("create product")
        .json()
        .await
        .expect("product body");
    assert_eq!(product["price"], json!("3.49"));

    let id = product["id"].as_str().expect("id");
    let fetched: Value = app
        .client
        .get(app.api(&format!("/products/{id}")))
        .send()
        .await
        .expect("get product")
        .json()
        .await
        .expect("product body");
    assert_eq!(fetched, product);

    let in_category: Vec<Value> = app
        .client
        .get(app.api("/categories/cat-1/products"))
        .send()
        .await
        .expect("list products")
        .json()
        .await
        .expect("products body");
    assert_eq!(in_category.len(), 1);
    assert_eq!(in_category[0]["name"], json!("Whole Milk"));
}

#[tokio::test]
async fn test_product_defaults_apply_when_fields_omitted() {
    let app = TestApp::spawn().await;
    let product: Value = app
        .client
        .post(app.api("/products"))
        .json(&json!({
            "category_id": "cat-1",
            "section_id": "sec-1",
            "name": "Free Sample",
        }))
        .send()
        .await
        .expect("create product")
        .json()
        .await
        .expect("product body");
    assert_eq!(product["price"], json!("0"));
    assert_eq!(product["description"], json!(""));
}

#[tokio::test]
async fn test_get_unknown_product_is_404() {
    let app = TestApp::spawn().await;
    let response = app
        .client
        .get(app.api("/products/nonexistent-id"))
        .send()
        .await
        .expect("request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
