//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                              - Liveness check
//! GET  /health/ready                        - Readiness check (pings the record store)
//!
//! GET  /api/                                - API greeting
//!
//! # Stores
//! POST /api/stores                          - Create store
//! GET  /api/stores                          - List stores
//! GET  /api/stores/{store_id}               - Aggregated store view
//!
//! # Sections
//! POST /api/sections                        - Create section
//!
//! # Categories
//! POST /api/categories                      - Create category
//! GET  /api/categories/{category_id}/products - Products in a category
//!
//! # Products
//! POST /api/products                        - Create product
//! GET  /api/products/{product_id}           - Product by id
//! GET  /api/products/search/{query}         - Name search
//!
//! # Seed
//! POST /api/initialize-sample-data          - Destructive reset-and-seed
//! ```

pub mod categories;
pub mod products;
pub mod sections;
pub mod seed;
pub mod stores;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Json;
use axum::{
    Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Create the store routes router.
pub fn store_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(stores::create).get(stores::index))
        .route("/{store_id}", get(stores::show))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(categories::create))
        .route("/{category_id}/products", get(categories::products))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/{product_id}", get(products::show))
        .route("/search/{query}", get(products::search))
}

/// Create the `/api` router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .nest("/stores", store_routes())
        .route("/sections", post(sections::create))
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .route("/initialize-sample-data", post(seed::run))
}

/// Build the complete application router with middleware applied.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/api/", get(root))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from configured origins.
///
/// Credentials are never allowed: the API is unauthenticated, and the
/// wildcard default would be rejected by browsers anyway.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// API greeting.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Smart Supermarket Trolley Assistant API" }))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies record-store reachability before returning OK.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.records().ping().await {
        Ok(()) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
