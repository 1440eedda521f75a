//! Integration tests for Trolley.
//!
//! Each test spawns the real router on an ephemeral port with a fresh
//! in-memory record store, then drives it over HTTP with `reqwest`. No
//! external services are required, so every test is hermetic and tests
//! never share catalog state.
//!
//! # Test Categories
//!
//! - `catalog_api` - Entity creation and validation over HTTP
//! - `store_view_api` - Aggregated store view round-trips
//! - `search_api` - Product name search semantics
//! - `seed_api` - Reset-and-seed behavior

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use trolley_server::config::ServerConfig;
use trolley_server::routes;
use trolley_server::state::AppState;
use trolley_server::store::MemoryStore;

/// A running test server and a client pointed at it.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the full application on an ephemeral port.
    ///
    /// The server task lives until the test process exits; each call gets
    /// its own record store.
    pub async fn spawn() -> Self {
        let state = AppState::new(ServerConfig::default(), Arc::new(MemoryStore::new()));
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    #[must_use]
    pub fn api(&self, path: &str) -> String {
        format!("{}/api{path}", self.base_url)
    }

    /// POST the reset-and-seed route and return the new store id.
    pub async fn seed(&self) -> String {
        let response = self
            .client
            .post(self.api("/initialize-sample-data"))
            .send()
            .await
            .expect("seed request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("seed body");
        body["store_id"]
            .as_str()
            .expect("store_id in seed response")
            .to_owned()
    }
}
