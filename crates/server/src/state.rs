//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::RecordStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the record-store client. The store handle is injected
/// here once at startup and passed down explicitly; nothing reaches for it
/// as ambient global state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    records: Arc<dyn RecordStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, records: Arc<dyn RecordStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, records }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn records(&self) -> &dyn RecordStore {
        self.inner.records.as_ref()
    }
}
