//! Seed route handler.

use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::services::{SeedService, SeedSummary};
use crate::state::AppState;

/// Wipe the catalog and rebuild the sample dataset.
///
/// Destructive and unconditional: every store, section, category, and
/// product is removed before the fixture is written.
pub async fn run(State(state): State<AppState>) -> Result<Json<SeedSummary>> {
    let summary = SeedService::new(state.records()).reset_and_seed().await?;
    Ok(Json(summary))
}
