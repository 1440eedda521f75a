//! Section route handlers.

use axum::Json;
use axum::extract::State;

use crate::error::Result;
use crate::models::{CreateSection, Section};
use crate::services::CatalogService;
use crate::state::AppState;

/// Create a section inside an existing store.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateSection>,
) -> Result<Json<Section>> {
    let section = CatalogService::new(state.records())
        .create_section(payload)
        .await?;
    Ok(Json(section))
}
