//! Store route handlers.

use axum::Json;
use axum::extract::{Path, State};

use trolley_core::StoreId;

use crate::error::Result;
use crate::models::{CreateStore, Store};
use crate::services::{AggregationService, CatalogService, StoreView};
use crate::state::AppState;

/// Create a store.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateStore>,
) -> Result<Json<Store>> {
    let store = CatalogService::new(state.records())
        .create_store(payload)
        .await?;
    Ok(Json(store))
}

/// List every store.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Store>>> {
    let stores = CatalogService::new(state.records()).list_stores().await?;
    Ok(Json(stores))
}

/// Aggregated view of one store: the store plus all of its sections,
/// categories, and products.
pub async fn show(
    State(state): State<AppState>,
    Path(store_id): Path<StoreId>,
) -> Result<Json<StoreView>> {
    let view = AggregationService::new(state.records())
        .store_view(&store_id)
        .await?;
    Ok(Json(view))
}
