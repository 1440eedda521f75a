//! Category route handlers.

use axum::Json;
use axum::extract::{Path, State};

use trolley_core::CategoryId;

use crate::error::Result;
use crate::models::{Category, CreateCategory, Product};
use crate::services::CatalogService;
use crate::state::AppState;

/// Create a category.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategory>,
) -> Result<Json<Category>> {
    let category = CatalogService::new(state.records())
        .create_category(payload)
        .await?;
    Ok(Json(category))
}

/// List every product in a category.
pub async fn products(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<Vec<Product>>> {
    let products = CatalogService::new(state.records())
        .products_by_category(&category_id)
        .await?;
    Ok(Json(products))
}
