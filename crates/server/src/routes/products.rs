//! Product route handlers.

use axum::Json;
use axum::extract::{Path, State};

use trolley_core::ProductId;

use crate::error::{AppError, Result};
use crate::models::{CreateProduct, Product};
use crate::services::{CatalogService, SearchService};
use crate::state::AppState;

/// Create a product.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateProduct>,
) -> Result<Json<Product>> {
    let product = CatalogService::new(state.records())
        .create_product(payload)
        .await?;
    Ok(Json(product))
}

/// Fetch a product by id.
pub async fn show(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Product>> {
    let product = CatalogService::new(state.records())
        .get_product(&product_id)
        .await?;
    Ok(Json(product))
}

/// Search products by name.
///
/// A blank query segment is rejected here so that an empty path yields a
/// deterministic 400 instead of matching every product.
pub async fn search(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AppError::BadRequest(
            "search query must not be empty".to_owned(),
        ));
    }

    let products = SearchService::new(state.records()).search(query).await?;
    Ok(Json(products))
}
