//! Product entity.

use serde::{Deserialize, Serialize};

use trolley_core::{CategoryId, Price, ProductId, SectionId};

/// A sellable item belonging to exactly one category.
///
/// `section_id` duplicates the owning category's section as a denormalized
/// navigation hint. The category's value is authoritative; a mismatch is
/// flagged at creation time but stored as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category_id: CategoryId,
    pub section_id: SectionId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub category_id: CategoryId,
    pub section_id: SectionId,
    pub name: String,
    /// Defaults to zero when omitted.
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub description: String,
}
