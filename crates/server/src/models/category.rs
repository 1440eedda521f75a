//! Category entity.

use serde::{Deserialize, Serialize};

use trolley_core::{CategoryId, SectionId, StoreId};

/// A merchandising grouping of products within a section
/// (e.g. "Milk & Cheese").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub store_id: StoreId,
    /// The section this category shelves in. Must belong to `store_id`.
    pub section_id: SectionId,
    pub name: String,
    pub color: String,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub store_id: StoreId,
    pub section_id: SectionId,
    pub name: String,
    pub color: String,
}
