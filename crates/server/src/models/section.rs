//! Section entity.

use serde::{Deserialize, Serialize};

use trolley_core::{SectionId, StoreId};

/// A labeled physical region of a store's floor map (e.g. "Dairy").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub store_id: StoreId,
    pub name: String,
    /// Display color, as given (typically a hex string).
    pub color: String,
    /// Identifier of the highlightable element inside the store's layout
    /// map. Unique within a store.
    pub map_element_id: String,
}

/// Payload for creating a section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSection {
    pub store_id: StoreId,
    pub name: String,
    pub color: String,
    pub map_element_id: String,
}
