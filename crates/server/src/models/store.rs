//! Store entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trolley_core::StoreId;

/// A single physical retail location with a vector-graphic floor map.
///
/// Stores are immutable after creation; the only delete path is the full
/// reset performed by the seed service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub address: String,
    /// Opaque serialized vector map (SVG) of the sales floor. The catalog
    /// never interprets it beyond guaranteeing that section map-element ids
    /// refer into it.
    pub layout_map: String,
    /// Stored as an RFC 3339 timestamp and parsed back on read.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub name: String,
    pub address: String,
    pub layout_map: String,
}
