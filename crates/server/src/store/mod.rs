//! Record store adapter.
//!
//! The catalog is persisted in four named collections of JSON documents,
//! each keyed by an opaque identifier string. [`RecordStore`] is the generic
//! adapter over that shape: it enforces no schema beyond key lookup, so any
//! document store (or the in-process [`MemoryStore`]) can sit behind it.
//!
//! Typed validation of stored documents happens on every read, at the
//! service boundary, via [`decode`] - records are never assumed correct
//! just because they came from storage.

mod memory;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use memory::MemoryStore;

/// Names of the four record collections.
pub mod collections {
    pub const STORES: &str = "stores";
    pub const SECTIONS: &str = "sections";
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
}

/// Errors surfaced by the record store adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record store cannot be reached. Fatal to the current request;
    /// never retried by the caller.
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    /// A stored document failed typed validation.
    #[error("corrupted record: {0}")]
    Corrupted(String),
}

/// Generic keyed record store over named collections of JSON documents.
///
/// Implementations are shared across concurrent requests and are responsible
/// for their own internal concurrency control. No cross-collection atomicity
/// is provided or expected.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a document into a collection under the given key.
    async fn insert(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<(), StoreError>;

    /// Fetch a single document by key.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Fetch every document in a collection. No ordering guarantee.
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Fetch every document whose string field equals `value`.
    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, StoreError>;

    /// Fetch every document whose string field is in `values`.
    ///
    /// One set-membership query, so callers can resolve a batch of foreign
    /// keys without issuing N individual lookups.
    async fn find_where_in(
        &self,
        collection: &str,
        field: &str,
        values: &[&str],
    ) -> Result<Vec<Value>, StoreError>;

    /// Remove every document in a collection, returning the removed count.
    async fn clear(&self, collection: &str) -> Result<u64, StoreError>;

    /// Verify the store is reachable. Used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Decode a stored document into a typed record.
///
/// # Errors
///
/// Returns [`StoreError::Corrupted`] if the document does not match the
/// expected shape.
pub fn decode<T: DeserializeOwned>(collection: &str, document: Value) -> Result<T, StoreError> {
    serde_json::from_value(document)
        .map_err(|e| StoreError::Corrupted(format!("{collection}: {e}")))
}

/// Decode a batch of stored documents into typed records.
///
/// # Errors
///
/// Returns [`StoreError::Corrupted`] on the first document that does not
/// match the expected shape; corrupt records are surfaced, never skipped.
pub fn decode_all<T: DeserializeOwned>(
    collection: &str,
    documents: Vec<Value>,
) -> Result<Vec<T>, StoreError> {
    documents
        .into_iter()
        .map(|document| decode(collection, document))
        .collect()
}

/// Encode a typed record into a storable JSON document.
///
/// # Errors
///
/// Returns [`StoreError::Corrupted`] if the record cannot be represented as
/// a JSON document.
pub fn encode<T: Serialize>(collection: &str, record: &T) -> Result<Value, StoreError> {
    serde_json::to_value(record)
        .map_err(|e| StoreError::Corrupted(format!("{collection}: {e}")))
}
