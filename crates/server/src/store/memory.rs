//! In-process record store.
//!
//! Collections live in a `HashMap` guarded by an async `RwLock`, so reads
//! run concurrently and writes serialize per store handle. Documents are
//! cloned on the way out; callers never observe interior mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};

/// In-memory [`RecordStore`] implementation.
///
/// Collections are created lazily on first insert. Lookups against a
/// collection that has never been written behave as if it were empty.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Extract a document's string field, if present.
fn field_str<'a>(document: &'a Value, field: &str) -> Option<&'a str> {
    document.get(field).and_then(Value::as_str)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.to_owned(), document);
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn find_where(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .values()
                    .filter(|doc| field_str(doc, field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_where_in(
        &self,
        collection: &str,
        field: &str,
        values: &[&str],
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .values()
                    .filter(|doc| field_str(doc, field).is_some_and(|v| values.contains(&v)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn clear(&self, collection: &str) -> Result<u64, StoreError> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(collection)
            .map_or(0, |records| {
                let count = records.len();
                records.clear();
                count
            });
        Ok(removed as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();
        store
            .insert("stores", "s-1", json!({"id": "s-1", "name": "Corner Shop"}))
            .await
            .expect("insert");

        let doc = store.get("stores", "s-1").await.expect("get");
        assert_eq!(doc, Some(json!({"id": "s-1", "name": "Corner Shop"})));

        let missing = store.get("stores", "s-2").await.expect("get");
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_unknown_collection_reads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.list("sections").await.expect("list").is_empty());
        assert!(
            store
                .find_where("sections", "store_id", "s-1")
                .await
                .expect("find")
                .is_empty()
        );
        assert_eq!(store.clear("sections").await.expect("clear"), 0);
    }

    #[tokio::test]
    async fn test_find_where_filters_on_string_field() {
        let store = MemoryStore::new();
        for (id, store_id) in [("a", "s-1"), ("b", "s-1"), ("c", "s-2")] {
            store
                .insert("sections", id, json!({"id": id, "store_id": store_id}))
                .await
                .expect("insert");
        }

        let matched = store
            .find_where("sections", "store_id", "s-1")
            .await
            .expect("find");
        assert_eq!(matched.len(), 2);
        assert!(
            matched
                .iter()
                .all(|doc| doc["store_id"] == json!("s-1"))
        );
    }

    #[tokio::test]
    async fn test_find_where_in_is_one_set_lookup() {
        let store = MemoryStore::new();
        for (id, category_id) in [("p1", "c-1"), ("p2", "c-2"), ("p3", "c-3")] {
            store
                .insert("products", id, json!({"id": id, "category_id": category_id}))
                .await
                .expect("insert");
        }

        let matched = store
            .find_where_in("products", "category_id", &["c-1", "c-3"])
            .await
            .expect("find");
        assert_eq!(matched.len(), 2);

        let none = store
            .find_where_in("products", "category_id", &[])
            .await
            .expect("find");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_clear_empties_only_named_collection() {
        let store = MemoryStore::new();
        store
            .insert("products", "p1", json!({"id": "p1"}))
            .await
            .expect("insert");
        store
            .insert("stores", "s1", json!({"id": "s1"}))
            .await
            .expect("insert");

        assert_eq!(store.clear("products").await.expect("clear"), 1);
        assert!(store.list("products").await.expect("list").is_empty());
        assert_eq!(store.list("stores").await.expect("list").len(), 1);
    }
}
