//! Aggregated store view.
//!
//! Reconstructs a complete view of one store from the four collections with
//! a fixed fetch plan: store by key, sections and categories by store id,
//! then every product whose category appeared - one set-membership query,
//! not a lookup per category. The collections are returned un-joined;
//! relational stitching is the caller's concern.
//!
//! The read is not atomic with concurrent writes. For a catalog of this
//! size that transient inconsistency is accepted, and stale orphans (e.g. a
//! product whose category was never written) are simply absent from the
//! view rather than an error.

use serde::Serialize;
use tracing::instrument;

use trolley_core::StoreId;

use super::CatalogError;
use crate::models::{Category, Product, Section, Store};
use crate::store::{RecordStore, collections, decode, decode_all};

/// A store together with all of its sections, categories, and products.
///
/// No ordering guarantee on any of the sequences, and no pagination: the
/// domain bounds a store's catalog to a few hundred items.
#[derive(Debug, Serialize)]
pub struct StoreView {
    pub store: Store,
    pub sections: Vec<Section>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Read-only composition of the full store view.
pub struct AggregationService<'a> {
    records: &'a dyn RecordStore,
}

impl<'a> AggregationService<'a> {
    /// Create a new aggregation service over the given record store.
    #[must_use]
    pub const fn new(records: &'a dyn RecordStore) -> Self {
        Self { records }
    }

    /// Compose the full view of one store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the store id does not resolve.
    #[instrument(skip(self), fields(store_id = %store_id))]
    pub async fn store_view(&self, store_id: &StoreId) -> Result<StoreView, CatalogError> {
        let store_doc = self
            .records
            .get(collections::STORES, store_id.as_str())
            .await?
            .ok_or(CatalogError::NotFound("store"))?;
        let store: Store = decode(collections::STORES, store_doc)?;

        let sections: Vec<Section> = decode_all(
            collections::SECTIONS,
            self.records
                .find_where(collections::SECTIONS, "store_id", store_id.as_str())
                .await?,
        )?;

        let categories: Vec<Category> = decode_all(
            collections::CATEGORIES,
            self.records
                .find_where(collections::CATEGORIES, "store_id", store_id.as_str())
                .await?,
        )?;

        let category_ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        let products: Vec<Product> = decode_all(
            collections::PRODUCTS,
            self.records
                .find_where_in(collections::PRODUCTS, "category_id", &category_ids)
                .await?,
        )?;

        Ok(StoreView {
            store,
            sections,
            categories,
            products,
        })
    }
}
