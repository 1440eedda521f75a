//! Product name search.
//!
//! Case-insensitive substring match over product names, with full Unicode
//! case folding via `str::to_lowercase` rather than ASCII-only comparison.
//! Relevance is binary and results are unordered; there is no tokenization,
//! stemming, or fuzziness. An empty query matches every product - rejecting
//! blank queries is the HTTP boundary's job, not this service's.

use tracing::instrument;

use super::CatalogError;
use crate::models::Product;
use crate::store::{RecordStore, collections, decode_all};

/// Substring search over product names.
pub struct SearchService<'a> {
    records: &'a dyn RecordStore,
}

impl<'a> SearchService<'a> {
    /// Create a new search service over the given record store.
    #[must_use]
    pub const fn new(records: &'a dyn RecordStore) -> Self {
        Self { records }
    }

    /// Return every product whose name contains `query`, case-insensitively.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let needle = query.to_lowercase();
        let products: Vec<Product> =
            decode_all(collections::PRODUCTS, self.records.list(collections::PRODUCTS).await?)?;

        Ok(products
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .collect())
    }
}
