//! Catalog model: entity creation with write-time validation, plus the
//! single-entity read operations.
//!
//! Referential integrity is enforced here and only here - the record store
//! itself knows nothing about the entity hierarchy. Reads performed for
//! validation decode the stored document, so a corrupt parent surfaces
//! instead of silently passing the check.

use chrono::Utc;
use tracing::{instrument, warn};

use trolley_core::{CategoryId, ProductId, SectionId, StoreId};

use super::CatalogError;
use crate::models::{
    Category, CreateCategory, CreateProduct, CreateSection, CreateStore, Product, Section, Store,
};
use crate::store::{RecordStore, collections, decode, decode_all, encode};

/// Write-path and single-entity read-path operations on the catalog.
pub struct CatalogService<'a> {
    records: &'a dyn RecordStore,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service over the given record store.
    #[must_use]
    pub const fn new(records: &'a dyn RecordStore) -> Self {
        Self { records }
    }

    /// Create a store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the name, address, or layout
    /// map is empty.
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create_store(&self, payload: CreateStore) -> Result<Store, CatalogError> {
        require_non_blank(&payload.name, "store name")?;
        require_non_blank(&payload.address, "store address")?;
        require_non_blank(&payload.layout_map, "store layout map")?;

        let store = Store {
            id: StoreId::generate(),
            name: payload.name,
            address: payload.address,
            layout_map: payload.layout_map,
            created_at: Utc::now(),
        };
        self.records
            .insert(
                collections::STORES,
                store.id.as_str(),
                encode(collections::STORES, &store)?,
            )
            .await?;
        Ok(store)
    }

    /// Fetch all stores. No filter, no pagination.
    pub async fn list_stores(&self) -> Result<Vec<Store>, CatalogError> {
        let documents = self.records.list(collections::STORES).await?;
        Ok(decode_all(collections::STORES, documents)?)
    }

    /// Create a section inside an existing store.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the store does not exist, and
    /// `CatalogError::Validation` if the map element is already bound to
    /// another section of the same store.
    #[instrument(skip(self, payload), fields(store_id = %payload.store_id, name = %payload.name))]
    pub async fn create_section(&self, payload: CreateSection) -> Result<Section, CatalogError> {
        let store_doc = self
            .records
            .get(collections::STORES, payload.store_id.as_str())
            .await?
            .ok_or(CatalogError::NotFound("store"))?;
        decode::<Store>(collections::STORES, store_doc)?;

        // map_element_id is unique within a store
        let siblings: Vec<Section> = decode_all(
            collections::SECTIONS,
            self.records
                .find_where(collections::SECTIONS, "store_id", payload.store_id.as_str())
                .await?,
        )?;
        if siblings
            .iter()
            .any(|s| s.map_element_id == payload.map_element_id)
        {
            return Err(CatalogError::Validation(format!(
                "map element '{}' is already bound to a section of this store",
                payload.map_element_id
            )));
        }

        let section = Section {
            id: SectionId::generate(),
            store_id: payload.store_id,
            name: payload.name,
            color: payload.color,
            map_element_id: payload.map_element_id,
        };
        self.records
            .insert(
                collections::SECTIONS,
                section.id.as_str(),
                encode(collections::SECTIONS, &section)?,
            )
            .await?;
        Ok(section)
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the referenced section exists
    /// and belongs to a different store. A section that does not (yet)
    /// resolve is tolerated: writes may arrive before their parents settle.
    #[instrument(skip(self, payload), fields(store_id = %payload.store_id, name = %payload.name))]
    pub async fn create_category(&self, payload: CreateCategory) -> Result<Category, CatalogError> {
        if let Some(doc) = self
            .records
            .get(collections::SECTIONS, payload.section_id.as_str())
            .await?
        {
            let section: Section = decode(collections::SECTIONS, doc)?;
            if section.store_id != payload.store_id {
                return Err(CatalogError::Validation(format!(
                    "section {} belongs to store {}, not store {}",
                    payload.section_id, section.store_id, payload.store_id
                )));
            }
        }

        let category = Category {
            id: CategoryId::generate(),
            store_id: payload.store_id,
            section_id: payload.section_id,
            name: payload.name,
            color: payload.color,
        };
        self.records
            .insert(
                collections::CATEGORIES,
                category.id.as_str(),
                encode(collections::CATEGORIES, &category)?,
            )
            .await?;
        Ok(category)
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` if the price is negative. A
    /// `section_id` differing from the owning category's is a data-quality
    /// issue, not a failure: it is logged and stored as given, with the
    /// category's section treated as authoritative downstream.
    #[instrument(skip(self, payload), fields(category_id = %payload.category_id, name = %payload.name))]
    pub async fn create_product(&self, payload: CreateProduct) -> Result<Product, CatalogError> {
        if payload.price.is_negative() {
            return Err(CatalogError::Validation(format!(
                "product price must not be negative (got {})",
                payload.price
            )));
        }

        if let Some(doc) = self
            .records
            .get(collections::CATEGORIES, payload.category_id.as_str())
            .await?
        {
            let category: Category = decode(collections::CATEGORIES, doc)?;
            if category.section_id != payload.section_id {
                warn!(
                    product = %payload.name,
                    product_section = %payload.section_id,
                    category_section = %category.section_id,
                    "product section differs from its category's section"
                );
            }
        }

        let product = Product {
            id: ProductId::generate(),
            category_id: payload.category_id,
            section_id: payload.section_id,
            name: payload.name,
            price: payload.price,
            description: payload.description,
        };
        self.records
            .insert(
                collections::PRODUCTS,
                product.id.as_str(),
                encode(collections::PRODUCTS, &product)?,
            )
            .await?;
        Ok(product)
    }

    /// Fetch a product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the id does not resolve.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let doc = self
            .records
            .get(collections::PRODUCTS, id.as_str())
            .await?
            .ok_or(CatalogError::NotFound("product"))?;
        Ok(decode(collections::PRODUCTS, doc)?)
    }

    /// Fetch every product in a category. Unknown categories yield an empty
    /// list rather than an error.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn products_by_category(
        &self,
        id: &CategoryId,
    ) -> Result<Vec<Product>, CatalogError> {
        let documents = self
            .records
            .find_where(collections::PRODUCTS, "category_id", id.as_str())
            .await?;
        Ok(decode_all(collections::PRODUCTS, documents)?)
    }
}

/// Reject empty or whitespace-only required fields.
fn require_non_blank(value: &str, what: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!(
            "{what} must not be empty"
        )));
    }
    Ok(())
}
