//! Catalog services.
//!
//! Services are thin, stateless wrappers around a borrowed [`RecordStore`]
//! handle, constructed per call site like repositories. Write-time
//! validation lives in [`catalog`]; the composed read path in
//! [`aggregation`]; name search in [`search`]; the demo fixture in [`seed`].

pub mod aggregation;
pub mod catalog;
pub mod search;
pub mod seed;

use thiserror::Error;

use crate::store::StoreError;

pub use aggregation::{AggregationService, StoreView};
pub use catalog::CatalogService;
pub use search::SearchService;
pub use seed::{SeedService, SeedSummary};

/// Failures surfaced by the catalog services.
///
/// The three classes are deliberately non-overlapping: malformed input,
/// unresolvable reference, and record-store failure each map to a distinct
/// outcome at the HTTP boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or out-of-range input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced identifier does not resolve.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The record store failed; fatal to the current operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
