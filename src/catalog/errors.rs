//! Catalog error types
//!
//! Error codes:
//! - FACET_CATALOG_DUPLICATE_VALUE
//! - FACET_CATALOG_UNKNOWN_VALUE
//! - FACET_CATALOG_PARSE
//! - FACET_CATALOG_IO
//!
//! These only surface while a dataset is being loaded. Once the catalog and
//! the index are built, searching cannot fail.

use thiserror::Error;

use super::value::FacetValueId;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate {domain} value id {id}")]
    DuplicateValue {
        domain: &'static str,
        id: FacetValueId,
    },

    #[error("Item '{item}' references unknown {domain} value {id}")]
    UnknownValue {
        domain: &'static str,
        id: FacetValueId,
        item: String,
    },

    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::DuplicateValue { .. } => "FACET_CATALOG_DUPLICATE_VALUE",
            CatalogError::UnknownValue { .. } => "FACET_CATALOG_UNKNOWN_VALUE",
            CatalogError::Parse(_) => "FACET_CATALOG_PARSE",
            CatalogError::Io(_) => "FACET_CATALOG_IO",
        }
    }
}
