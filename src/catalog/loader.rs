//! Dataset loader
//!
//! Reads a catalog and its items from a single JSON document:
//!
//! ```json
//! {
//!   "sizes":  [{"id": "<uuid>", "name": "Small"}],
//!   "colors": [{"id": "<uuid>", "name": "Red"}],
//!   "items":  [{"name": "A", "size": "<uuid>", "color": "<uuid>"}]
//! }
//! ```
//!
//! Every item reference is resolved against the catalog here, so the index
//! never sees a value outside its domains.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::domain::{Catalog, COLOR_DOMAIN, SIZE_DOMAIN};
use super::errors::{CatalogError, CatalogResult};
use super::value::{FacetValue, FacetValueId, Item};

#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    sizes: Vec<FacetValue>,
    #[serde(default)]
    colors: Vec<FacetValue>,
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    name: String,
    size: FacetValueId,
    color: FacetValueId,
}

/// A validated catalog together with the items it tags.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub catalog: Catalog,
    pub items: Vec<Item>,
}

impl Dataset {
    /// Parse and validate a dataset document
    pub fn from_json(content: &str) -> CatalogResult<Self> {
        let raw: RawDataset = serde_json::from_str(content)?;
        Self::from_raw(raw)
    }

    /// Read and validate a dataset file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_raw(raw: RawDataset) -> CatalogResult<Self> {
        let catalog = Catalog::new(raw.sizes, raw.colors)?;

        let mut items = Vec::with_capacity(raw.items.len());
        for item in raw.items {
            let size = catalog.sizes().get(item.size).ok_or_else(|| {
                CatalogError::UnknownValue {
                    domain: SIZE_DOMAIN,
                    id: item.size,
                    item: item.name.clone(),
                }
            })?;
            let color = catalog.colors().get(item.color).ok_or_else(|| {
                CatalogError::UnknownValue {
                    domain: COLOR_DOMAIN,
                    id: item.color,
                    item: item.name.clone(),
                }
            })?;
            items.push(Item::new(item.name, size, color));
        }

        Ok(Self { catalog, items })
    }
}
