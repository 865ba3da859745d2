//! Compound bucket key

use serde::Serialize;

use crate::catalog::{FacetValueId, Item};

/// Lookup key of a bucket: one size id and one color id.
///
/// Equality and hashing are structural over both ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BucketKey {
    pub size: FacetValueId,
    pub color: FacetValueId,
}

impl BucketKey {
    pub fn new(size: FacetValueId, color: FacetValueId) -> Self {
        Self { size, color }
    }

    /// The bucket an item belongs to
    pub fn for_item(item: &Item) -> Self {
        Self::new(item.size.id, item.color.id)
    }
}
