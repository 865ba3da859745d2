//! Bucket index over an item collection
//!
//! Maps every (size, color) pair that occurs in the collection to the items
//! carrying it, in input order. Pairs that never occur have no entry.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::key::BucketKey;
use crate::catalog::{FacetValueId, Item};

/// Read-only index built once from a borrowed item collection.
#[derive(Debug)]
pub struct FacetIndex<'a> {
    /// Bucket key -> items in input order
    buckets: HashMap<BucketKey, Vec<&'a Item>>,
    /// Total number of indexed items
    item_count: usize,
    built_at: DateTime<Utc>,
}

/// Point-in-time summary of an index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub item_count: usize,
    pub bucket_count: usize,
    pub largest_bucket: usize,
    pub built_at: DateTime<Utc>,
}

impl<'a> FacetIndex<'a> {
    /// Build the index.
    ///
    /// Every item lands in exactly one bucket. Bucket contents keep the
    /// order of `items`.
    pub fn build(items: &'a [Item]) -> Self {
        let mut buckets: HashMap<BucketKey, Vec<&'a Item>> = HashMap::new();

        for item in items {
            buckets.entry(BucketKey::for_item(item)).or_default().push(item);
        }

        Self {
            buckets,
            item_count: items.len(),
            built_at: Utc::now(),
        }
    }

    /// Items sharing `key`, or `None` if no item has that pair.
    pub fn lookup(&self, key: &BucketKey) -> Option<&[&'a Item]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Items with this exact size and color. Empty when the pair never occurs.
    pub fn bucket(&self, size: FacetValueId, color: FacetValueId) -> &[&'a Item] {
        self.lookup(&BucketKey::new(size, color)).unwrap_or(&[])
    }

    /// Iterates over non-empty buckets in unspecified order
    pub fn buckets(&self) -> impl Iterator<Item = (&BucketKey, &[&'a Item])> {
        self.buckets.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Returns the number of distinct (size, color) pairs
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of indexed items
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            item_count: self.item_count,
            bucket_count: self.buckets.len(),
            largest_bucket: self.buckets.values().map(Vec::len).max().unwrap_or(0),
            built_at: self.built_at,
        }
    }
}
