//! Result types for search execution

use serde::Serialize;

use crate::catalog::{FacetValue, FacetValueId, Item};

/// Number of result items carrying one facet value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCount<'a> {
    pub value: &'a FacetValue,
    pub count: usize,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult<'a> {
    /// Matching items, bucket by bucket
    pub items: Vec<&'a Item>,
    /// One entry per catalog size, in catalog order
    pub size_counts: Vec<FacetCount<'a>>,
    /// One entry per catalog color, in catalog order
    pub color_counts: Vec<FacetCount<'a>>,
    /// Number of bucket lookups performed
    #[serde(skip)]
    pub buckets_probed: usize,
}

impl<'a> SearchResult<'a> {
    /// Returns the number of matching items
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the matching items
    pub fn iter(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.items.iter().copied()
    }

    /// Count for a size id. `None` if the id is not a catalog size.
    pub fn size_count_for(&self, id: FacetValueId) -> Option<usize> {
        count_in(&self.size_counts, id)
    }

    /// Count for a color id. `None` if the id is not a catalog color.
    pub fn color_count_for(&self, id: FacetValueId) -> Option<usize> {
        count_in(&self.color_counts, id)
    }
}

fn count_in(counts: &[FacetCount<'_>], id: FacetValueId) -> Option<usize> {
    counts.iter().find(|fc| fc.value.id == id).map(|fc| fc.count)
}
