//! Search engine
//!
//! Walks the product of the effective size and color sets, probing one
//! bucket per pair. Cost depends on the catalog sizes, not on the number of
//! indexed items.

use std::borrow::Cow;
use std::collections::HashMap;

use super::request::SearchRequest;
use super::result::{FacetCount, SearchResult};
use crate::catalog::{Catalog, FacetDomain, FacetValueId, Item};
use crate::index::{BucketKey, FacetIndex};

/// A catalog paired with the index built over its items.
///
/// Immutable after construction; `search` takes `&self` and may run from any
/// number of threads at once.
#[derive(Debug)]
pub struct SearchEngine<'a> {
    catalog: &'a Catalog,
    index: FacetIndex<'a>,
}

impl<'a> SearchEngine<'a> {
    /// Build the index over `items` and pair it with `catalog`
    pub fn new(catalog: &'a Catalog, items: &'a [Item]) -> Self {
        Self::from_index(catalog, FacetIndex::build(items))
    }

    /// Pair an already built index with its catalog
    pub fn from_index(catalog: &'a Catalog, index: FacetIndex<'a>) -> Self {
        Self { catalog, index }
    }

    pub fn search(&self, request: &SearchRequest) -> SearchResult<'a> {
        search(self.catalog, &self.index, request)
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn index(&self) -> &FacetIndex<'a> {
        &self.index
    }
}

/// Run `request` against `index`.
///
/// Items come back grouped by bucket: effective sizes in the outer loop,
/// effective colors in the inner one. Counts cover every catalog value, in
/// catalog order, with 0 for values that matched nothing.
pub fn search<'a>(
    catalog: &'a Catalog,
    index: &FacetIndex<'a>,
    request: &SearchRequest,
) -> SearchResult<'a> {
    let sizes = effective(request.sizes(), catalog.sizes());
    let colors = effective(request.colors(), catalog.colors());

    let mut items: Vec<&'a Item> = Vec::new();
    let mut size_hits: HashMap<FacetValueId, usize> = HashMap::new();
    let mut color_hits: HashMap<FacetValueId, usize> = HashMap::new();
    let mut buckets_probed = 0;

    for &size in sizes.iter() {
        for &color in colors.iter() {
            buckets_probed += 1;
            let Some(bucket) = index.lookup(&BucketKey::new(size, color)) else {
                continue;
            };

            items.extend_from_slice(bucket);
            *size_hits.entry(size).or_insert(0) += bucket.len();
            *color_hits.entry(color).or_insert(0) += bucket.len();
        }
    }

    SearchResult {
        items,
        size_counts: zero_filled(catalog.sizes(), &size_hits),
        color_counts: zero_filled(catalog.colors(), &color_hits),
        buckets_probed,
    }
}

/// The requested ids, or the whole domain when nothing was requested
fn effective<'r>(requested: &'r [FacetValueId], domain: &FacetDomain) -> Cow<'r, [FacetValueId]> {
    if requested.is_empty() {
        Cow::Owned(domain.ids().collect())
    } else {
        Cow::Borrowed(requested)
    }
}

fn zero_filled<'a>(
    domain: &'a FacetDomain,
    hits: &HashMap<FacetValueId, usize>,
) -> Vec<FacetCount<'a>> {
    domain
        .values()
        .iter()
        .map(|value| FacetCount {
            value,
            count: hits.get(&value.id).copied().unwrap_or(0),
        })
        .collect()
}
