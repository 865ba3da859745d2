//! Search request

use serde::{Deserialize, Serialize};

use crate::catalog::FacetValueId;

/// Requested sizes and colors.
///
/// An empty list leaves that facet unconstrained. Ids keep insertion order
/// and are deduplicated, so each bucket is visited at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSearchRequest")]
pub struct SearchRequest {
    sizes: Vec<FacetValueId>,
    colors: Vec<FacetValueId>,
}

#[derive(Deserialize)]
struct RawSearchRequest {
    #[serde(default)]
    sizes: Vec<FacetValueId>,
    #[serde(default)]
    colors: Vec<FacetValueId>,
}

impl From<RawSearchRequest> for SearchRequest {
    fn from(raw: RawSearchRequest) -> Self {
        Self::new().with_sizes(raw.sizes).with_colors(raw.colors)
    }
}

impl SearchRequest {
    /// Unconstrained request: matches every item
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = FacetValueId>) -> Self {
        for id in sizes {
            self.add_size(id);
        }
        self
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = FacetValueId>) -> Self {
        for id in colors {
            self.add_color(id);
        }
        self
    }

    /// Adds a size. Returns false if it was already requested.
    pub fn add_size(&mut self, id: FacetValueId) -> bool {
        push_unique(&mut self.sizes, id)
    }

    /// Adds a color. Returns false if it was already requested.
    pub fn add_color(&mut self, id: FacetValueId) -> bool {
        push_unique(&mut self.colors, id)
    }

    pub fn sizes(&self) -> &[FacetValueId] {
        &self.sizes
    }

    pub fn colors(&self) -> &[FacetValueId] {
        &self.colors
    }

    /// True when neither facet is restricted
    pub fn is_unconstrained(&self) -> bool {
        self.sizes.is_empty() && self.colors.is_empty()
    }
}

// Domains are small, a linear scan beats hashing here.
fn push_unique(ids: &mut Vec<FacetValueId>, id: FacetValueId) -> bool {
    if ids.contains(&id) {
        return false;
    }
    ids.push(id);
    true
}
