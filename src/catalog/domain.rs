//! Facet domains and the catalog that groups them
//!
//! A domain is a fixed, ordered list of values. Enumeration order is the
//! declaration order and is what search results use for their facet counts.

use std::collections::HashMap;

use super::errors::{CatalogError, CatalogResult};
use super::value::{FacetValue, FacetValueId};

/// Name of the size domain
pub const SIZE_DOMAIN: &str = "size";

/// Name of the color domain
pub const COLOR_DOMAIN: &str = "color";

/// A closed, enumerable set of facet values.
#[derive(Debug, Clone)]
pub struct FacetDomain {
    name: &'static str,
    values: Vec<FacetValue>,
    /// id -> position in `values`
    positions: HashMap<FacetValueId, usize>,
}

impl FacetDomain {
    /// Creates a domain from its values in declaration order.
    ///
    /// Rejects duplicate ids.
    pub fn new(name: &'static str, values: Vec<FacetValue>) -> CatalogResult<Self> {
        let mut positions = HashMap::with_capacity(values.len());
        for (pos, value) in values.iter().enumerate() {
            if positions.insert(value.id, pos).is_some() {
                return Err(CatalogError::DuplicateValue {
                    domain: name,
                    id: value.id,
                });
            }
        }

        Ok(Self {
            name,
            values,
            positions,
        })
    }

    /// Returns the domain name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All values, in declaration order
    pub fn values(&self) -> &[FacetValue] {
        &self.values
    }

    /// Iterates over the ids, in declaration order
    pub fn ids(&self) -> impl Iterator<Item = FacetValueId> + '_ {
        self.values.iter().map(|v| v.id)
    }

    /// Lookup a value by id
    pub fn get(&self, id: FacetValueId) -> Option<&FacetValue> {
        self.positions.get(&id).map(|&pos| &self.values[pos])
    }

    pub fn contains(&self, id: FacetValueId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The size and color domains an item collection is tagged with.
#[derive(Debug, Clone)]
pub struct Catalog {
    sizes: FacetDomain,
    colors: FacetDomain,
}

impl Catalog {
    /// Build a catalog from the declared sizes and colors
    pub fn new(sizes: Vec<FacetValue>, colors: Vec<FacetValue>) -> CatalogResult<Self> {
        Ok(Self {
            sizes: FacetDomain::new(SIZE_DOMAIN, sizes)?,
            colors: FacetDomain::new(COLOR_DOMAIN, colors)?,
        })
    }

    /// Catalog with no values in either domain
    pub fn empty() -> Self {
        Self {
            sizes: FacetDomain {
                name: SIZE_DOMAIN,
                values: Vec::new(),
                positions: HashMap::new(),
            },
            colors: FacetDomain {
                name: COLOR_DOMAIN,
                values: Vec::new(),
                positions: HashMap::new(),
            },
        }
    }

    pub fn sizes(&self) -> &FacetDomain {
        &self.sizes
    }

    pub fn colors(&self) -> &FacetDomain {
        &self.colors
    }
}
