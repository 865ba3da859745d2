//! Facet values and the items tagged with them

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a facet value.
///
/// Opaque outside the catalog; compared and hashed by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetValueId(Uuid);

impl FacetValueId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from the canonical hyphenated form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for FacetValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One value of a facet domain, such as `Small` or `Red`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetValue {
    /// Unique id within the domain
    pub id: FacetValueId,
    /// Display name
    pub name: String,
}

impl FacetValue {
    /// Creates a value with an explicit id
    pub fn new(id: FacetValueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Creates a value with a freshly generated id
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(FacetValueId::generate(), name)
    }

    pub fn id(&self) -> FacetValueId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An indexed item. Carries exactly one size and exactly one color.
///
/// Items are validated against the catalog by [`super::Dataset`] before they
/// reach the index; constructing one by hand with values outside the catalog
/// is a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item name
    pub name: String,
    /// Size value
    pub size: FacetValue,
    /// Color value
    pub color: FacetValue,
}

impl Item {
    pub fn new(name: impl Into<String>, size: &FacetValue, color: &FacetValue) -> Self {
        Self {
            name: name.into(),
            size: size.clone(),
            color: color.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> &FacetValue {
        &self.size
    }

    pub fn color(&self) -> &FacetValue {
        &self.color
    }
}
