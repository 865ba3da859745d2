//! Domain catalog subsystem for aerofacet
//!
//! The catalog holds the closed, enumerable sets of facet values (sizes and
//! colors) that every item is tagged with.
//!
//! # Design Principles
//!
//! - Explicit: the catalog is constructed and passed in, never global
//! - Closed: domains are fixed at startup and never grow
//! - Ordered: enumeration order is the order the values were declared in
//!
//! # Invariants
//!
//! - Value ids are unique within a domain
//! - Every loaded item references exactly one value of each domain

mod domain;
mod errors;
mod loader;
mod value;

pub use domain::{Catalog, FacetDomain, COLOR_DOMAIN, SIZE_DOMAIN};
pub use errors::{CatalogError, CatalogResult};
pub use loader::Dataset;
pub use value::{FacetValue, FacetValueId, Item};
