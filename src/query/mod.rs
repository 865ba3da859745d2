//! Query engine for aerofacet
//!
//! Answers "any of these sizes AND any of these colors" with the matching
//! items and a count per facet value.
//!
//! # Semantics
//!
//! - An empty size (or color) list means every value of that domain
//! - Items are concatenated bucket by bucket, never re-sorted
//! - Every catalog value gets a count, 0 included
//!
//! # Invariants
//!
//! - Searching never fails and never mutates the index
//! - Identical requests produce identical results

mod engine;
mod request;
mod result;

pub use engine::{search, SearchEngine};
pub use request::SearchRequest;
pub use result::{FacetCount, SearchResult};
