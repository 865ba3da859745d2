//! Facet index subsystem for aerofacet
//!
//! The index is derived, in-memory-only state built once from the item
//! collection.
//!
//! # Design Principles
//!
//! - Derived state: the item collection is the source of truth
//! - Build once: no insert or remove after construction
//! - Borrowing: buckets hold `&Item`, the caller owns the collection
//!
//! # Invariants
//!
//! - Every item belongs to exactly one bucket
//! - Bucket contents keep input order
//! - Pairs with no items have no bucket

mod facet_index;
mod key;

pub use facet_index::{FacetIndex, IndexStats};
pub use key::BucketKey;
