//! aerofacet - deterministic in-memory faceted search
//!
//! Items tagged with one size and one color are grouped into buckets keyed by
//! that pair. A search probes one bucket per requested (size, color) pair and
//! reports a count for every catalog value, so its cost depends on the
//! catalog, not on the number of items.
//!
//! ```ignore
//! use aerofacet::catalog::Dataset;
//! use aerofacet::query::{SearchEngine, SearchRequest};
//!
//! let dataset = Dataset::load(path)?;
//! let engine = SearchEngine::new(&dataset.catalog, &dataset.items);
//! let result = engine.search(&SearchRequest::new().with_colors([red]));
//! ```

pub mod catalog;
pub mod cli;
pub mod index;
pub mod observability;
pub mod query;
