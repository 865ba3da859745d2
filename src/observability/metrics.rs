//! Metrics registry for aerofacet
//!
//! - Counters only
//! - Monotonic increase, reset only on process start
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters.
///
/// Relaxed ordering throughout; counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Index builds performed
    index_builds: AtomicU64,
    /// Items placed into buckets across all builds
    items_indexed: AtomicU64,
    /// Successful searches
    searches_executed: AtomicU64,
    /// Requests that could not be parsed
    searches_rejected: AtomicU64,
    /// Bucket lookups across all searches
    buckets_probed: AtomicU64,
    /// Items returned across all searches
    items_returned: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed index build
    pub fn record_index_build(&self, items: u64) {
        self.index_builds.fetch_add(1, Ordering::Relaxed);
        self.items_indexed.fetch_add(items, Ordering::Relaxed);
    }

    /// Record a completed search
    pub fn record_search(&self, buckets_probed: u64, items_returned: u64) {
        self.searches_executed.fetch_add(1, Ordering::Relaxed);
        self.buckets_probed.fetch_add(buckets_probed, Ordering::Relaxed);
        self.items_returned.fetch_add(items_returned, Ordering::Relaxed);
    }

    pub fn increment_searches_rejected(&self) {
        self.searches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            index_builds: self.index_builds.load(Ordering::Relaxed),
            items_indexed: self.items_indexed.load(Ordering::Relaxed),
            searches_executed: self.searches_executed.load(Ordering::Relaxed),
            searches_rejected: self.searches_rejected.load(Ordering::Relaxed),
            buckets_probed: self.buckets_probed.load(Ordering::Relaxed),
            items_returned: self.items_returned.load(Ordering::Relaxed),
        }
    }

    /// Current values as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        // Snapshot holds only integers, serialization cannot fail
        serde_json::to_value(self.snapshot()).unwrap_or_default()
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub index_builds: u64,
    pub items_indexed: u64,
    pub searches_executed: u64,
    pub searches_rejected: u64,
    pub buckets_probed: u64,
    pub items_returned: u64,
}
