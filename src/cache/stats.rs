//! Cache Statistics Module
//!
//! Lookup and eviction counters reported by `BoundedCache::stats`.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of a cache's counters.
///
/// `total_entries` is filled in from the live map when the snapshot is taken;
/// the cache only maintains the three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    pub total_entries: usize,
}

impl CacheStats {
    /// Number of `get` calls observed.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub(crate) fn record_lookup(&mut self, hit: bool) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
