//! Bounded Cache Module
//!
//! Fixed-capacity key-value store combining HashMap storage with FIFO eviction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, FifoTracker};
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// Fixed-capacity cache with first-in-first-out eviction.
///
/// Holds at most `max_size` entries. Inserting a new key into a full cache
/// evicts the entry that was inserted earliest. Overwriting an existing key
/// replaces its value in place and keeps its original position in the
/// eviction order.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Insertion order tracker
    order: FifoTracker<K>,
    /// Hit, miss and eviction counters; the entry count comes from `entries`
    counters: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `max_size` entries.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` when `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::Configuration(
                "cache capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            entries: HashMap::with_capacity(max_size),
            order: FifoTracker::with_capacity(max_size),
            counters: CacheStats::default(),
            max_size,
        })
    }

    // == Put ==
    /// Inserts or overwrites a key-value pair.
    ///
    /// If the key is new and the cache is full, the oldest entry is evicted
    /// first and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }

        let evicted = if self.entries.len() >= self.max_size {
            self.evict_oldest()
        } else {
            None
        };

        self.order.push(key.clone());
        self.entries.insert(key, value);

        evicted
    }

    // == Get ==
    /// Returns the value stored under `key`, recording a hit or a miss.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.entries.get(key);
        self.counters.record_lookup(value.is_some());
        value
    }

    // == Contains ==
    /// Returns true if `key` is present. Does not touch the statistics.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry. Hit, miss and eviction counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    // == Values ==
    /// Returns a snapshot of all stored values, oldest first.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.order
            .iter()
            .filter_map(|key| self.entries.get(key))
            .cloned()
            .collect()
    }

    // == Keys ==
    /// Returns a snapshot of all keys in eviction order.
    pub fn keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.counters
        }
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) -> Option<(K, V)> {
        let key = self.order.evict_oldest()?;
        let value = self.entries.remove(&key)?;
        self.counters.record_eviction();
        debug!(
            capacity = self.max_size,
            evictions = self.counters.evictions,
            "Evicted oldest cache entry"
        );
        Some((key, value))
    }
}
