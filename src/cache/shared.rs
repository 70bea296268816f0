//! Shared Cache Module
//!
//! Thread-safe handle over a `BoundedCache`, cloneable across worker tasks.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cache::{BoundedCache, CacheStats};
use crate::error::Result;

// == Shared Cache ==
/// A `BoundedCache` behind a mutex.
///
/// Every method takes the lock once and releases it before returning, so each
/// call is a single critical section. In particular `put` checks capacity,
/// evicts and inserts without another caller observing the intermediate state.
/// The guard is never held across an `.await`.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<BoundedCache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty shared cache holding at most `max_size` entries.
    ///
    /// # Errors
    /// Returns `CacheError::Configuration` when `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        Ok(Self::from_cache(BoundedCache::new(max_size)?))
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: BoundedCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    // No operation panics while holding the guard, so a poisoned lock still
    // guards a consistent cache.
    fn lock(&self) -> MutexGuard<'_, BoundedCache<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inserts or overwrites, returning the evicted entry if any.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.lock().put(key, value)
    }

    /// Returns a clone of the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.lock().get(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().contains(key)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.lock().values()
    }

    pub fn keys(&self) -> Vec<K> {
        self.lock().keys()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
