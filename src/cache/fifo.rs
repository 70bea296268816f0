//! FIFO Tracker Module
//!
//! Tracks insertion order for first-in-first-out cache eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Insertion-order queue backing `BoundedCache` eviction.
///
/// Front = earliest inserted (next victim), back = most recent. Reads and
/// overwrites never reorder keys, so `push` and `evict_oldest` stay O(1).
#[derive(Debug)]
pub(crate) struct FifoTracker<K> {
    order: VecDeque<K>,
}

impl<K> FifoTracker<K> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a newly inserted key. The key must not already be tracked.
    pub(crate) fn push(&mut self, key: K) {
        self.order.push_back(key);
    }

    /// Removes and returns the earliest inserted key.
    pub(crate) fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_front()
    }

    /// Iterates keys from oldest to newest.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }
}
