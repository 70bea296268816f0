//! Cache Module
//!
//! Provides bounded in-memory caching with FIFO eviction.

mod bounded;
mod fifo;
mod shared;
mod stats;


// Re-export public types
pub use bounded::BoundedCache;
pub(crate) use fifo::FifoTracker;
pub use shared::SharedCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Default number of classification results kept in memory
pub const DEFAULT_CACHE_CAPACITY: usize = 50;
