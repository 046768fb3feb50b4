//! Cache Module
//!
//! Provides a generic bounded key-value cache with insertion-order eviction.

mod order;
mod stats;
mod store;


// Re-export public types
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::BoundedCache;
