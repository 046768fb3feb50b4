//! Bounded Cache - a fixed-capacity in-memory key-value cache
//!
//! Provides insertion-order (FIFO) eviction and a read-through repository
//! wrapper for fronting expensive lookups.

pub mod cache;
pub mod config;
pub mod error;
pub mod repository;

pub use cache::{BoundedCache, CacheStats};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use repository::{CachedRepository, InMemoryRepository, Repository};
