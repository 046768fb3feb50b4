//! Configuration Module
//!
//! Handles loading and managing cache configuration from environment variables.
//!
//! Configuration is an explicitly constructed value passed by reference to the
//! components that need it at startup; there is no process-wide singleton.

use std::env;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 10)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 10 }
    }
}
