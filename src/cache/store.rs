//! Bounded Cache Module
//!
//! Main cache engine combining HashMap storage with insertion-order (FIFO)
//! eviction. This is deliberately not an LRU: reads never refresh an entry's
//! position, and neither do value overwrites.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, InsertionOrder};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Bounded Cache ==
/// A fixed-capacity key-value store with insertion-order eviction.
///
/// Holds at most `capacity` entries. When a put introduces a new key at full
/// capacity, the oldest-inserted entry still present is evicted first, so
/// `len() <= capacity` holds after every operation.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// First-insertion order tracker
    order: InsertionOrder<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed, fixed at construction
    capacity: usize,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new BoundedCache with the specified capacity.
    ///
    /// Capacity 0 is rejected: a cache that can never retain an entry is a
    /// configuration mistake, not a degenerate cache.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold (>= 1)
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::new(),
            order: InsertionOrder::new(),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == From Config ==
    /// Creates a new BoundedCache from a configuration value.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Does not refresh the entry's eviction position. A miss is recorded and
    /// surfaced as [`CacheError::NotFound`] so the caller can fall through to
    /// the underlying store.
    ///
    /// # Arguments
    /// * `key` - The key to retrieve
    pub fn get(&mut self, key: &K) -> Result<V> {
        if let Some(value) = self.entries.get(key) {
            debug!(?key, "cache hit");
            let value = value.clone();
            self.stats.record_hit();
            Ok(value)
        } else {
            debug!(?key, "cache miss");
            self.stats.record_miss();
            Err(CacheError::NotFound(format!("{key:?}")))
        }
    }

    // == Put ==
    /// Stores a key-value pair, returning the stored value.
    ///
    /// If the key already exists, the value is overwritten in place and the
    /// key keeps its original position in the eviction order. If the key is
    /// new and the cache is at capacity, the oldest-inserted entry is evicted
    /// before inserting. Always succeeds.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    pub fn put(&mut self, key: K, value: V) -> V {
        let is_overwrite = self.entries.contains_key(&key);

        // If not overwriting and at capacity, evict the oldest entry. With
        // capacity >= 1 a non-empty cache always has a victim.
        if !is_overwrite && self.entries.len() >= self.capacity {
            if let Some(victim) = self.order.pop_oldest() {
                debug!(key = ?victim, "evicting oldest entry");
                self.entries.remove(&victim);
                self.stats.record_eviction();
            }
        }

        debug!(?key, "storing entry");
        self.entries.insert(key.clone(), value.clone());
        if !is_overwrite {
            self.order.record(key);
        }

        self.stats.set_total_entries(self.entries.len());

        value
    }

    // == Remove ==
    /// Removes an entry by key, returning its value.
    ///
    /// An absent key fails with [`CacheError::NotFound`] and leaves the cache
    /// unchanged.
    ///
    /// # Arguments
    /// * `key` - The key to remove
    pub fn remove(&mut self, key: &K) -> Result<V> {
        if let Some(value) = self.entries.remove(key) {
            debug!(?key, "removing entry");
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            Ok(value)
        } else {
            Err(CacheError::NotFound(format!("{key:?}")))
        }
    }

    // == Clear ==
    /// Removes all entries. Always succeeds.
    pub fn clear(&mut self) {
        debug!("clearing cache");
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    /// Returns the fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
