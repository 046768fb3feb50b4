//! Cached Repository Module
//!
//! Read-through wrapper putting a BoundedCache in front of a Repository.
//!
//! Protocol: consult the cache before the store, populate the cache after a
//! successful lookup or write, and invalidate the cached entry after any
//! mutation that could make it stale.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{BoundedCache, CacheStats};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::repository::Repository;

// == Cached Repository ==
/// Fronts a [`Repository`] with a [`BoundedCache`] to avoid redundant
/// lookups of recently seen entities.
#[derive(Debug)]
pub struct CachedRepository<K, V, R> {
    inner: R,
    cache: BoundedCache<K, V>,
}

impl<K, V, R> CachedRepository<K, V, R>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    R: Repository<K, V>,
{
    // == Constructor ==
    /// Wraps a repository with a cache of the given capacity.
    pub fn new(inner: R, capacity: usize) -> Result<Self> {
        Ok(Self {
            inner,
            cache: BoundedCache::new(capacity)?,
        })
    }

    // == From Config ==
    /// Wraps a repository with a cache sized from configuration.
    pub fn from_config(inner: R, config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            inner,
            cache: BoundedCache::from_config(config)?,
        })
    }

    // == Find All ==
    /// Returns all entities straight from the store.
    ///
    /// Collection reads bypass the cache; only per-id lookups are cached.
    pub fn find_all(&self) -> Vec<V> {
        self.inner.find_all()
    }

    // == Find By Id ==
    /// Looks up an entity, trying the cache before the store.
    ///
    /// A store hit populates the cache for subsequent lookups.
    pub fn find_by_id(&mut self, id: &K) -> Option<V> {
        if let Ok(cached) = self.cache.get(id) {
            return Some(cached);
        }

        debug!(?id, "cache miss, falling through to store");
        let found = self.inner.find_by_id(id)?;
        self.cache.put(id.clone(), found.clone());
        Some(found)
    }

    // == Save ==
    /// Saves an entity and populates the cache with the stored version.
    pub fn save(&mut self, id: K, item: V) -> V {
        let saved = self.inner.save(id.clone(), item);
        self.cache.put(id, saved.clone());
        saved
    }

    // == Update ==
    /// Updates an entity, invalidating any cached version.
    ///
    /// The stale entry is removed rather than overwritten; the next lookup
    /// repopulates from the store. A failed update leaves the cache alone.
    pub fn update(&mut self, id: &K, item: V) -> Option<V> {
        let updated = self.inner.update(id, item)?;
        let _ = self.cache.remove(id);
        Some(updated)
    }

    // == Delete ==
    /// Deletes an entity, invalidating any cached version.
    pub fn delete(&mut self, id: &K) -> Option<V> {
        let deleted = self.inner.delete(id)?;
        let _ = self.cache.remove(id);
        Some(deleted)
    }

    // == Invalidate All ==
    /// Drops every cached entry. The store is untouched.
    pub fn invalidate_all(&mut self) {
        debug!("invalidating all cached entries");
        self.cache.clear();
    }

    // == Cache Stats ==
    /// Returns statistics for the fronting cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
