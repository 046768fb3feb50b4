//! In-Memory Repository Module
//!
//! A map-backed Repository implementation. Serves as the backing store in
//! tests and as the simplest real store to put behind a CachedRepository.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use crate::repository::Repository;

// == In-Memory Repository ==
/// HashMap-backed entity store.
#[derive(Debug)]
pub struct InMemoryRepository<K, V> {
    items: HashMap<K, V>,
}

impl<K, V> Default for InMemoryRepository<K, V> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<K, V> InMemoryRepository<K, V>
where
    K: Eq + Hash,
{
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Returns the number of stored entities.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no entities are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K, V> Repository<K, V> for InMemoryRepository<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn find_all(&self) -> Vec<V> {
        debug!("finding all entities");
        self.items.values().cloned().collect()
    }

    fn find_by_id(&self, id: &K) -> Option<V> {
        debug!("finding entity by id");
        self.items.get(id).cloned()
    }

    fn save(&mut self, id: K, item: V) -> V {
        debug!("saving entity");
        self.items.insert(id, item.clone());
        item
    }

    fn update(&mut self, id: &K, item: V) -> Option<V> {
        debug!("updating entity");
        if self.items.contains_key(id) {
            self.items.insert(id.clone(), item.clone());
            Some(item)
        } else {
            None
        }
    }

    fn delete(&mut self, id: &K) -> Option<V> {
        debug!("deleting entity");
        self.items.remove(id)
    }
}
