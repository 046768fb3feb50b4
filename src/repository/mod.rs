//! Repository Module
//!
//! The repository seam the cache fronts: a generic CRUD contract, an
//! in-memory implementation, and a read-through caching wrapper.

mod cached;
mod memory;

// Re-export public types
pub use cached::CachedRepository;
pub use memory::InMemoryRepository;

// == Repository Trait ==
/// Generic CRUD contract over an entity store.
///
/// Absent entities are signaled with `None`; the store itself decides what
/// counts as present. Implementors are expected to be the expensive side of
/// a lookup (database, file storage), which is why [`CachedRepository`]
/// exists.
pub trait Repository<K, V> {
    /// Returns all stored entities.
    fn find_all(&self) -> Vec<V>;

    /// Looks up an entity by its identifier.
    fn find_by_id(&self, id: &K) -> Option<V>;

    /// Inserts a new entity or replaces an existing one, returning the
    /// stored entity.
    fn save(&mut self, id: K, item: V) -> V;

    /// Replaces an existing entity, returning the new version, or `None` if
    /// no entity with that identifier exists.
    fn update(&mut self, id: &K, item: V) -> Option<V>;

    /// Removes an entity, returning it, or `None` if it was absent.
    fn delete(&mut self, id: &K) -> Option<V>;
}
