//! Generic in-memory entity store.

use indexmap::IndexMap;
use parking_lot::RwLock;
use uuid::Uuid;

/// A record that can live in an [`EntityStore`].
pub trait Entity: Clone {
    /// Prefix prepended to generated ids (e.g. `task_`).
    const ID_PREFIX: &'static str;

    /// The unique id of this record.
    fn id(&self) -> &str;
}

/// Generate a collision-resistant id with the given prefix.
///
/// The suffix is a random v4 UUID in simple (hex) form, so two entities
/// created within the same millisecond still get distinct ids.
pub fn generate_id(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4().simple())
}

/// Mapping from id to entity, iterated in insertion order.
///
/// Each store is guarded by its own reader/writer lock. Read-modify-write
/// sequences go through [`EntityStore::update`] so they happen under a single
/// write lock acquisition.
#[derive(Debug)]
pub struct EntityStore<E> {
    entries: RwLock<IndexMap<String, E>>,
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
        }
    }

    /// Insert an entity and return a copy of what was stored.
    pub fn insert(&self, entity: E) -> E {
        let stored = entity.clone();
        self.entries.write().insert(entity.id().to_string(), entity);
        stored
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Option<E> {
        self.entries.read().get(id).cloned()
    }

    /// Mutate an entity in place.
    ///
    /// Returns `None` without calling `f` when the id is absent.
    pub fn update<R>(&self, id: &str, f: impl FnOnce(&mut E) -> R) -> Option<R> {
        self.entries.write().get_mut(id).map(f)
    }

    /// Snapshot of all entities in insertion order.
    pub fn snapshot(&self) -> Vec<E> {
        self.entries.read().values().cloned().collect()
    }

    /// Snapshot of the entities matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&E) -> bool) -> Vec<E> {
        self.entries
            .read()
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }

    /// Number of stored entities.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
