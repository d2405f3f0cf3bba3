//! # Entity Stores
//!
//! The storage seam behind [`ResourceActor`](crate::framework::ResourceActor).
//! The actor is the only owner of its store, so implementations need no
//! internal locking.

use crate::framework::core::ActorEntity;
use std::collections::BTreeMap;

/// Keyed storage for one entity type.
pub trait EntityStore<T: ActorEntity>: Send + 'static {
    fn get(&self, id: &T::Id) -> Option<&T>;

    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Inserts or replaces the entity stored under its own id, returning the previous value.
    fn put(&mut self, item: T) -> Option<T>;

    fn remove(&mut self, id: &T::Id) -> Option<T>;

    /// Every stored entity, ordered by id.
    fn list(&self) -> Vec<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory store ordered by id.
#[derive(Debug, Clone)]
pub struct MemoryStore<T: ActorEntity> {
    items: BTreeMap<T::Id, T>,
}

impl<T: ActorEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<T: ActorEntity> FromIterator<T> for MemoryStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|item| (item.id().clone(), item))
                .collect(),
        }
    }
}

impl<T: ActorEntity> EntityStore<T> for MemoryStore<T> {
    fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    fn put(&mut self, item: T) -> Option<T> {
        self.items.insert(item.id().clone(), item)
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        self.items.remove(id)
    }

    fn list(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
