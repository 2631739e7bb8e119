//! Owning, ordered entity collections
//!
//! An [`EntityGroup`] holds every live entity of one kind in spawn order.
//! Entities are stored by value: removing one drops it on the spot, so a
//! removed entity can never be reached again.

use serde::{Deserialize, Serialize};

/// Ordered collection of live entities of a single kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityGroup<T> {
    entities: Vec<T>,
}

impl<T> Default for EntityGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityGroup<T> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Append a freshly spawned entity (keeps spawn order)
    pub fn push(&mut self, entity: T) {
        self.entities.push(entity);
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entities.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entities.get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entities
    }

    /// Single forward pass over the group.
    ///
    /// `keep` may update the entity in place; returning `false` removes and
    /// drops it. Survivors keep their relative order and no entity is visited
    /// twice or skipped. Returns the number of entities removed.
    pub fn update_or_cull<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let before = self.entities.len();
        self.entities.retain_mut(keep);
        before - self.entities.len()
    }

    /// Index of the first entity matching `pred`, in spawn order
    pub fn position<F>(&self, pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.entities.iter().position(pred)
    }

    /// Remove the entity at `index`, shifting later entities down
    pub fn remove(&mut self, index: usize) -> T {
        self.entities.remove(index)
    }

    /// Remove and return the first entity matching `pred`
    pub fn take_first<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(pred)?;
        Some(self.entities.remove(index))
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl<T> FromIterator<T> for EntityGroup<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for EntityGroup<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.entities.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a EntityGroup<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
