//! Ordered item storage keyed by stable identifier.
//!
//! Owns the item sequence and the identifier → position index. The index is
//! patched incrementally for appends and removals (only the suffix after the
//! removed position shifts) and rebuilt for prepends and bulk replacement.
//!
//! # Invariants
//! - `index[items[i].id()] == i` for every position `i`
//! - `index.len() == items.len()` (identifiers are unique)

use crate::model::Item;
use std::collections::HashMap;
use tracing::warn;

/// Ordered collection of items with an identifier index.
#[derive(Debug, Clone)]
pub struct ItemStore<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Item> ItemStore<T> {
    /// Build a store from an ordered sequence.
    ///
    /// Later duplicates of an identifier are dropped.
    pub fn new(items: Vec<T>) -> Self {
        let mut store = Self {
            items: Vec::with_capacity(items.len()),
            index: HashMap::with_capacity(items.len()),
        };
        store.set_all(items);
        store
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `position`.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Mutable item at `position`.
    ///
    /// Callers must not change the item's identifier through this reference.
    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.items.get_mut(position)
    }

    /// Current position of `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Whether an item with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Item with identifier `id`.
    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.position(id).and_then(|p| self.items.get(p))
    }

    /// Items in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Append an item and return its position.
    ///
    /// Returns `None` (and leaves the store unchanged) if the identifier is
    /// already present.
    pub fn push(&mut self, item: T) -> Option<usize> {
        if self.index.contains_key(item.id()) {
            warn!(id = item.id(), "ignoring append of duplicate item id");
            return None;
        }
        let position = self.items.len();
        self.index.insert(item.id().to_owned(), position);
        self.items.push(item);
        Some(position)
    }

    /// Insert an item at the front. Every position shifts, so the index is
    /// rebuilt.
    ///
    /// Returns `false` (and leaves the store unchanged) on a duplicate id.
    pub fn prepend(&mut self, item: T) -> bool {
        if self.index.contains_key(item.id()) {
            warn!(id = item.id(), "ignoring prepend of duplicate item id");
            return false;
        }
        self.items.insert(0, item);
        self.rebuild_index();
        true
    }

    /// Remove the item with `id`, returning its former position and value.
    ///
    /// Only positions after the removed one are re-indexed.
    pub fn remove(&mut self, id: &str) -> Option<(usize, T)> {
        let position = self.index.remove(id)?;
        let item = self.items.remove(position);
        for (offset, later) in self.items[position..].iter().enumerate() {
            self.index.insert(later.id().to_owned(), position + offset);
        }
        Some((position, item))
    }

    /// Replace the item at `position`, re-keying the index if the identifier
    /// changed. Returns the previous item.
    ///
    /// Returns `Err(item)` if `position` is out of range or the new
    /// identifier already belongs to a different item.
    pub fn replace(&mut self, position: usize, item: T) -> Result<T, T> {
        let Some(current) = self.items.get(position) else {
            return Err(item);
        };
        if current.id() != item.id() {
            if self.index.contains_key(item.id()) {
                warn!(id = item.id(), "replacement id collides with another item");
                return Err(item);
            }
            self.index.remove(current.id());
            self.index.insert(item.id().to_owned(), position);
        }
        Ok(std::mem::replace(&mut self.items[position], item))
    }

    /// Replace the whole sequence and rebuild the index.
    pub fn set_all(&mut self, items: Vec<T>) {
        self.items.clear();
        self.index.clear();
        for item in items {
            if self.index.contains_key(item.id()) {
                warn!(id = item.id(), "dropping duplicate item id");
                continue;
            }
            self.index.insert(item.id().to_owned(), self.items.len());
            self.items.push(item);
        }
    }

    /// Whether the index exactly mirrors the item order.
    pub fn index_is_consistent(&self) -> bool {
        self.index.len() == self.items.len()
            && self
                .items
                .iter()
                .enumerate()
                .all(|(position, item)| self.index.get(item.id()) == Some(&position))
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, item) in self.items.iter().enumerate() {
            self.index.insert(item.id().to_owned(), position);
        }
    }
}

impl<T: Item> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
