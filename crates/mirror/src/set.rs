use indexmap::IndexSet;
use std::fmt;
use std::hash::Hash;

/// A persisted set of unique values.
///
/// Iteration follows insertion order, but equality is set equality: two sets
/// holding the same members compare equal regardless of the order they were
/// inserted in.
#[derive(Clone)]
pub struct MutableSet<T> {
    items: IndexSet<T>,
}

impl<T> MutableSet<T> {
    pub fn new() -> MutableSet<T> {
        MutableSet {
            items: IndexSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Hash + Eq> MutableSet<T> {
    /// Inserts `item`, returning `false` if it was already a member.
    pub fn insert(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Inserts every element of `items`.
    pub fn insert_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.items.shift_remove(item)
    }
}

impl<T> Default for MutableSet<T> {
    fn default() -> MutableSet<T> {
        MutableSet::new()
    }
}

impl<T: Hash + Eq> PartialEq for MutableSet<T> {
    fn eq(&self, other: &MutableSet<T>) -> bool {
        self.items == other.items
    }
}

impl<T: Hash + Eq> Eq for MutableSet<T> {}

impl<T: fmt::Debug> fmt::Debug for MutableSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.items).finish()
    }
}

impl<T: Hash + Eq> FromIterator<T> for MutableSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MutableSet<T> {
        MutableSet {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for MutableSet<T> {
    fn from(items: [T; N]) -> MutableSet<T> {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq> Extend<T> for MutableSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<T> IntoIterator for MutableSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MutableSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
