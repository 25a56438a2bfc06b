//! Items referenced by `#[derive(Mirror)]` expansions. Not a stable API.

pub use crate::{Data, Date, List, Map, MutableSet, Observable, Observed, Url, Uuid};
pub use std::collections::{HashMap, HashSet};

use std::hash::Hash;

/// Copies a persisted list into a mirror sequence, mapping each element.
pub fn forward_list<P, M>(list: &List<P>, f: impl FnMut(&P) -> M) -> Vec<M> {
    list.iter().map(f).collect()
}

/// Appends every mapped element of `items` to a fresh persisted list.
pub fn backward_list<'a, M, P>(items: &'a [M], f: impl FnMut(&'a M) -> P) -> List<P> {
    let mut list = List::new();
    list.append_all(items.iter().map(f));
    list
}

/// Copies a persisted set into a mirror set, mapping each member.
pub fn forward_set<P, M>(set: &MutableSet<P>, f: impl FnMut(&P) -> M) -> HashSet<M>
where
    M: Hash + Eq,
{
    set.iter().map(f).collect()
}

/// Inserts every mapped member of `items` into a fresh persisted set.
pub fn backward_set<M, P>(items: &HashSet<M>, f: impl FnMut(&M) -> P) -> MutableSet<P>
where
    P: Hash + Eq,
{
    let mut set = MutableSet::new();
    set.insert_all(items.iter().map(f));
    set
}

/// Rebuilds a persisted map as a mirror map, mapping each value.
pub fn forward_map<K, P, M>(map: &Map<K, P>, mut f: impl FnMut(&P) -> M) -> HashMap<K, M>
where
    K: Clone + Hash + Eq,
{
    map.iter()
        .map(|(key, value)| (key.clone(), f(value)))
        .collect()
}

/// Assigns every pair of `items`, with its value mapped, into a fresh
/// persisted map.
pub fn backward_map<K, M, P>(items: &HashMap<K, M>, mut f: impl FnMut(&M) -> P) -> Map<K, P>
where
    K: Clone + Hash + Eq,
{
    let mut map = Map::new();

    for (key, value) in items {
        map.insert(key.clone(), f(value));
    }

    map
}
