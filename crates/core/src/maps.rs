//! Map construction and lookup helpers
//!
//! The helpers are generic over [`Dictionary`], which is implemented for
//! `HashMap`, `BTreeMap` and `IndexMap`. Lookups return [`Maybe`] instead of
//! signalling a missing key through an error.

use crate::errors::{Error, Result};
use crate::maybe::{just, nothing, Maybe};
use crate::pairs::{swap_pair_elems, zip};
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

/// A key-value container the map helpers can read from and build.
pub trait Dictionary<K, V>: Default {
    /// Borrow the value stored under `key`
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Insert unless `key` is already present.
    ///
    /// Returns `false` and drops `value` when the key exists.
    fn insert_first(&mut self, key: K, value: V) -> bool;

    /// Whether `key` is present
    fn has_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K, V, S> Dictionary<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_first(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K: Ord, V> Dictionary<K, V> for BTreeMap<K, V> {
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_first(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K, V, S> Dictionary<K, V> for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn insert_first(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

/// Build a map from `(key, value)` pairs; the first pair for a key wins
pub fn pairs_to_map<M, K, V, PS>(pairs: PS) -> M
where
    M: Dictionary<K, V>,
    PS: IntoIterator<Item = (K, V)>,
{
    let mut map = M::default();
    let mut dropped = 0usize;
    for (key, value) in pairs {
        if !map.insert_first(key, value) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::trace!(dropped, "ignored pairs with duplicate keys");
    }
    map
}

/// The `(key, value)` pairs of a map, in its iteration order
pub fn map_to_pairs<'a, M, K, V>(map: &'a M) -> Vec<(K, V)>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    map.into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// The keys of a map, in its iteration order
pub fn get_map_keys<'a, M, K, V>(map: &'a M) -> Vec<K>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: Clone + 'a,
    V: 'a,
{
    map.into_iter().map(|(key, _)| key.clone()).collect()
}

/// The values of a map, in its iteration order
pub fn get_map_values<'a, M, K, V>(map: &'a M) -> Vec<V>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: Clone + 'a,
{
    map.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Turn values into keys and keys into values.
///
/// `{1: "a", 2: "b"}` becomes `{"a": 1, "b": 2}`. When several keys share a
/// value, the key met first in iteration order is kept.
pub fn swap_keys_and_values<'a, MIn, MOut, K, V>(map: &'a MIn) -> MOut
where
    &'a MIn: IntoIterator<Item = (&'a K, &'a V)>,
    MOut: Dictionary<V, K>,
    K: Clone + 'a,
    V: Clone + 'a,
{
    pairs_to_map(map_to_pairs(map).into_iter().map(swap_pair_elems))
}

/// Ordered map from parallel key and value sequences.
///
/// `create_map([1, 2, 3], ["one", "two"])` gives `{1: "one", 2: "two"}`.
pub fn create_map<K, V, KS, VS>(keys: KS, values: VS) -> BTreeMap<K, V>
where
    K: Ord,
    KS: IntoIterator<Item = K>,
    VS: IntoIterator<Item = V>,
{
    pairs_to_map(zip(keys, values))
}

/// Hash map from parallel key and value sequences
pub fn create_unordered_map<K, V, KS, VS>(keys: KS, values: VS) -> HashMap<K, V>
where
    K: Eq + Hash,
    KS: IntoIterator<Item = K>,
    VS: IntoIterator<Item = V>,
{
    pairs_to_map(zip(keys, values))
}

/// The value stored under `key`, or nothing
pub fn get_from_map<M, K, V>(map: &M, key: &K) -> Maybe<V>
where
    M: Dictionary<K, V>,
    V: Clone,
{
    match map.lookup(key) {
        Some(value) => just(value.clone()),
        None => nothing(),
    }
}

/// The value stored under `key`, or `default`
pub fn get_from_map_with_def<M, K, V>(map: &M, default: V, key: &K) -> V
where
    M: Dictionary<K, V>,
    V: Clone,
{
    get_from_map(map, key).with_default(default)
}

/// The value stored under `key`, or [`Error::MissingKey`]
pub fn get_from_map_or_err<M, K, V>(map: &M, key: &K) -> Result<V>
where
    M: Dictionary<K, V>,
    K: Debug,
    V: Clone,
{
    map.lookup(key)
        .cloned()
        .ok_or_else(|| Error::missing_key(key))
}

/// Whether `key` is present in `map`
pub fn map_contains<M, K, V>(map: &M, key: &K) -> bool
where
    M: Dictionary<K, V>,
{
    map.has_key(key)
}
