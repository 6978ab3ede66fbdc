//! Property-based testing utilities for the funcplus combinators
//!
//! The generators are exported behind the `testing` feature so downstream
//! crates can check their own `Maybe`-returning functions against the same
//! laws exercised here.

use crate::maybe::Maybe;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::{btree_map, vec};
    use proptest::option;
    use std::collections::BTreeMap;

    /// Generate `Maybe` values, empty roughly half of the time
    pub fn maybe<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Maybe<T>> {
        option::of(element).prop_map(Maybe::from)
    }

    /// Generate `Maybe` values that are always occupied
    pub fn just_of<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Maybe<T>> {
        element.prop_map(Maybe::Just)
    }

    /// Generate lists of values for testing collections
    pub fn list<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Vec<T>> {
        vec(element, 0..=64)
    }

    /// Generate small ordered maps
    pub fn small_map<K, V>(
        key: impl Strategy<Value = K>,
        value: impl Strategy<Value = V>,
    ) -> impl Strategy<Value = BTreeMap<K, V>>
    where
        K: Ord + 'static + std::fmt::Debug,
        V: 'static + std::fmt::Debug,
    {
        btree_map(key, value, 0..=32)
    }

    /// Generate lists of pairs that are likely to repeat keys
    pub fn pairs_with_duplicates() -> impl Strategy<Value = Vec<(u8, i32)>> {
        vec((0u8..8, any::<i32>()), 0..=32)
    }
}
