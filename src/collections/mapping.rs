//! Conditional insertion into key/value maps.
//!
//! [`Mapping`] is the container contract: a map with unique keys that can
//! insert a pair only when its key is vacant. It is implemented for
//! [`HashMap`] (with any hasher) and [`BTreeMap`]. [`MappingExt`] adds the
//! method form of [`add_if_not_contains`] to every [`Mapping`].
//!
//! # Examples
//!
//! ```rust
//! use extkit::collections::add_if_not_contains;
//! use std::collections::HashMap;
//!
//! let mut flags = HashMap::from([(true, 1)]);
//! assert!(add_if_not_contains(&mut flags, false, 0));
//! assert_eq!(flags.len(), 2);
//! ```

use std::collections::{BTreeMap, HashMap, btree_map, hash_map};
use std::hash::{BuildHasher, Hash};

/// A key/value container with unique keys.
///
/// Implementors look the key up once and insert only into a vacant slot.
pub trait Mapping<K, V> {
    /// Inserts `value` under `key` if the key is absent.
    ///
    /// Returns `true` if the pair was inserted. When the key is already
    /// present the map is left untouched, including the existing value.
    fn insert_if_vacant(&mut self, key: K, value: V) -> bool;
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert_if_vacant(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn insert_if_vacant(&mut self, key: K, value: V) -> bool {
        match self.entry(key) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }
}

/// Adds `value` under `key` unless `mapping` already contains `key`.
///
/// Returns `true` if the pair was added and `false` if the key was already
/// present, in which case `mapping` is not modified.
///
/// # Examples
///
/// ```rust
/// use extkit::collections::add_if_not_contains;
/// use std::collections::BTreeMap;
///
/// let mut totals = BTreeMap::from([(0, "zero"), (10, "dollars"), (3, "beers")]);
/// assert!(!add_if_not_contains(&mut totals, 10, "money"));
/// assert_eq!(totals[&10], "dollars");
/// assert_eq!(totals.len(), 3);
/// ```
pub fn add_if_not_contains<M, K, V>(mapping: &mut M, key: K, value: V) -> bool
where
    M: Mapping<K, V> + ?Sized,
{
    let added = mapping.insert_if_vacant(key, value);
    crate::trace_event!(added, "add_if_not_contains");
    added
}

/// Method form of [`add_if_not_contains`] for every [`Mapping`].
pub trait MappingExt<K, V>: Mapping<K, V> {
    /// Adds `value` under `key` unless the key is already present.
    ///
    /// See [`add_if_not_contains`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use extkit::collections::MappingExt;
    /// use std::collections::HashMap;
    ///
    /// let mut names = HashMap::new();
    /// assert!(names.add_if_not_contains(1, "one"));
    /// assert!(!names.add_if_not_contains(1, "uno"));
    /// assert_eq!(names[&1], "one");
    /// ```
    fn add_if_not_contains(&mut self, key: K, value: V) -> bool {
        add_if_not_contains(self, key, value)
    }
}

impl<M, K, V> MappingExt<K, V> for M where M: Mapping<K, V> + ?Sized {}
