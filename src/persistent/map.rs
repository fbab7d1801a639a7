//! Persistent hash map.
//!
//! This module provides [`Map`], an immutable associative container backed
//! by a hash table behind a reference counter. Every operation that looks
//! like a mutation returns a new map; the receiver is never modified.
//!
//! Traversal of a `Map` is unordered. Operations whose result depends on
//! visiting order take an explicit strict less-than comparator instead of
//! requiring `K: Ord` (see the ordered family in this type's impl blocks).
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//! use fpkit::persistent::Map;
//!
//! let map = Map::from_slice(vec![(0, 1), (1, 2)]);
//! let adjusted = map.adjust(&1, |value| value + 1);
//!
//! assert_eq!(adjusted.to_asc_slice(|l, r| l < r), vec![(0, 1), (1, 3)]);
//! assert_eq!(map.lookup(&1), Optional::Some(2)); // Original unchanged
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::Hash;

use super::{HashBuilder, ReferenceCounter, Set};
use crate::control::{Either, Optional};
use crate::sequence::Pair;

pub(super) type Table<K, V> = HashMap<K, V, HashBuilder>;

pub(super) fn empty_table<K, V>() -> Table<K, V> {
    HashMap::with_hasher(HashBuilder::default())
}

/// Threads an accumulator through `entries` in the order given, collecting
/// the produced values into a new map under the same keys.
pub(super) fn accumulate<'a, K, V, A, W, I, F>(
    entries: I,
    init: A,
    mut function: F,
) -> Pair<A, Map<K, W>>
where
    K: Clone + Hash + Eq + 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    F: FnMut(A, &K, &V) -> (A, W),
{
    let mut table = empty_table();
    let mut accumulator = init;
    for (key, value) in entries {
        let (next, output) = function(accumulator, key, value);
        accumulator = next;
        table.insert(key.clone(), output);
    }
    Pair::new(accumulator, Map::from_table(table))
}

/// A persistent (immutable) hash map.
///
/// Cloning is O(1). A derived map shares nothing observable with its
/// source: the first write against shared storage copies the table.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `get`/`lookup`   | O(1) avg   |
/// | `insert`         | O(n)       |
/// | `delete`         | O(n)       |
/// | `clone`          | O(1)       |
/// | ordered queries  | O(n log n) |
///
/// Single-key writes are O(n) because the shared table is copied before
/// it is written. Bulk operations build their result table in one pass.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Optional;
/// use fpkit::persistent::Map;
///
/// let map = Map::singleton("foo".to_string(), 1);
/// let weighted = map.insert_with_key("foo".to_string(), 4, |key, new, old| {
///     old + key.len() * new
/// });
///
/// assert_eq!(weighted.lookup("foo"), Optional::Some(13));
/// assert_eq!(map.lookup("foo"), Optional::Some(1));
/// ```
pub struct Map<K, V> {
    entries: ReferenceCounter<Table<K, V>>,
}

// =============================================================================
// Construction and Unbounded Queries
// =============================================================================

impl<K, V> Map<K, V> {
    /// Creates an empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_table(empty_table())
    }

    #[inline]
    pub(super) fn from_table(table: Table<K, V>) -> Self {
        Self {
            entries: ReferenceCounter::new(table),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of entries. Alias of [`Map::len`].
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` references in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Iterates over the keys in unspecified order.
    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Iterates over the values in unspecified order.
    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }
}

impl<K: Hash + Eq, V> Map<K, V> {
    /// Returns a reference to the value for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::singleton("key".to_string(), 42);
    /// assert_eq!(map.get("key"), Some(&42));
    /// assert_eq!(map.get("other"), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn member<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Returns `true` if `key` is absent.
    #[inline]
    pub fn not_member<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.member(key)
    }

    /// Returns `true` if every entry of `self` is present in `other` with a
    /// value accepted by `equal`.
    pub fn is_submap_of_by<W, F>(&self, other: &Map<K, W>, mut equal: F) -> bool
    where
        F: FnMut(&V, &W) -> bool,
    {
        self.len() <= other.len()
            && self.iter().all(|(key, value)| {
                other
                    .get(key)
                    .is_some_and(|other_value| equal(value, other_value))
            })
    }

    /// [`Map::is_submap_of_by`] with the additional requirement that `other`
    /// is strictly larger.
    pub fn is_proper_submap_of_by<W, F>(&self, other: &Map<K, W>, equal: F) -> bool
    where
        F: FnMut(&V, &W) -> bool,
    {
        self.len() < other.len() && self.is_submap_of_by(other, equal)
    }

    /// Returns `true` if every entry of `self` is present in `other` with an
    /// equal value.
    pub fn is_submap_of(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.is_submap_of_by(other, |left, right| left == right)
    }

    /// [`Map::is_submap_of`] with the additional requirement that `other` is
    /// strictly larger.
    pub fn is_proper_submap_of(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        self.is_proper_submap_of_by(other, |left, right| left == right)
    }
}

// =============================================================================
// Lookup and Single-Key Writes
// =============================================================================

impl<K: Clone + Hash + Eq, V: Clone> Map<K, V> {
    /// Creates a map with a single entry.
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self {
        let mut table = empty_table();
        table.insert(key, value);
        Self::from_table(table)
    }

    /// Copies the table (when shared), applies `edit` to the copy, and wraps
    /// it as a new map.
    fn modify<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&mut Table<K, V>),
    {
        let mut entries = ReferenceCounter::clone(&self.entries);
        edit(ReferenceCounter::make_mut(&mut entries));
        Self { entries }
    }

    /// Returns a clone of the value for `key`, or `None`.
    #[inline]
    pub fn lookup<Q>(&self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).cloned().into()
    }

    /// Returns the value for `key`, or `fallback` when it is absent.
    #[inline]
    pub fn find_with_default<Q>(&self, fallback: V, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lookup(key).unwrap_or(fallback)
    }

    /// Inserts `value` under `key`, replacing any existing value.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        self.modify(|table| {
            table.insert(key, value);
        })
    }

    /// Inserts `value` under `key`. When the key is present the stored value
    /// becomes `combine(new, old)`.
    #[must_use]
    pub fn insert_with<F>(&self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(V, V) -> V,
    {
        self.insert_with_key(key, value, |_, new, old| combine(new, old))
    }

    /// Like [`Map::insert_with`], passing the key to `combine` as well.
    #[must_use]
    pub fn insert_with_key<F>(&self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(&K, V, V) -> V,
    {
        self.modify(|table| {
            let combined = match table.remove(&key) {
                Some(old) => combine(&key, value, old),
                None => value,
            };
            table.insert(key, combined);
        })
    }

    /// Performs [`Map::insert_with_key`] and also returns the value that was
    /// stored under `key` beforehand.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::singleton(5, "a".to_string());
    /// let (previous, updated) = map
    ///     .insert_lookup_with_key(5, "x".to_string(), |_, new, old| new + &old)
    ///     .into_tuple();
    ///
    /// assert_eq!(previous, Optional::Some("a".to_string()));
    /// assert_eq!(updated.lookup(&5), Optional::Some("xa".to_string()));
    /// ```
    #[must_use]
    pub fn insert_lookup_with_key<F>(&self, key: K, value: V, combine: F) -> Pair<Optional<V>, Self>
    where
        F: FnOnce(&K, V, V) -> V,
    {
        let previous = self.lookup(&key);
        Pair::new(previous, self.insert_with_key(key, value, combine))
    }

    /// Removes `key`. Absent keys leave the map unchanged.
    #[must_use]
    pub fn delete<Q>(&self, key: &Q) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.not_member(key) {
            return self.clone();
        }
        self.modify(|table| {
            table.remove(key);
        })
    }

    /// The general single-key write.
    ///
    /// `function` receives the current value for `key` (or `None`) and its
    /// result decides the outcome: `Some` stores the value, `None` removes
    /// the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::singleton("hits", 1);
    /// let bump = |current: Optional<i32>| Optional::Some(current.unwrap_or(0) + 1);
    ///
    /// assert_eq!(map.alter("hits", bump).lookup("hits"), Optional::Some(2));
    /// assert_eq!(map.alter("miss", bump).lookup("miss"), Optional::Some(1));
    /// assert!(map.alter("hits", |_| Optional::None).is_empty());
    /// ```
    #[must_use]
    pub fn alter<F>(&self, key: K, function: F) -> Self
    where
        F: FnOnce(Optional<V>) -> Optional<V>,
    {
        self.modify(|table| {
            let current = Optional::from(table.remove(&key));
            if let Optional::Some(value) = function(current) {
                table.insert(key, value);
            }
        })
    }

    /// Applies `function` to the value under `key`. Absent keys leave the
    /// map unchanged.
    #[must_use]
    pub fn adjust<Q, F>(&self, key: &Q, function: F) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(V) -> V,
    {
        self.update(key, |value| Optional::Some(function(value)))
    }

    /// Replaces the value under `key` with `function`'s result, or removes
    /// the key when it yields `None`. Absent keys leave the map unchanged.
    #[must_use]
    pub fn update<Q, F>(&self, key: &Q, function: F) -> Self
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(V) -> Optional<V>,
    {
        if self.not_member(key) {
            return self.clone();
        }
        self.modify(|table| {
            if let Some((owned_key, value)) = table.remove_entry(key)
                && let Optional::Some(updated) = function(value)
            {
                table.insert(owned_key, updated);
            }
        })
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Left-biased union: on a shared key the value from `self` is kept.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.union_with(other, |left, _| left.clone())
    }

    /// Union resolving shared keys with `combine(self_value, other_value)`.
    #[must_use]
    pub fn union_with<F>(&self, other: &Self, mut combine: F) -> Self
    where
        F: FnMut(&V, &V) -> V,
    {
        self.union_with_key(other, |_, left, right| combine(left, right))
    }

    /// Like [`Map::union_with`], passing the key to `combine` as well.
    #[must_use]
    pub fn union_with_key<F>(&self, other: &Self, mut combine: F) -> Self
    where
        F: FnMut(&K, &V, &V) -> V,
    {
        if other.is_empty() {
            return self.clone();
        }
        self.modify(|table| {
            for (key, other_value) in other.iter() {
                match table.get_mut(key) {
                    Some(value) => {
                        let combined = combine(key, value, other_value);
                        *value = combined;
                    }
                    None => {
                        table.insert(key.clone(), other_value.clone());
                    }
                }
            }
        })
    }

    /// Left-to-right [`Map::union`] of every map in `maps`.
    pub fn unions<'a, I>(maps: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        K: 'a,
        V: 'a,
    {
        maps.into_iter()
            .fold(Self::new(), |accumulator, map| accumulator.union(map))
    }

    /// Left-to-right [`Map::union_with`] of every map in `maps`.
    pub fn unions_with<'a, I, F>(maps: I, mut combine: F) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        F: FnMut(&V, &V) -> V,
        K: 'a,
        V: 'a,
    {
        maps.into_iter().fold(Self::new(), |accumulator, map| {
            accumulator.union_with(map, &mut combine)
        })
    }

    /// Entries of `self` whose key is absent from `other`.
    #[must_use]
    pub fn difference<W>(&self, other: &Map<K, W>) -> Self {
        self.filter_with_key(|key, _| other.not_member(key))
    }

    /// Like [`Map::difference`], except that for a shared key `combine`
    /// decides whether the entry is kept (and with which value).
    #[must_use]
    pub fn difference_with<W, F>(&self, other: &Map<K, W>, mut combine: F) -> Self
    where
        F: FnMut(&V, &W) -> Optional<V>,
    {
        self.difference_with_key(other, |_, value, other_value| {
            combine(value, other_value)
        })
    }

    /// Like [`Map::difference_with`], passing the key to `combine` as well.
    #[must_use]
    pub fn difference_with_key<W, F>(&self, other: &Map<K, W>, mut combine: F) -> Self
    where
        F: FnMut(&K, &V, &W) -> Optional<V>,
    {
        let table = self
            .iter()
            .filter_map(|(key, value)| match other.get(key) {
                None => Some((key.clone(), value.clone())),
                Some(other_value) => combine(key, value, other_value)
                    .into_option()
                    .map(|kept| (key.clone(), kept)),
            })
            .collect();
        Self::from_table(table)
    }

    /// Entries of `self` whose key is also present in `other`.
    #[must_use]
    pub fn intersection<W>(&self, other: &Map<K, W>) -> Self {
        self.filter_with_key(|key, _| other.member(key))
    }

    /// Keys present in both maps, with values merged by `combine`.
    pub fn intersection_with<W, X, F>(&self, other: &Map<K, W>, mut combine: F) -> Map<K, X>
    where
        F: FnMut(&V, &W) -> X,
    {
        self.intersection_with_key(other, |_, value, other_value| {
            combine(value, other_value)
        })
    }

    /// Like [`Map::intersection_with`], passing the key to `combine` as well.
    pub fn intersection_with_key<W, X, F>(&self, other: &Map<K, W>, mut combine: F) -> Map<K, X>
    where
        F: FnMut(&K, &V, &W) -> X,
    {
        let table = self
            .iter()
            .filter_map(|(key, value)| {
                other
                    .get(key)
                    .map(|other_value| (key.clone(), combine(key, value, other_value)))
            })
            .collect();
        Map::from_table(table)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Transforms every value.
    pub fn map<W, F>(&self, mut function: F) -> Map<K, W>
    where
        F: FnMut(&V) -> W,
    {
        self.map_with_key(|_, value| function(value))
    }

    /// Transforms every value with access to its key.
    pub fn map_with_key<W, F>(&self, mut function: F) -> Map<K, W>
    where
        F: FnMut(&K, &V) -> W,
    {
        let table = self
            .iter()
            .map(|(key, value)| (key.clone(), function(key, value)))
            .collect();
        Map::from_table(table)
    }

    /// Threads an accumulator through every value while transforming it.
    ///
    /// Entries are visited in unspecified order, so the final accumulator is
    /// only deterministic for order-insensitive accumulation. Use
    /// [`Map::map_accum_ordered`] otherwise.
    pub fn map_accum<A, W, F>(&self, init: A, mut function: F) -> Pair<A, Map<K, W>>
    where
        F: FnMut(A, &V) -> (A, W),
    {
        self.map_accum_with_key(init, |accumulator, _, value| function(accumulator, value))
    }

    /// Like [`Map::map_accum`], passing the key to `function` as well.
    pub fn map_accum_with_key<A, W, F>(&self, init: A, function: F) -> Pair<A, Map<K, W>>
    where
        F: FnMut(A, &K, &V) -> (A, W),
    {
        accumulate(self.iter(), init, function)
    }

    /// Reduces the values in unspecified order.
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &V) -> B,
    {
        self.values().fold(init, function)
    }

    /// Reduces the entries in unspecified order.
    pub fn fold_with_key<B, F>(&self, init: B, mut function: F) -> B
    where
        F: FnMut(B, &K, &V) -> B,
    {
        self.iter()
            .fold(init, |accumulator, (key, value)| function(accumulator, key, value))
    }

    // =========================================================================
    // Filtering and Projection
    // =========================================================================

    /// Keeps the entries whose value satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool,
    {
        self.filter_with_key(|_, value| predicate(value))
    }

    /// Keeps the entries satisfying `predicate`.
    #[must_use]
    pub fn filter_with_key<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K, &V) -> bool,
    {
        let table = self
            .iter()
            .filter(|&(key, value)| predicate(key, value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self::from_table(table)
    }

    /// Splits into `(matching, non_matching)` by a predicate on values.
    pub fn partition<P>(&self, mut predicate: P) -> Pair<Self, Self>
    where
        P: FnMut(&V) -> bool,
    {
        self.partition_with_key(|_, value| predicate(value))
    }

    /// Splits into `(matching, non_matching)`; every entry lands in exactly
    /// one side.
    pub fn partition_with_key<P>(&self, mut predicate: P) -> Pair<Self, Self>
    where
        P: FnMut(&K, &V) -> bool,
    {
        let (matching, rest): (Table<K, V>, Table<K, V>) = self
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .partition(|(key, value)| predicate(key, value));
        Pair::new(Self::from_table(matching), Self::from_table(rest))
    }

    /// Keeps the entries for which `function` yields `Some`, storing the
    /// unwrapped result.
    pub fn map_option<W, F>(&self, mut function: F) -> Map<K, W>
    where
        F: FnMut(&V) -> Optional<W>,
    {
        self.map_option_with_key(|_, value| function(value))
    }

    /// Like [`Map::map_option`], passing the key to `function` as well.
    pub fn map_option_with_key<W, F>(&self, mut function: F) -> Map<K, W>
    where
        F: FnMut(&K, &V) -> Optional<W>,
    {
        let table = self
            .iter()
            .filter_map(|(key, value)| {
                function(key, value)
                    .into_option()
                    .map(|mapped| (key.clone(), mapped))
            })
            .collect();
        Map::from_table(table)
    }

    /// Splits the entries by the side `function` selects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::{Either, Optional};
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice(vec![("foo", 1), ("bar", 2)]);
    /// let (evens, odds) = map
    ///     .map_either(|x| if x % 2 == 0 { Either::Left(*x) } else { Either::Right(*x) })
    ///     .into_tuple();
    ///
    /// assert_eq!(evens, Map::singleton("bar", 2));
    /// assert_eq!(odds.lookup("foo"), Optional::Some(1));
    /// ```
    pub fn map_either<L, R, F>(&self, mut function: F) -> Pair<Map<K, L>, Map<K, R>>
    where
        F: FnMut(&V) -> Either<L, R>,
    {
        self.map_either_with_key(|_, value| function(value))
    }

    /// Like [`Map::map_either`], passing the key to `function` as well.
    pub fn map_either_with_key<L, R, F>(&self, mut function: F) -> Pair<Map<K, L>, Map<K, R>>
    where
        F: FnMut(&K, &V) -> Either<L, R>,
    {
        let mut lefts = empty_table();
        let mut rights = empty_table();
        for (key, value) in self.iter() {
            match function(key, value) {
                Either::Left(left) => {
                    lefts.insert(key.clone(), left);
                }
                Either::Right(right) => {
                    rights.insert(key.clone(), right);
                }
            }
        }
        Pair::new(Map::from_table(lefts), Map::from_table(rights))
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Collects the entries in unspecified order.
    pub fn to_slice(&self) -> Vec<(K, V)> {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Builds a map from entries; on a repeated key the last entry wins.
    pub fn from_slice<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_table(entries.into_iter().collect())
    }

    /// Builds a map from entries; on a repeated key the stored value becomes
    /// `combine(new, old)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    /// use fpkit::persistent::Map;
    ///
    /// let map = Map::from_slice_with(vec![(5, "a"), (3, "b"), (5, "c")], |new, old| {
    ///     if new < old { new } else { old }
    /// });
    /// assert_eq!(map.lookup(&5), Optional::Some("a"));
    /// ```
    pub fn from_slice_with<I, F>(entries: I, mut combine: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(V, V) -> V,
    {
        Self::from_slice_with_key(entries, |_, new, old| combine(new, old))
    }

    /// Like [`Map::from_slice_with`], passing the key to `combine` as well.
    pub fn from_slice_with_key<I, F>(entries: I, mut combine: F) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        F: FnMut(&K, V, V) -> V,
    {
        let mut table = empty_table();
        for (key, value) in entries {
            let combined = match table.remove(&key) {
                Some(old) => combine(&key, value, old),
                None => value,
            };
            table.insert(key, combined);
        }
        Self::from_table(table)
    }

    /// Collects the keys into a [`Set`].
    pub fn keys_set(&self) -> Set<K> {
        self.keys().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for Map<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: ReferenceCounter::clone(&self.entries),
        }
    }
}

impl<K, V> Default for Map<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl<K: Hash + Eq, V: Eq> Eq for Map<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_table(iter.into_iter().collect())
    }
}

impl<K: Clone, V: Clone> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    /// Takes the table when it is uniquely owned and clones it otherwise.
    fn into_iter(self) -> Self::IntoIter {
        ReferenceCounter::try_unwrap(self.entries)
            .unwrap_or_else(|shared| (*shared).clone())
            .into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<K, V> crate::typeclass::TypeConstructor for Map<K, V> {
    type Inner = V;
    type WithType<B> = Map<K, B>;
}

#[cfg(feature = "typeclass")]
impl<K: Clone + Hash + Eq, V: Clone> crate::typeclass::Foldable for Map<K, V> {
    /// Folds the values in unspecified order.
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(accumulator, value))
    }

    /// Folds the values in unspecified order.
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, (_, value)| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(feature = "tracing")]
impl<K: fmt::Debug, V: fmt::Debug> crate::control::TraceExt for Map<K, V> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Map<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct MapVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for MapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    type Value = Map<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut table = empty_table();
        while let Some((key, value)) = access.next_entry()? {
            table.insert(key, value);
        }
        Ok(Map::from_table(table))
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ascending<V: Clone>(map: &Map<i32, V>) -> Vec<(i32, V)> {
        map.to_asc_slice(|left, right| left < right)
    }

    fn by_name(entries: &[(&'static str, i32)]) -> Map<&'static str, i32> {
        Map::from_slice(entries.iter().copied())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    #[rstest]
    fn test_lookup_and_membership() {
        let map = Map::from_slice(vec![(1, "one"), (2, "two")]);

        assert_eq!(map.lookup(&1), Optional::Some("one"));
        assert_eq!(map.lookup(&3), Optional::None);
        assert!(map.member(&2));
        assert!(map.not_member(&3));
        assert_eq!(map.find_with_default("none", &3), "none");
        assert_eq!(map.find_with_default("none", &1), "one");
    }

    #[rstest]
    fn test_borrowed_key_lookup() {
        let map = Map::singleton("key".to_string(), 1);
        assert_eq!(map.get("key"), Some(&1));
        assert!(map.member("key"));
    }

    #[rstest]
    fn test_size_matches_len() {
        let map = Map::from_slice(vec![(1, 1), (1, 2), (2, 3)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.size(), 2);
        assert!(Map::<i32, i32>::new().is_empty());
    }

    // =========================================================================
    // Single-key writes
    // =========================================================================

    #[rstest]
    fn test_adjust_present_key() {
        let map = Map::from_slice(vec![(0, 1), (1, 2)]);
        let adjusted = map.adjust(&1, |value| value + 1);

        assert_eq!(ascending(&adjusted), vec![(0, 1), (1, 3)]);
        assert_eq!(ascending(&map), vec![(0, 1), (1, 2)]);
    }

    #[rstest]
    fn test_adjust_empty_map() {
        let map: Map<i32, i32> = Map::new();
        assert!(map.adjust(&1, |value| value + 1).is_empty());
    }

    #[rstest]
    fn test_insert_with_key_weighted() {
        let map = Map::singleton("foo".to_string(), 1);
        let result = map.insert_with_key("foo".to_string(), 4, |key, new, old| {
            old + key.len() * new
        });
        assert_eq!(result.lookup("foo"), Optional::Some(13));
    }

    #[rstest]
    #[case(Map::singleton(1, 10), 11)]
    #[case(Map::new(), 1)]
    fn test_insert_with(#[case] map: Map<i32, i32>, #[case] expected: i32) {
        let result = map.insert_with(1, 1, |new, old| new + old);
        assert_eq!(result.lookup(&1), Optional::Some(expected));
    }

    #[rstest]
    fn test_insert_with_argument_order() {
        let map = Map::singleton(1, "old".to_string());
        let result = map.insert_with(1, "new".to_string(), |new, old| format!("{new}:{old}"));
        assert_eq!(result.lookup(&1), Optional::Some("new:old".to_string()));
    }

    #[rstest]
    fn test_insert_lookup_with_key_absent() {
        let map: Map<i32, i32> = Map::new();
        let (previous, updated) = map
            .insert_lookup_with_key(7, 1, |_, new, old| new + old)
            .into_tuple();

        assert_eq!(previous, Optional::None);
        assert_eq!(updated.lookup(&7), Optional::Some(1));
    }

    #[rstest]
    #[case(Optional::Some(5), Optional::Some(5))]
    #[case(Optional::None, Optional::None)]
    fn test_update(#[case] replacement: Optional<i32>, #[case] expected: Optional<i32>) {
        let map = Map::singleton(1, 1);
        let updated = map.update(&1, |_| replacement);

        assert_eq!(updated.lookup(&1), expected);
        assert_eq!(map.lookup(&1), Optional::Some(1));
    }

    #[rstest]
    fn test_update_absent_key_is_noop() {
        let map = Map::singleton(1, 1);
        assert_eq!(map.update(&2, |_| Optional::Some(9)), map);
    }

    #[rstest]
    fn test_alter_inserts_updates_and_deletes() {
        let map = Map::singleton(1, 10);

        assert_eq!(map.alter(2, |_| Optional::Some(20)).len(), 2);
        assert_eq!(
            map.alter(1, |current| current.map(|value| value * 2)).lookup(&1),
            Optional::Some(20)
        );
        assert!(map.alter(1, |_| Optional::None).is_empty());
        assert_eq!(map.alter(3, |_| Optional::None), map);
    }

    #[rstest]
    fn test_delete() {
        let map = Map::from_slice(vec![(1, 1), (2, 2)]);

        assert_eq!(ascending(&map.delete(&1)), vec![(2, 2)]);
        assert_eq!(map.delete(&9), map);
        assert_eq!(map.len(), 2);
    }

    // =========================================================================
    // Combination
    // =========================================================================

    #[rstest]
    fn test_union_prefers_left() {
        let left = Map::from_slice(vec![(1, "a"), (2, "b")]);
        let right = Map::from_slice(vec![(2, "x"), (3, "c")]);

        assert_eq!(ascending(&left.union(&right)), vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[rstest]
    fn test_union_with_argument_order() {
        let left = Map::singleton(1, "l".to_string());
        let right = Map::singleton(1, "r".to_string());
        let merged = left.union_with(&right, |first, second| format!("{first}{second}"));

        assert_eq!(merged.lookup(&1), Optional::Some("lr".to_string()));
    }

    #[rstest]
    fn test_union_with_key() {
        let left = Map::singleton(3, 1);
        let right = Map::singleton(3, 2);
        let merged = left.union_with_key(&right, |key, first, second| key * (first + second));

        assert_eq!(merged.lookup(&3), Optional::Some(9));
    }

    #[rstest]
    fn test_unions_folds_left_to_right() {
        let maps = [
            Map::singleton(1, "first"),
            Map::singleton(1, "second"),
            Map::singleton(2, "third"),
        ];
        assert_eq!(ascending(&Map::unions(&maps)), vec![(1, "first"), (2, "third")]);
    }

    #[rstest]
    fn test_unions_with() {
        let maps = vec![Map::singleton(1, 1), Map::singleton(1, 2), Map::singleton(1, 3)];
        let merged = Map::unions_with(&maps, |left, right| left + right);
        assert_eq!(merged.lookup(&1), Optional::Some(6));
    }

    #[rstest]
    fn test_difference_by_key_only() {
        let base = by_name(&[("foo", 1), ("bar", 2), ("baz", 3)]);
        let other: Map<&str, ()> = Map::from_slice(vec![("foo", ()), ("bar", ())]);

        assert_eq!(base.difference(&other), Map::singleton("baz", 3));
    }

    #[rstest]
    fn test_difference_with() {
        let base = Map::from_slice(vec![(1, 10), (2, 20), (3, 30)]);
        let other = Map::from_slice(vec![(1, true), (2, false)]);
        let result = base.difference_with(&other, |value, keep| {
            if *keep { Optional::Some(value + 1) } else { Optional::None }
        });

        assert_eq!(ascending(&result), vec![(1, 11), (3, 30)]);
    }

    #[rstest]
    fn test_difference_with_key() {
        let base = Map::from_slice(vec![(1, 10), (2, 20)]);
        let other = Map::from_slice(vec![(2, 5)]);
        let result = base.difference_with_key(&other, |key, value, other_value| {
            Optional::Some(key + value + other_value)
        });

        assert_eq!(ascending(&result), vec![(1, 10), (2, 27)]);
    }

    #[rstest]
    fn test_intersection_keeps_left_values() {
        let left = Map::from_slice(vec![(1, "a"), (2, "b")]);
        let right = Map::from_slice(vec![(2, 0.5), (3, 1.5)]);

        assert_eq!(ascending(&left.intersection(&right)), vec![(2, "b")]);
    }

    #[rstest]
    fn test_intersection_with_changes_value_type() {
        let left = Map::from_slice(vec![(1, 2), (2, 3)]);
        let right = Map::from_slice(vec![(2, "xy")]);
        let result = left.intersection_with(&right, |count, text| text.repeat(*count as usize));

        assert_eq!(ascending(&result), vec![(2, "xyxyxy".to_string())]);
    }

    #[rstest]
    fn test_intersection_with_key() {
        let left = Map::from_slice(vec![(1, 2), (2, 3)]);
        let right = Map::from_slice(vec![(1, 4), (2, 5)]);
        let result = left.intersection_with_key(&right, |key, a, b| key * 100 + a * b);

        assert_eq!(ascending(&result), vec![(1, 108), (2, 215)]);
    }

    // =========================================================================
    // Traversal and projection
    // =========================================================================

    #[rstest]
    fn test_map_and_map_with_key() {
        let map = Map::from_slice(vec![(1, 10), (2, 20)]);

        assert_eq!(ascending(&map.map(|value| value / 10)), vec![(1, 1), (2, 2)]);
        assert_eq!(
            ascending(&map.map_with_key(|key, value| key + value)),
            vec![(1, 11), (2, 22)]
        );
    }

    #[rstest]
    fn test_map_accum_sums_values() {
        let map = Map::from_slice(vec![(1, 10), (2, 20)]);
        let (total, doubled) = map
            .map_accum(0, |sum, value| (sum + value, value * 2))
            .into_tuple();

        assert_eq!(total, 30);
        assert_eq!(ascending(&doubled), vec![(1, 20), (2, 40)]);
    }

    #[rstest]
    fn test_map_accum_with_key() {
        let map = Map::from_slice(vec![(1, 10), (2, 20)]);
        let (keys, _) = map
            .map_accum_with_key(0, |sum, key, value| (sum + key, *value))
            .into_tuple();
        assert_eq!(keys, 3);
    }

    #[rstest]
    fn test_fold_and_fold_with_key() {
        let map = Map::from_slice(vec![(1, 10), (2, 20)]);

        assert_eq!(map.fold(0, |sum, value| sum + value), 30);
        assert_eq!(map.fold_with_key(0, |sum, key, value| sum + key * value), 50);
    }

    #[rstest]
    fn test_filter_and_partition() {
        let map = Map::from_slice(vec![(1, 1), (2, 2), (3, 3), (4, 4)]);

        assert_eq!(ascending(&map.filter(|value| value % 2 == 0)), vec![(2, 2), (4, 4)]);
        assert_eq!(
            ascending(&map.filter_with_key(|key, _| *key > 2)),
            vec![(3, 3), (4, 4)]
        );

        let (small, large) = map.partition(|value| *value < 3).into_tuple();
        assert_eq!(ascending(&small), vec![(1, 1), (2, 2)]);
        assert_eq!(ascending(&large), vec![(3, 3), (4, 4)]);
    }

    #[rstest]
    fn test_partition_with_key_covers_every_entry() {
        let map = Map::from_slice((0..10).map(|key| (key, key * key)));
        let (matching, rest) = map.partition_with_key(|key, value| key + value > 10).into_tuple();

        assert_eq!(matching.len() + rest.len(), map.len());
        assert!(matching.keys().all(|key| rest.not_member(key)));
    }

    #[rstest]
    fn test_map_option() {
        let map = Map::from_slice(vec![(1, "1"), (2, "x"), (3, "3")]);
        let parsed = map.map_option(|text| Optional::from(text.parse::<i32>().ok()));

        assert_eq!(ascending(&parsed), vec![(1, 1), (3, 3)]);
    }

    #[rstest]
    fn test_map_option_with_key() {
        let map = Map::from_slice(vec![(1, 5), (2, 6)]);
        let result = map.map_option_with_key(|key, value| {
            if key % 2 == 0 { Optional::Some(value * key) } else { Optional::None }
        });

        assert_eq!(ascending(&result), vec![(2, 12)]);
    }

    #[rstest]
    fn test_map_either_splits_by_parity() {
        let map = by_name(&[("foo", 1), ("bar", 2)]);
        let (lefts, rights) = map
            .map_either(|value| {
                if value % 2 == 0 { Either::Left(*value) } else { Either::Right(*value) }
            })
            .into_tuple();

        assert_eq!(lefts, Map::singleton("bar", 2));
        assert_eq!(rights, Map::singleton("foo", 1));
    }

    #[rstest]
    fn test_map_either_with_key() {
        let map = by_name(&[("a", 1), ("bb", 2)]);
        let (short, long) = map
            .map_either_with_key(|key, value| {
                if key.len() < 2 { Either::Left(*value) } else { Either::Right(key.len()) }
            })
            .into_tuple();

        assert_eq!(short, Map::singleton("a", 1));
        assert_eq!(long, Map::singleton("bb", 2));
    }

    // =========================================================================
    // Submaps
    // =========================================================================

    #[rstest]
    #[case(vec![(1, 1)], vec![(1, 1), (2, 2)], true, true)]
    #[case(vec![(1, 1), (2, 2)], vec![(1, 1), (2, 2)], true, false)]
    #[case(vec![(1, 9)], vec![(1, 1), (2, 2)], false, false)]
    #[case(vec![(3, 3)], vec![(1, 1)], false, false)]
    #[case(vec![], vec![], true, false)]
    fn test_submap_relations(
        #[case] left: Vec<(i32, i32)>,
        #[case] right: Vec<(i32, i32)>,
        #[case] submap: bool,
        #[case] proper: bool,
    ) {
        let left = Map::from_slice(left);
        let right = Map::from_slice(right);

        assert_eq!(left.is_submap_of(&right), submap);
        assert_eq!(left.is_proper_submap_of(&right), proper);
    }

    #[rstest]
    fn test_submap_of_by_custom_equality() {
        let left = Map::singleton(1, 5);
        let right = Map::from_slice(vec![(1, "hello"), (2, "x")]);

        assert!(left.is_submap_of_by(&right, |count, text| *count as usize == text.len()));
        assert!(left.is_proper_submap_of_by(&right, |count, text| *count as usize == text.len()));
        assert!(!left.is_submap_of_by(&right, |_, _| false));
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    #[rstest]
    fn test_from_slice_last_write_wins() {
        let map = Map::from_slice(vec![(1, "a"), (1, "b")]);
        assert_eq!(map.lookup(&1), Optional::Some("b"));
    }

    #[rstest]
    fn test_from_slice_with_combines_new_then_old() {
        let map = Map::from_slice_with(vec![(1, "a"), (1, "b"), (1, "c")], |new, old| {
            if new > old { new } else { old }
        });
        assert_eq!(map.lookup(&1), Optional::Some("c"));

        let concatenated = Map::from_slice_with(
            vec![(1, "a".to_string()), (1, "b".to_string())],
            |new, old| new + &old,
        );
        assert_eq!(concatenated.lookup(&1), Optional::Some("ba".to_string()));
    }

    #[rstest]
    fn test_from_slice_with_key() {
        let map = Map::from_slice_with_key(vec![(2, 1), (2, 3)], |key, new, old| key * new + old);
        assert_eq!(map.lookup(&2), Optional::Some(7));
    }

    #[rstest]
    fn test_to_slice_contains_every_entry() {
        let map = Map::from_slice(vec![(1, 'a'), (2, 'b')]);
        let mut entries = map.to_slice();
        entries.sort_unstable();
        assert_eq!(entries, vec![(1, 'a'), (2, 'b')]);
    }

    #[rstest]
    fn test_keys_set() {
        let map = Map::from_slice(vec![(1, 'a'), (2, 'b')]);
        assert_eq!(map.keys_set(), Set::from_slice(vec![2, 1]));
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[rstest]
    fn test_insert_does_not_alias_source() {
        let original = Map::singleton(1, vec![1]);
        let derived = original.insert(2, vec![2]);
        let derived_again = derived.adjust(&1, |mut values| {
            values.push(9);
            values
        });

        assert_eq!(original.len(), 1);
        assert_eq!(original.lookup(&1), Optional::Some(vec![1]));
        assert_eq!(derived.lookup(&1), Optional::Some(vec![1]));
        assert_eq!(derived_again.lookup(&1), Optional::Some(vec![1, 9]));
    }

    #[rstest]
    fn test_into_iter_shared_and_unique() {
        let map = Map::from_slice(vec![(1, 1), (2, 2)]);
        let shared = map.clone();

        let mut from_shared: Vec<_> = shared.into_iter().collect();
        from_shared.sort_unstable();
        assert_eq!(from_shared, vec![(1, 1), (2, 2)]);

        let mut from_unique: Vec<_> = map.into_iter().collect();
        from_unique.sort_unstable();
        assert_eq!(from_unique, vec![(1, 1), (2, 2)]);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Map::singleton(1, "a")), "{1: \"a\"}");
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn test_foldable_sums_values() {
        use crate::typeclass::Foldable;

        let map = Map::from_slice(vec![(1, 10), (2, 20)]);
        assert_eq!(map.clone().fold_left(0, |sum, value| sum + value), 30);
        assert_eq!(Foldable::length(&map), 2);
        assert!(map.exists(|value| *value == 20));
    }
}
