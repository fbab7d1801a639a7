//! Persistent hash set.
//!
//! [`Set`] is an immutable unique-element container with the usual set
//! algebra. Like [`Map`](super::Map) it is copy-on-write: every operation
//! returns a new set and leaves its operands untouched.
//!
//! Iteration order is unspecified. Compare sets with `==`, or normalize
//! with [`Set::to_asc_slice`] before comparing sequences.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

use super::{HashBuilder, ReferenceCounter};
use crate::sequence::{Pair, slice};

type Elements<T> = HashSet<T, HashBuilder>;

fn empty_elements<T>() -> Elements<T> {
    HashSet::with_hasher(HashBuilder::default())
}

/// A persistent (immutable) hash set.
///
/// # Examples
///
/// ```rust
/// use fpkit::persistent::Set;
///
/// let set = Set::from_slice(vec![2, 1]);
/// assert_eq!(set, Set::from_slice(vec![1, 2]));
///
/// let extended = set.insert(3);
/// assert_eq!(set.len(), 2);
/// assert_eq!(extended.len(), 3);
/// assert!(set.is_proper_subset_of(&extended));
/// ```
pub struct Set<T> {
    elements: ReferenceCounter<Elements<T>>,
}

impl<T> Set<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_elements(empty_elements())
    }

    #[inline]
    fn from_elements(elements: Elements<T>) -> Self {
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set with one element.
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut elements = empty_elements();
        elements.insert(element);
        Self::from_elements(elements)
    }

    /// Returns `true` if `element` is in the set.
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Returns `true` if every element of `self` is in `other`.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// [`Set::is_subset_of`] with `other` strictly larger.
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// [`Set::is_superset_of`] with `self` strictly larger.
    #[inline]
    pub fn is_proper_superset_of(&self, other: &Self) -> bool {
        other.is_proper_subset_of(self)
    }

    /// Returns `true` if the sets share no element.
    pub fn disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        !smaller.iter().any(|element| larger.contains(element))
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Builds a set from a sequence; duplicates collapse.
    pub fn from_slice<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_elements(elements.into_iter().collect())
    }

    /// Collects the elements in unspecified order.
    pub fn to_slice(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Collects the elements in the ascending order defined by `less`.
    pub fn to_asc_slice<L>(&self, less: L) -> Vec<T>
    where
        L: Fn(&T, &T) -> bool,
    {
        slice::sort_by_less(&self.to_slice(), less)
    }

    /// Returns a set that also contains `element`.
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        if self.contains(&element) {
            return self.clone();
        }
        let mut elements = ReferenceCounter::clone(&self.elements);
        ReferenceCounter::make_mut(&mut elements).insert(element);
        Self { elements }
    }

    /// Returns a set without `element`.
    #[must_use]
    pub fn remove<Q>(&self, element: &Q) -> Self
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.contains(element) {
            return self.clone();
        }
        let mut elements = ReferenceCounter::clone(&self.elements);
        ReferenceCounter::make_mut(&mut elements).remove(element);
        Self { elements }
    }

    /// Reduces the elements in unspecified order.
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, function)
    }

    // =========================================================================
    // Algebra
    // =========================================================================

    /// Elements in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        if smaller.is_empty() {
            return larger.clone();
        }
        let mut elements = ReferenceCounter::clone(&larger.elements);
        ReferenceCounter::make_mut(&mut elements).extend(smaller.iter().cloned());
        Self { elements }
    }

    /// Elements in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.filter(|element| larger.contains(element))
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|element| !other.contains(element))
    }

    /// Elements in exactly one of the two sets.
    #[must_use]
    pub fn xor(&self, other: &Self) -> Self {
        let elements = self
            .iter()
            .filter(|element| !other.contains(*element))
            .chain(other.iter().filter(|element| !self.contains(*element)))
            .cloned()
            .collect();
        Self::from_elements(elements)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Keeps the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let elements = self
            .iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect();
        Self::from_elements(elements)
    }

    /// Applies `function` to every element. Results that collide collapse,
    /// so the output may be smaller than the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Set;
    ///
    /// let set = Set::from_slice(vec![-2, -1, 1, 2, 3]);
    /// assert_eq!(set.map(|x: &i32| x.abs()), Set::from_slice(vec![1, 2, 3]));
    /// ```
    pub fn map<U, F>(&self, function: F) -> Set<U>
    where
        U: Hash + Eq,
        F: FnMut(&T) -> U,
    {
        Set::from_elements(self.iter().map(function).collect())
    }

    /// Every ordered pair with the first component from `self` and the
    /// second from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::persistent::Set;
    /// use fpkit::sequence::Pair;
    ///
    /// let product = Set::from_slice(vec![1, 2]).cartesian_product(&Set::singleton('a'));
    /// assert_eq!(product, Set::from_slice(vec![Pair::new(1, 'a'), Pair::new(2, 'a')]));
    /// ```
    pub fn cartesian_product<U>(&self, other: &Set<U>) -> Set<Pair<T, U>>
    where
        U: Clone + Hash + Eq,
    {
        let mut elements = HashSet::with_capacity_and_hasher(
            self.len().saturating_mul(other.len()),
            HashBuilder::default(),
        );
        for left in self.iter() {
            for right in other.iter() {
                elements.insert(Pair::new(left.clone(), right.clone()));
            }
        }
        Set::from_elements(elements)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Set<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset_of(other)
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

/// Renders as `{a b c}`, space separated, in unspecified order.
impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        ReferenceCounter::try_unwrap(self.elements)
            .unwrap_or_else(|shared| (*shared).clone())
            .into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::TypeConstructor for Set<T> {
    type Inner = T;
    type WithType<B> = Set<B>;
}

#[cfg(feature = "typeclass")]
impl<T: Clone + Hash + Eq> crate::typeclass::Foldable for Set<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
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
impl<T: fmt::Debug> crate::control::TraceExt for Set<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(elements.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
