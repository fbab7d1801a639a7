//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can have its elements reduced into a single summary value.
//! For the hash-backed containers the traversal order is unspecified, so
//! `fold_left` and `fold_right` only agree for commutative operations. Use
//! the comparator-driven folds on [`Map`](crate::persistent::Map) when
//! order matters.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//! use fpkit::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(numbers.fold_left(0, |accumulator, element| accumulator + element), 15);
//!
//! let some_value = Optional::Some(10);
//! assert_eq!(some_value.fold_left(5, |accumulator, element| accumulator + element), 15);
//! ```

use super::higher::TypeConstructor;
use crate::control::Optional;

/// A type class for data structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the first element to the last.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the last element to the first.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects every element into a `Vec`, in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element, in fold order, that satisfies `predicate`.
    fn find<P>(self, mut predicate: P) -> Optional<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Optional::None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Optional::Some(element)
            } else {
                Optional::None
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
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
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}
