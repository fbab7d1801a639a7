//! Persistent (copy-on-write) hash containers.
//!
//! This module provides immutable containers whose "mutating" operations
//! return a new container and leave the original untouched:
//!
//! - [`Map`]: associative container with unordered and comparator-ordered
//!   traversal, set-like combination, and `Optional`/`Either`-aware projection
//! - [`Set`]: unique-element container with the usual set algebra
//!
//! # Copy-on-write
//!
//! Both containers keep their hash table behind a [`ReferenceCounter`].
//! Cloning a container only bumps the count. A derived write clones the
//! table first whenever it is shared, so the source of a transformation
//! never observes the write and never aliases the result's storage.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::persistent::Map;
//!
//! let map = Map::new()
//!     .insert("one".to_string(), 1)
//!     .insert("two".to_string(), 2);
//! assert_eq!(map.get("one"), Some(&1));
//!
//! let updated = map.insert("one".to_string(), 100);
//! assert_eq!(map.get("one"), Some(&1));       // Original unchanged
//! assert_eq!(updated.get("one"), Some(&100)); // New version
//! ```
//!
//! ```rust
//! use fpkit::persistent::Set;
//!
//! let set: Set<i32> = Set::from_slice(vec![1, 2, 3]);
//! let other: Set<i32> = Set::from_slice(vec![2, 3, 4]);
//!
//! assert_eq!(set.union(&other).len(), 4);        // {1, 2, 3, 4}
//! assert_eq!(set.intersection(&other).len(), 2); // {2, 3}
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Hasher Selection
// =============================================================================

/// Hash builder used by [`Map`] and [`Set`].
///
/// `fxhash` selects `rustc_hash::FxBuildHasher`, `ahash` selects
/// `ahash::RandomState`; otherwise the standard library's SipHash
/// `RandomState` is used. `fxhash` wins when both are enabled.
#[cfg(feature = "fxhash")]
pub type HashBuilder = rustc_hash::FxBuildHasher;

/// Hash builder used by [`Map`] and [`Set`].
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type HashBuilder = ahash::RandomState;

/// Hash builder used by [`Map`] and [`Set`].
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type HashBuilder = std::collections::hash_map::RandomState;

mod map;
mod ordered;
mod set;

pub use map::Map;
pub use set::Set;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Map<i32, String>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Set<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Map<i32, String>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Set<String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_make_mut_detaches_shared_value() {
        let original: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1, 2]);
        let mut derived = ReferenceCounter::clone(&original);
        ReferenceCounter::make_mut(&mut derived).push(3);

        assert_eq!(*original, vec![1, 2]);
        assert_eq!(*derived, vec![1, 2, 3]);
        assert_eq!(ReferenceCounter::strong_count(&original), 1);
    }
}
