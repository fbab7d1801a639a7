//! # fpkit
//!
//! Functional containers for Rust: algebraic sum types, a pair type,
//! slice helpers, and copy-on-write hash containers with ordered traversal.
//!
//! ## Overview
//!
//! - **Control**: [`Optional`](control::Optional) and [`Either`](control::Either),
//!   with the full combinator algebra (`bind`, `xor`, `map_or_else`, ...)
//! - **Sequence**: [`Pair`](sequence::Pair) and pure slice utilities
//!   (search, fold, grouping, splitting, comparator-driven sorting)
//! - **Persistent**: copy-on-write [`Map`](persistent::Map) and
//!   [`Set`](persistent::Set); every "mutating" operation returns a new value
//! - **Type Classes**: `Functor` and `Foldable` over the containers above
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Foldable)
//! - `control`: `Optional`, `Either`
//! - `sequence`: `Pair`, slice utilities
//! - `persistent`: `Map`, `Set`
//! - `arc`: share container storage through `Arc` instead of `Rc`
//! - `serde`: serialization support
//! - `tracing`: `trace` combinator emitting debug events
//! - `fxhash` / `ahash`: alternative hashers for `Map` and `Set`
//! - `full`: Enable all features except hasher and `arc` selection
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! let map = Map::from_slice(vec![(1, "foo"), (5, "bar"), (8, "baz")]);
//! let split = map.split(|left, right| left < right, &5);
//!
//! assert_eq!(split.first().to_asc_slice(|l, r| l < r), vec![(1, "foo")]);
//! assert_eq!(split.second().to_asc_slice(|l, r| l < r), vec![(8, "baz")]);
//! assert_eq!(map.lookup(&5), Optional::Some("bar"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "persistent")]
pub mod persistent;
