//! Type classes for functional programming.
//!
//! This module provides the type class traits implemented by the crate's
//! containers:
//!
//! - [`TypeConstructor`]: Higher-Kinded Type emulation through GATs
//! - [`Functor`]: mapping over a single-hole container
//! - [`Foldable`]: reducing a container to a summary value
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//! use fpkit::typeclass::{Foldable, Functor};
//!
//! let doubled = Optional::Some(21).fmap(|x| x * 2);
//! assert_eq!(doubled.fold_left(0, |accumulator, x| accumulator + x), 42);
//! ```

mod foldable;
mod functor;
mod higher;

pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
