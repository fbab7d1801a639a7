//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape: an `Optional::None` stays `None`, an `Either::Left` stays `Left`,
//! a `Pair` keeps its first component.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//! use fpkit::typeclass::Functor;
//!
//! let transformed: Optional<String> = Optional::Some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Optional::Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;

/// A type class for single-hole containers that can be mapped over.
///
/// Implementations hold at most one value in the hole, so `FnOnce` suffices.
/// Multi-element containers ([`Map`](crate::persistent::Map),
/// [`Set`](crate::persistent::Set)) expose inherent `map` methods instead.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the held value, consuming the container.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the held value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}
