//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: a trait cannot
//! abstract over `Optional<_>` or `Map<K, _>` as type constructors. This
//! module uses a GAT to work around that, and is the foundation of
//! [`Functor`](super::Functor) and [`Foldable`](super::Foldable).
//!
//! # Example
//!
//! ```rust
//! use fpkit::control::Optional;
//! use fpkit::typeclass::TypeConstructor;
//!
//! fn reshape<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Optional<String> = reshape(Optional::Some(42));
//! assert_eq!(none_string, Optional::None);
//! ```

/// A type constructor: a type with one "hole" that can be refilled.
///
/// `Inner` is the type currently in the hole, and `WithType<B>` is the same
/// constructor applied to `B`. Multi-parameter containers fix every parameter
/// but the last (`Either<L, _>`, `Pair<A, _>`, `Map<K, _>`).
pub trait TypeConstructor {
    /// The element type currently held.
    type Inner;

    /// The same constructor holding `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
