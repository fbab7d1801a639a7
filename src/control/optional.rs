//! Optional type - a value that may be absent.
//!
//! This module provides the `Optional<T>` type, which is either `Some(T)`
//! or `None`. It carries the full combinator algebra of a nullable value:
//! querying, total and partial extraction, mapping, monadic `bind`,
//! boolean-style combination (`and`, `or`, `xor`) and flattening.
//!
//! `Optional` converts freely to and from [`std::option::Option`]; it exists
//! as its own type so the container library can give it a stable textual
//! form (`"Some 1"`, `"None"`) and a uniform API shared with [`Either`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Optional;
//!
//! let present = Optional::Some(2);
//! let absent: Optional<i32> = Optional::None;
//!
//! assert_eq!(present.map(|x| x * 10).unwrap_or(0), 20);
//! assert_eq!(absent.map(|x| x * 10).unwrap_or(0), 0);
//!
//! // Exactly one side present
//! assert_eq!(Optional::Some(2).xor(Optional::Some(1)), Optional::None);
//! assert_eq!(Optional::None.xor(Optional::Some(1)), Optional::Some(1));
//!
//! assert_eq!(format!("{}", present), "Some 2");
//! assert_eq!(format!("{}", absent), "None");
//! ```

use std::fmt;

use super::{Either, VariantError};

/// A value that is either present (`Some`) or absent (`None`).
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Optional;
///
/// let value = Optional::Some("fp").map(str::len);
/// assert!(value.contains(&2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// No value.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Optional<T> {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert!(Optional::Some(1).is_some());
    /// assert!(!Optional::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// The predicate is not evaluated on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert!(Optional::Some(4).is_some_and(|x| x % 2 == 0));
    /// assert!(!Optional::Some(3).is_some_and(|x| x % 2 == 0));
    /// assert!(!Optional::<i32>::None.is_some_and(|_| true));
    /// ```
    #[inline]
    pub fn is_some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Borrowing
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns an iterator over the possibly contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(3).iter().count(), 1);
    /// assert_eq!(Optional::<i32>::None.iter().count(), 0);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, consuming the optional.
    ///
    /// # Panics
    ///
    /// Panics with `"Unwrap called on None"` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(7).unwrap(), 7);
    /// ```
    ///
    /// ```rust,should_panic
    /// use fpkit::control::Optional;
    ///
    /// Optional::<i32>::None.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", VariantError::UNWRAP_ON_NONE),
        }
    }

    /// Returns the contained value, panicking with `message` if this is `None`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the contained value or a [`VariantError`] if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UNWRAP_ON_NONE`] on `None`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, VariantError> {
        self.ok_or(VariantError::UNWRAP_ON_NONE)
    }

    /// Returns the contained value or `fallback`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(1).unwrap_or(9), 1);
    /// assert_eq!(Optional::None.unwrap_or(9), 9);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or computes one from `fallback`.
    ///
    /// The fallback is only called on `None`.
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let length = Optional::Some("hello").map(str::len);
    /// assert_eq!(length, Optional::Some(5));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Chains a computation that may itself produce no value.
    ///
    /// `None` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Optional::Some(x / 2) } else { Optional::None };
    ///
    /// assert_eq!(Optional::Some(8).bind(half).bind(half), Optional::Some(2));
    /// assert_eq!(Optional::Some(6).bind(half).bind(half), Optional::None);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Applies `function` to the contained value, or returns `fallback`.
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => fallback,
        }
    }

    /// Applies `function` to the contained value, or computes a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let render = |o: Optional<i32>| o.map_or_else(|| "nothing".to_string(), |x| x.to_string());
    /// assert_eq!(render(Optional::Some(3)), "3");
    /// assert_eq!(render(Optional::None), "nothing");
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => fallback(),
        }
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Returns `other` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `fallback`.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => fallback(),
        }
    }

    /// Returns whichever of `self` and `other` is `Some` when exactly one is.
    ///
    /// Returns `None` when both or neither are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(2).xor(Optional::None), Optional::Some(2));
    /// assert_eq!(Optional::<i32>::None.xor(Optional::None), Optional::None);
    /// ```
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs the values of two optionals when both are present.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(value), Optional::Some(other_value)) => Optional::Some((value, other_value)),
            _ => Optional::None,
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Calls `function` with a reference to the value, if any, and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::Some(4).inspect(|x| seen.push(*x)).map(|x| x + 1);
    ///
    /// assert_eq!(value, Optional::Some(5));
    /// assert_eq!(seen, vec![4]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Transforms into a `Result`, mapping `None` to `Err(error)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` when this is `None`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Transforms into a `Result`, computing the error lazily.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` when this is `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error()),
        }
    }

    /// Transforms into an [`Either`], placing the value on the `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::{Either, Optional};
    ///
    /// assert_eq!(Optional::Some(1).into_either("missing"), Either::Right(1));
    /// assert_eq!(Optional::<i32>::None.into_either("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn into_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Some(value) => Either::Right(value),
            Self::None => Either::Left(left),
        }
    }
}

impl<T: PartialEq> Optional<T> {
    /// Returns `true` if this is `Some` and the value equals `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert!(Optional::Some(2).contains(&2));
    /// assert!(!Optional::Some(2).contains(&3));
    /// assert!(!Optional::None.contains(&2));
    /// ```
    #[inline]
    pub fn contains(&self, target: &T) -> bool {
        matches!(self, Self::Some(value) if value == target)
    }
}

impl<T: Default> Optional<T> {
    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Optional;
    ///
    /// assert_eq!(Optional::Some(Optional::Some(1)).flatten(), Optional::Some(1));
    /// assert_eq!(Optional::Some(Optional::<i32>::None).flatten(), Optional::None);
    /// assert_eq!(Optional::<Optional<i32>>::None.flatten(), Optional::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some {value}"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::TypeConstructor for Optional<T> {
    type Inner = T;
    type WithType<B> = Optional<B>;
}

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::Functor for Optional<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(feature = "typeclass")]
impl<T> crate::typeclass::Foldable for Optional<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Some(element) => function(init, element),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Some(element) => function(element, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::Some(2), Optional::Some(1), Optional::None)]
    #[case(Optional::None, Optional::Some(1), Optional::Some(1))]
    #[case(Optional::Some(2), Optional::None, Optional::Some(2))]
    #[case(Optional::None, Optional::None, Optional::None)]
    fn test_xor(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(left.xor(right), expected);
    }

    #[rstest]
    #[case(Optional::Some(1), Optional::Some(3), Optional::Some(1))]
    #[case(Optional::None, Optional::Some(3), Optional::Some(3))]
    #[case(Optional::Some(1), Optional::None, Optional::Some(1))]
    #[case(Optional::None, Optional::None, Optional::None)]
    fn test_or(
        #[case] left: Optional<i32>,
        #[case] right: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(left.or(right), expected);
    }

    #[rstest]
    #[case(Optional::Some(4), 8)]
    #[case(Optional::None, 7)]
    fn test_map_or(#[case] optional: Optional<i32>, #[case] expected: i32) {
        assert_eq!(optional.map_or(7, |x| x * 2), expected);
    }

    #[rstest]
    #[should_panic(expected = "Unwrap called on None")]
    fn test_unwrap_on_none_panics() {
        let absent: Optional<i32> = Optional::None;
        absent.unwrap();
    }

    #[rstest]
    #[should_panic(expected = "configuration must be loaded")]
    fn test_expect_uses_caller_message() {
        let absent: Optional<i32> = Optional::None;
        absent.expect("configuration must be loaded");
    }

    #[rstest]
    fn test_unwrap_or_default_on_none() {
        let absent: Optional<String> = Optional::None;
        assert_eq!(absent.unwrap_or_default(), String::new());
    }

    #[rstest]
    fn test_unwrap_or_else_is_lazy() {
        let mut calls = 0;
        let value = Optional::Some(1).unwrap_or_else(|| {
            calls += 1;
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn test_and_discards_current_value() {
        assert_eq!(Optional::Some(1).and(Optional::Some("x")), Optional::Some("x"));
        assert_eq!(Optional::<i32>::None.and(Optional::Some("x")), Optional::None);
    }

    #[rstest]
    fn test_or_else_only_called_on_none() {
        assert_eq!(Optional::Some(1).or_else(|| Optional::Some(2)), Optional::Some(1));
        assert_eq!(Optional::None.or_else(|| Optional::Some(2)), Optional::Some(2));
    }

    #[rstest]
    fn test_filter() {
        assert_eq!(Optional::Some(4).filter(|x| *x > 3), Optional::Some(4));
        assert_eq!(Optional::Some(2).filter(|x| *x > 3), Optional::None);
        assert_eq!(Optional::<i32>::None.filter(|_| true), Optional::None);
    }

    #[rstest]
    fn test_inspect_skipped_on_none() {
        let mut called = false;
        let _ = Optional::<i32>::None.inspect(|_| called = true);
        assert!(!called);
    }

    #[rstest]
    fn test_std_option_roundtrip() {
        let optional: Optional<i32> = Some(3).into();
        assert_eq!(optional, Optional::Some(3));
        let option: Option<i32> = optional.into();
        assert_eq!(option, Some(3));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Optional::Some("a").to_string(), "Some a");
        assert_eq!(Optional::<&str>::None.to_string(), "None");
    }
}
