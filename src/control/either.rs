//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. By convention `Right` carries
//! the success or primary value and `Left` the alternate or error value, but
//! the type itself is symmetric and puts no requirement on `L`.
//!
//! Most combinators (`map`, `bind`, `and`, `or`, `unwrap`, ...) operate on the
//! `Right` channel and forward a `Left` untouched. Their `_left` siblings work
//! on the other side.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("x").map(|n| n * 2);
//! assert!(failed.is_left());
//!
//! // Using fold to handle both cases
//! let message = failed.fold(|error| format!("error: {error}"), |n| n.to_string());
//! assert!(message.starts_with("error:"));
//! ```

use std::fmt;

use super::{Optional, VariantError};

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` is often used to represent failure, error, or the first alternative
/// - `Right` is often used to represent success or the second alternative
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use fpkit::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// // Map over the right value
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Left("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns `true` if this is a `Left` whose value satisfies `predicate`.
    #[inline]
    pub fn is_left_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match self {
            Self::Left(value) => predicate(value),
            Self::Right(_) => false,
        }
    }

    /// Returns `true` if this is a `Right` whose value satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(3);
    /// assert!(right.is_right_and(|n| *n > 2));
    /// assert!(!right.is_right_and(|n| *n > 5));
    /// ```
    #[inline]
    pub fn is_right_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Either` into an `Optional<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::{Either, Optional};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Optional::Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), Optional::None);
    /// ```
    #[inline]
    pub fn left(self) -> Optional<L> {
        match self {
            Self::Left(value) => Optional::Some(value),
            Self::Right(_) => Optional::None,
        }
    }

    /// Converts the `Either` into an `Optional<R>`, consuming the either.
    #[inline]
    pub fn right(self) -> Optional<R> {
        match self {
            Self::Left(_) => Optional::None,
            Self::Right(value) => Optional::Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Optional<&L> {
        match self {
            Self::Left(value) => Optional::Some(value),
            Self::Right(_) => Optional::None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Optional<&R> {
        match self {
            Self::Left(_) => Optional::None,
            Self::Right(value) => Optional::Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Chains a computation on the right value.
    ///
    /// A `Left` short-circuits without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let positive = |n: i32| if n > 0 { Either::Right(n) } else { Either::Left("not positive") };
    ///
    /// assert_eq!(Either::Right(3).bind(positive), Either::Right(3));
    /// assert_eq!(Either::Right(-3).bind(positive), Either::Left("not positive"));
    /// assert_eq!(Either::<&str, i32>::Left("earlier").bind(positive), Either::Left("earlier"));
    /// ```
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies `function` to the right value, or returns `fallback` on `Left`.
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(_) => fallback,
            Self::Right(value) => function(value),
        }
    }

    /// Applies `function` to the right value, or computes a fallback on `Left`.
    #[inline]
    pub fn map_or_else<U, D, F>(self, fallback: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(_) => fallback(),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Returns `other` if this is `Right`, otherwise forwards the `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let ok: Either<&str, i32> = Either::Right(1);
    /// let failed: Either<&str, i32> = Either::Left("first");
    ///
    /// assert_eq!(ok.and(Either::<&str, char>::Right('x')), Either::Right('x'));
    /// assert_eq!(failed.and(Either::<&str, char>::Right('x')), Either::Left("first"));
    /// ```
    #[inline]
    pub fn and<T>(self, other: Either<L, T>) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(_) => other,
        }
    }

    /// Returns `self` if it is `Right`, otherwise `other`.
    #[inline]
    pub fn or<T>(self, other: Either<T, R>) -> Either<T, R> {
        match self {
            Self::Left(_) => other,
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns `self` if it is `Right`, otherwise calls `fallback` with the left value.
    #[inline]
    pub fn or_else<T, F>(self, fallback: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => fallback(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the Left and Right variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Calls `function` with the right value, if any, and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with the left value, if any, and returns `self`.
    #[inline]
    #[must_use]
    pub fn inspect_left<F>(self, function: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with `"Unwrap called on Left"` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.unwrap(), "hello".to_string());
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> R {
        match self {
            Self::Left(_) => panic!("{}", VariantError::UNWRAP_ON_LEFT),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, panicking with `message` on `Left`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is a `Left` value.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> R {
        match self {
            Self::Left(_) => panic!("{message}"),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or a [`VariantError`].
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UNWRAP_ON_LEFT`] on `Left`.
    #[inline]
    pub fn try_unwrap(self) -> Result<R, VariantError> {
        match self {
            Self::Left(_) => Err(VariantError::UNWRAP_ON_LEFT),
            Self::Right(value) => Ok(value),
        }
    }

    /// Returns the right value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: R) -> R {
        match self {
            Self::Left(_) => fallback,
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or computes one from the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<&str, usize> = Either::Left("four");
    /// assert_eq!(left.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => fallback(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics with `"UnwrapLeft called on Right"` if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("{}", VariantError::UNWRAP_LEFT_ON_RIGHT),
        }
    }

    /// Returns the left value, panicking with `message` on `Right`.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is a `Right` value.
    #[inline]
    #[track_caller]
    pub fn expect_left(self, message: &str) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("{message}"),
        }
    }

    /// Returns the left value or a [`VariantError`].
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UNWRAP_LEFT_ON_RIGHT`] on `Right`.
    #[inline]
    pub fn try_unwrap_left(self) -> Result<L, VariantError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(VariantError::UNWRAP_LEFT_ON_RIGHT),
        }
    }

    /// Returns the left value or `fallback`.
    #[inline]
    pub fn unwrap_left_or(self, fallback: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => fallback,
        }
    }
}

// =============================================================================
// Equality-based Operations
// =============================================================================

impl<L, R: PartialEq> Either<L, R> {
    /// Returns `true` if this is a `Right` equal to `target`.
    #[inline]
    pub fn contains(&self, target: &R) -> bool {
        matches!(self, Self::Right(value) if value == target)
    }
}

impl<L: PartialEq, R> Either<L, R> {
    /// Returns `true` if this is a `Left` equal to `target`.
    #[inline]
    pub fn contains_left(&self, target: &L) -> bool {
        matches!(self, Self::Left(value) if value == target)
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.left_or_default(), String::new());
    /// ```
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.unwrap_or_default(), String::new());
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting on the right channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Either;
    ///
    /// let nested: Either<&str, Either<&str, i32>> = Either::Right(Either::Right(1));
    /// assert_eq!(nested.flatten(), Either::Right(1));
    ///
    /// let inner_left: Either<&str, Either<&str, i32>> = Either::Right(Either::Left("inner"));
    /// assert_eq!(inner_left.flatten(), Either::Left("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Projections over sequences
// =============================================================================

/// Collects the left values of a sequence, preserving their order.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{lefts, Either};
///
/// let items: Vec<Either<&str, i32>> = vec![Either::Left("a"), Either::Right(1), Either::Left("b")];
/// assert_eq!(lefts(items), vec!["a", "b"]);
/// ```
pub fn lefts<L, R, I>(items: I) -> Vec<L>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .filter_map(|item| item.left().into_option())
        .collect()
}

/// Collects the right values of a sequence, preserving their order.
pub fn rights<L, R, I>(items: I) -> Vec<R>
where
    I: IntoIterator<Item = Either<L, R>>,
{
    items
        .into_iter()
        .filter_map(|item| item.right().into_option())
        .collect()
}

// =============================================================================
// Fallible-call Adapters
// =============================================================================

/// Wraps a fallible function so that it returns an `Either` instead of a `Result`.
///
/// `Err(e)` becomes `Left(e)` and `Ok(v)` becomes `Right(v)`. Functions of
/// several arguments are adapted by taking their arguments as a tuple.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{error_to_either, Either};
///
/// let divide = error_to_either(|(dividend, divisor): (i32, i32)| {
///     dividend.checked_div(divisor).ok_or("division by zero")
/// });
///
/// assert_eq!(divide((10, 2)), Either::Right(5));
/// assert_eq!(divide((1, 0)), Either::Left("division by zero"));
/// ```
pub fn error_to_either<A, R, E, F>(function: F) -> impl Fn(A) -> Either<E, R>
where
    F: Fn(A) -> Result<R, E>,
{
    move |arguments| function(arguments).into()
}

/// Runs a fallible computation once and captures its outcome as an `Either`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{try_either, Either};
///
/// let parsed = try_either(|| "12".parse::<u8>());
/// assert_eq!(parsed.map(u32::from), Either::Right(12));
/// ```
pub fn try_either<R, E, F>(function: F) -> Either<E, R>
where
    F: FnOnce() -> Result<R, E>,
{
    function().into()
}

// =============================================================================
// Debug / Display Implementations
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left {value}"),
            Self::Right(value) => write!(formatter, "Right {value}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

#[cfg(feature = "typeclass")]
impl<L: Clone, R> crate::typeclass::Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

#[cfg(feature = "typeclass")]
impl<L, R> crate::typeclass::Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(init, element),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(element) => function(element, init),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}
