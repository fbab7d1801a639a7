//! Immutable ordered pair.
//!
//! [`Pair`] is the return vehicle for operations that produce two related
//! values: a split into two halves, a partition into matching and
//! non-matching parts, or an accumulator together with a transformed output.

use std::fmt;

/// An immutable pair of two values.
///
/// # Examples
///
/// ```rust
/// use fpkit::sequence::Pair;
///
/// let pair = Pair::new("answer", 42);
/// assert_eq!(*pair.first(), "answer");
/// assert_eq!(*pair.second(), 42);
///
/// let (name, value) = pair.swap().map_first(|n| n + 1).swap().into_tuple();
/// assert_eq!((name, value), ("answer", 43));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Consumes the pair, returning the first component.
    #[inline]
    pub fn into_first(self) -> A {
        self.first
    }

    /// Consumes the pair, returning the second component.
    #[inline]
    pub fn into_second(self) -> B {
        self.second
    }

    /// Consumes the pair, returning a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Exchanges the two components.
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Transforms the first component.
    #[inline]
    pub fn map_first<C, F>(self, function: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        Pair::new(function(self.first), self.second)
    }

    /// Transforms the second component.
    #[inline]
    pub fn map_second<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        Pair::new(self.first, function(self.second))
    }

    /// Transforms both components.
    #[inline]
    pub fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        Pair::new(first_function(self.first), second_function(self.second))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

#[cfg(feature = "typeclass")]
impl<A, B> crate::typeclass::TypeConstructor for Pair<A, B> {
    type Inner = B;
    type WithType<C> = Pair<A, C>;
}

#[cfg(feature = "typeclass")]
impl<A: Clone, B> crate::typeclass::Functor for Pair<A, B> {
    #[inline]
    fn fmap<C, F>(self, function: F) -> Pair<A, C>
    where
        F: FnOnce(B) -> C,
    {
        self.map_second(function)
    }

    #[inline]
    fn fmap_ref<C, F>(&self, function: F) -> Pair<A, C>
    where
        F: FnOnce(&B) -> C,
    {
        Pair::new(self.first.clone(), function(&self.second))
    }
}

#[cfg(feature = "tracing")]
impl<A: fmt::Debug, B: fmt::Debug> crate::control::TraceExt for Pair<A, B> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_tuple_conversions() {
        let pair: Pair<i32, &str> = (1, "one").into();
        assert_eq!(pair, Pair::new(1, "one"));
        let tuple: (i32, &str) = pair.into();
        assert_eq!(tuple, (1, "one"));
    }

    #[rstest]
    fn test_bimap() {
        let pair = Pair::new(2, "ab").bimap(|n| n * 10, str::len);
        assert_eq!(pair.into_tuple(), (20, 2));
    }

    #[rstest]
    fn test_display() {
        assert_eq!(Pair::new(1, "x").to_string(), "(1, x)");
    }
}
