//! Tracing support for containers.
//!
//! This module provides [`TraceExt`], the logged sibling of `inspect`:
//! `trace(label)` emits a `DEBUG` event carrying the label and the `Debug`
//! rendering of the value, then hands the value back unchanged.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use std::fmt;

/// Extension trait for emitting a debug event from inside a combinator chain.
///
/// This trait is only available when the `tracing` feature is enabled.
/// It is implemented for every container in the crate.
///
/// # Example
///
/// ```rust,ignore
/// use fpkit::control::{Optional, TraceExt};
///
/// let total = Optional::Some(20)
///     .trace("loaded")
///     .map(|x| x + 1)
///     .trace("incremented");
/// ```
pub trait TraceExt: fmt::Debug + Sized {
    /// Emits a `DEBUG` event with `label` and this value, then returns it.
    #[must_use]
    fn trace(self, label: &str) -> Self {
        tracing::debug!(label, value = ?self, "trace");
        self
    }
}

impl<T: fmt::Debug> TraceExt for super::Optional<T> {}

impl<L: fmt::Debug, R: fmt::Debug> TraceExt for super::Either<L, R> {}
