//! Error type for partial extraction on the wrong variant.
//!
//! The panicking extractors ([`Optional::unwrap`], [`Either::unwrap`],
//! [`Either::unwrap_left`]) and their `try_` counterparts share the
//! messages defined here, so a panic and a returned error always read the same.
//!
//! [`Optional::unwrap`]: super::Optional::unwrap
//! [`Either::unwrap`]: super::Either::unwrap
//! [`Either::unwrap_left`]: super::Either::unwrap_left

/// Represents an extraction attempted on a variant that carries no such value.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::{Optional, VariantError};
///
/// let error = Optional::<i32>::None.try_unwrap().unwrap_err();
/// assert_eq!(error, VariantError::UNWRAP_ON_NONE);
/// assert_eq!(format!("{}", error), "Unwrap called on None");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantError {
    /// The name of the extraction that was attempted.
    pub operation: &'static str,
    /// The variant that was found instead.
    pub found: &'static str,
}

impl VariantError {
    /// `Unwrap` on an `Optional::None`.
    pub const UNWRAP_ON_NONE: Self = Self {
        operation: "Unwrap",
        found: "None",
    };

    /// `Unwrap` on an `Either::Left`.
    pub const UNWRAP_ON_LEFT: Self = Self {
        operation: "Unwrap",
        found: "Left",
    };

    /// `UnwrapLeft` on an `Either::Right`.
    pub const UNWRAP_LEFT_ON_RIGHT: Self = Self {
        operation: "UnwrapLeft",
        found: "Right",
    };
}

impl std::fmt::Display for VariantError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} called on {}", self.operation, self.found)
    }
}

impl std::error::Error for VariantError {}
