//! Algebraic sum types.
//!
//! This module provides the two value types the rest of the crate is built on:
//!
//! - [`Optional`]: a value that may be absent (`Some` / `None`)
//! - [`Either`]: a value that is one of two types (`Left` / `Right`)
//!
//! Extraction on the wrong variant is a programming error: `unwrap` and
//! `expect` panic, while `try_unwrap` reports a [`VariantError`].
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::{Either, Optional};
//!
//! let port: Optional<u16> = Optional::Some(8080);
//! let parsed: Either<String, u16> = port.into_either("no port configured".to_string());
//!
//! assert_eq!(parsed.map(|p| p + 1).unwrap_or(0), 8081);
//! ```

mod either;
mod error;
mod optional;
#[cfg(feature = "tracing")]
mod tracing;

pub use either::{Either, error_to_either, lefts, rights, try_either};
pub use error::VariantError;
pub use optional::Optional;

#[cfg(feature = "tracing")]
pub use self::tracing::TraceExt;
