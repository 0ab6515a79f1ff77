//! # Error Types
//!
//! This module defines the error type shared by every operation of the
//! estimator. Failures fall into two groups: malformed inputs handed to a
//! constructor or mutator, and operations invoked before the state they need
//! exists.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evoquad::error::{QuadratureError, Result};
//!
//! fn checked_parts(parts: usize) -> Result<usize> {
//!     if parts == 0 {
//!         return Err(QuadratureError::InvalidArgument(
//!             "Number of parts must be positive".to_string(),
//!         ));
//!     }
//!     Ok(parts)
//! }
//!
//! assert!(checked_parts(0).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evoquad::error::{QuadratureError, OptionExt};
//!
//! fn median(values: &[f64]) -> evoquad::error::Result<f64> {
//!     values.get(values.len() / 2).copied().ok_or_else_quadrature(|| {
//!         QuadratureError::PreconditionViolated("No values".to_string())
//!     })
//! }
//!
//! assert!(median(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while estimating an integral.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// Malformed constructor, mutator or population-generation input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation invoked before the state it requires exists.
    #[error("Precondition violated: {0}")]
    PreconditionViolated(String),
}

/// A specialized Result type for estimator operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `QuadratureError`.
pub type Result<T> = std::result::Result<T, QuadratureError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, QuadratureError>` using
    /// a closure to generate the error.
    fn ok_or_else_quadrature<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> QuadratureError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_quadrature<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> QuadratureError,
    {
        self.ok_or_else(err_fn)
    }
}
