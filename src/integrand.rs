//! # Integrand
//!
//! The `Integrand` trait is the capability the estimator needs from the
//! function being integrated: evaluation at a single real point. Every
//! `Fn(f64) -> f64` implements it, so closures and function items can be
//! passed directly.
//!
//! ## Example
//!
//! ```rust
//! use evoquad::integrand::Integrand;
//!
//! struct Line {
//!     slope: f64,
//! }
//!
//! impl Integrand for Line {
//!     fn evaluate(&self, x: f64) -> f64 {
//!         self.slope * x
//!     }
//! }
//!
//! assert_eq!(Line { slope: 2.0 }.evaluate(3.0), 6.0);
//! assert_eq!((|x: f64| x * x).evaluate(3.0), 9.0);
//! ```

/// A real function of one real variable that the estimator can sample.
pub trait Integrand {
    /// Returns the function value at `x`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}
