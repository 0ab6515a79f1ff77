//! # Estimate
//!
//! The `Estimate` struct is a read-only snapshot of what one generation says
//! about the integral: the median fitness, the integrand at that point and
//! the scaled integral.
//!
//! ## Example
//!
//! ```rust
//! use evoquad::estimator::QuadratureEstimator;
//!
//! let mut estimator = QuadratureEstimator::new(|_: f64| 2.0, 0.0, 3.0).unwrap();
//! estimator.generate_initial_population(4, 6).unwrap();
//!
//! let estimate = estimator.estimate().unwrap();
//! assert_eq!(estimate.generation, 0);
//! assert_eq!(estimate.midpoint, 2.0);
//! assert_eq!(estimate.integral, 6.0);
//! ```

/// A snapshot of the estimate derived from one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Number of transitions since the population was seeded.
    pub generation: usize,
    /// Median fitness of the generation, the representative average value of the integrand.
    pub midpoint: f64,
    /// The integrand evaluated at `midpoint`.
    pub value_at_midpoint: f64,
    /// `(b - a) * midpoint`.
    pub integral: f64,
}
