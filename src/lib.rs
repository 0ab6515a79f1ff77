//! Estimates definite integrals of single-variable functions by evolving
//! populations of stratified quadrature-point sets with a genetic algorithm.
//!
//! ```rust
//! use evoquad::estimator::QuadratureEstimator;
//!
//! let mut estimator = QuadratureEstimator::new(|_: f64| 1.0, 0.0, 10.0).unwrap();
//! estimator.generate_initial_population(5, 4).unwrap();
//!
//! assert_eq!(estimator.integral().unwrap(), 10.0);
//!
//! estimator.run_next_step().unwrap();
//! assert_eq!(estimator.current_population().len(), 4);
//! ```
pub mod breeding;
pub mod error;
pub mod estimator;
pub mod integrand;
pub mod interval;
pub mod phenotype;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{OptionExt, QuadratureError, Result};
pub use estimator::{Estimate, EstimatorOptions, LogLevel, QuadratureEstimator};
pub use integrand::Integrand;
pub use phenotype::{Phenotype, Population};
