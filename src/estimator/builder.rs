//! # QuadratureEstimatorBuilder
//!
//! Fluent construction of a `QuadratureEstimator`. The integrand and interval
//! are required; the random number generator and log level fall back to an
//! entropy-seeded generator and `LogLevel::None`.

use crate::{
    error::{OptionExt, QuadratureError, Result},
    integrand::Integrand,
    interval::Interval,
    rng::RandomNumberGenerator,
};

use super::{options::LogLevel, QuadratureEstimator};

/// Builder for `QuadratureEstimator`.
///
/// # Example
///
/// ```rust
/// use evoquad::estimator::QuadratureEstimator;
///
/// let mut estimator = QuadratureEstimator::builder()
///     .with_integrand(|x: f64| x * x)
///     .with_interval(0.0, 3.0)
///     .with_seed(42)
///     .build()
///     .unwrap();
///
/// estimator.generate_initial_population(30, 40).unwrap();
/// let integral = estimator.integral().unwrap();
/// assert!(integral > 0.0 && integral < 27.0);
/// ```
pub struct QuadratureEstimatorBuilder<F>
where
    F: Integrand,
{
    integrand: Option<F>,
    bounds: Option<(f64, f64)>,
    rng: Option<RandomNumberGenerator>,
    log_level: Option<LogLevel>,
}

impl<F> QuadratureEstimatorBuilder<F>
where
    F: Integrand,
{
    pub fn new() -> Self {
        Self {
            integrand: None,
            bounds: None,
            rng: None,
            log_level: None,
        }
    }

    pub fn with_integrand(mut self, integrand: F) -> Self {
        self.integrand = Some(integrand);
        self
    }

    pub fn with_interval(mut self, a: f64, b: f64) -> Self {
        self.bounds = Some((a, b));
        self
    }

    pub fn with_rng(mut self, rng: RandomNumberGenerator) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(RandomNumberGenerator::from_seed(seed))
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = Some(log_level);
        self
    }

    /// Builds an unseeded estimator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the integrand or interval is missing, or a
    /// bound is NaN or infinite. Without an explicit generator the estimator is
    /// seeded from system entropy.
    pub fn build(self) -> Result<QuadratureEstimator<F>> {
        let integrand = self.integrand.ok_or_else_quadrature(|| {
            QuadratureError::InvalidArgument("Integrand not specified".to_string())
        })?;

        let (a, b) = self.bounds.ok_or_else_quadrature(|| {
            QuadratureError::InvalidArgument("Interval not specified".to_string())
        })?;

        Ok(QuadratureEstimator::from_parts(
            integrand,
            Interval::new(a, b)?,
            self.rng.unwrap_or_default(),
            self.log_level.unwrap_or_default(),
        ))
    }
}

impl<F> Default for QuadratureEstimatorBuilder<F>
where
    F: Integrand,
{
    fn default() -> Self {
        Self::new()
    }
}
