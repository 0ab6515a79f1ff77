//! # EstimatorOptions
//!
//! The `EstimatorOptions` struct bundles the population shape used to seed an
//! estimator together with the logging level applied while it evolves.
//!
//! ## Example
//!
//! ```rust
//! use evoquad::estimator::options::{EstimatorOptions, LogLevel};
//!
//! // Create a new EstimatorOptions instance with custom parameters
//! let custom_options = EstimatorOptions::new(100, 50, LogLevel::Minimal);
//!
//! // Create a new EstimatorOptions instance with default parameters
//! let default_options = EstimatorOptions::default();
//! assert_eq!(default_options.get_number_of_parts(), 100);
//! assert_eq!(default_options.get_number_of_phenotypes(), 50);
//! ```
//!
//! ### `LogLevel`
//!
//! Controls which `tracing` events the estimator emits.
//!
//! - `Verbose`: per-generation summaries plus pool sizes and every scored phenotype.
//! - `Minimal`: one summary event per seeding and per generation.
//! - `None`: no events.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Verbose,
    Minimal,
    #[default]
    None,
}

impl LogLevel {
    pub(crate) fn summaries(&self) -> bool {
        !matches!(self, LogLevel::None)
    }

    pub(crate) fn details(&self) -> bool {
        matches!(self, LogLevel::Verbose)
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorOptions {
    /// Number of equal-width sub-intervals, one sample point each.
    number_of_parts: usize,
    /// Number of phenotypes per generation.
    number_of_phenotypes: usize,
    log_level: LogLevel,
}

impl EstimatorOptions {
    pub fn new(number_of_parts: usize, number_of_phenotypes: usize, log_level: LogLevel) -> Self {
        Self {
            number_of_parts,
            number_of_phenotypes,
            log_level,
        }
    }

    pub fn get_number_of_parts(&self) -> usize {
        self.number_of_parts
    }

    pub fn get_number_of_phenotypes(&self) -> usize {
        self.number_of_phenotypes
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the number of parts.
    pub fn set_number_of_parts(&mut self, number_of_parts: usize) {
        self.number_of_parts = number_of_parts;
    }

    /// Sets the number of phenotypes.
    pub fn set_number_of_phenotypes(&mut self, number_of_phenotypes: usize) {
        self.number_of_phenotypes = number_of_phenotypes;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EstimatorOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evoquad::estimator::options::{EstimatorOptions, LogLevel};
    ///
    /// let options = EstimatorOptions::builder()
    ///     .number_of_parts(20)
    ///     .number_of_phenotypes(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .build();
    ///
    /// assert_eq!(options.get_number_of_parts(), 20);
    /// ```
    pub fn builder() -> EstimatorOptionsBuilder {
        EstimatorOptionsBuilder::default()
    }
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            number_of_parts: 100,
            number_of_phenotypes: 50,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EstimatorOptions`.
#[derive(Debug, Clone, Default)]
pub struct EstimatorOptionsBuilder {
    number_of_parts: Option<usize>,
    number_of_phenotypes: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EstimatorOptionsBuilder {
    /// Sets the number of parts.
    pub fn number_of_parts(mut self, value: usize) -> Self {
        self.number_of_parts = Some(value);
        self
    }

    /// Sets the number of phenotypes.
    pub fn number_of_phenotypes(mut self, value: usize) -> Self {
        self.number_of_phenotypes = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EstimatorOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> EstimatorOptions {
        let defaults = EstimatorOptions::default();
        EstimatorOptions {
            number_of_parts: self.number_of_parts.unwrap_or(defaults.number_of_parts),
            number_of_phenotypes: self
                .number_of_phenotypes
                .unwrap_or(defaults.number_of_phenotypes),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
