//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct provides the random draws the estimator
//! needs: uniform jitter within a sub-interval and uniform indices for parent
//! and split-point selection. It wraps the `rand` crate's `StdRng` so a run can
//! be reproduced from a seed.
//!
//! ## Example
//!
//! ```rust
//! use evoquad::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let jitter = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! assert_eq!(jitter.len(), 5);
//! assert!(jitter.iter().all(|u| (0.0..1.0).contains(u)));
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng`.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `num` random numbers in `[from, to)`.
    ///
    /// An empty or inverted range yields `from` for every draw instead of panicking.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        if from < to {
            uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        } else {
            uniform_numbers.extend(std::iter::repeat(from).take(num));
        }
        uniform_numbers
    }

    /// Picks an index uniformly from `0..=upper`.
    pub fn pick_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..=upper)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
