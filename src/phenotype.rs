//! # Phenotype
//!
//! A `Phenotype` is one candidate discretization of the integration domain: an
//! ordered list of sample points, one drawn from each equal-width sub-interval
//! of `[a, b]` when the phenotype is seeded. Recombination keeps point
//! positions, so the i-th point of every descendant still comes from the i-th
//! sub-interval.
//!
//! ## Example
//!
//! ```rust
//! use evoquad::interval::Interval;
//! use evoquad::phenotype::Phenotype;
//! use evoquad::rng::RandomNumberGenerator;
//!
//! let interval = Interval::new(0.0, 10.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//! let pheno = Phenotype::stratified(&interval, 5, &mut rng);
//!
//! assert_eq!(pheno.len(), 5);
//! for (i, &x) in pheno.points().iter().enumerate() {
//!     assert!(x >= 2.0 * i as f64 && x < 2.0 * (i + 1) as f64);
//! }
//! ```

use crate::interval::Interval;
use crate::rng::RandomNumberGenerator;

/// An ordered sequence of sample points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Phenotype {
    points: Vec<f64>,
}

/// A generation of phenotypes.
pub type Population = Vec<Phenotype>;

impl Phenotype {
    pub fn new(points: Vec<f64>) -> Self {
        Self { points }
    }

    /// Draws one point per sub-interval: `x_i = (i + u) * w + a`, `u` uniform in `[0, 1)`.
    ///
    /// `w` is the signed sub-interval width, so a reversed interval yields points
    /// running from `a` down toward `b`.
    pub fn stratified(interval: &Interval, parts: usize, rng: &mut RandomNumberGenerator) -> Self {
        let width = interval.part_width(parts);
        let jitter = rng.fetch_uniform(0.0, 1.0, parts);
        let points = jitter
            .into_iter()
            .enumerate()
            .map(|(i, u)| (i as f64 + u) * width + interval.a())
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `self[..split] ++ other[split..]`.
    ///
    /// Callers guarantee equal lengths and `split <= len`.
    pub(crate) fn splice(&self, other: &Self, split: usize) -> Self {
        let mut points = Vec::with_capacity(other.points.len());
        points.extend_from_slice(&self.points[..split]);
        points.extend_from_slice(&other.points[split..]);
        Self { points }
    }
}

impl From<Vec<f64>> for Phenotype {
    fn from(points: Vec<f64>) -> Self {
        Self::new(points)
    }
}
