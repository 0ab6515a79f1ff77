//! # Breeding
//!
//! Recombination operators producing offspring phenotypes from parents.
pub mod crossover;

pub use crossover::single_point_crossover;
