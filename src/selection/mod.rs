//! # Selection
//!
//! Survivor selection for the estimator's generational transition. A sorted
//! generation is trimmed to its middle fitness band, the band is refilled by
//! breeding, and the next generation is taken as a centered window over a pool
//! built from both.
pub mod centered;

pub use centered::{
    candidate_pool, centered_window, compare_fitness, middle_band, skip_count, sort_by_fitness,
    ScoredPhenotype,
};
