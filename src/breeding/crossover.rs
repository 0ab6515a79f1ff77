//! # Single-point crossover
//!
//! Two parents of equal length `n` are cut at one split index `k` drawn
//! uniformly from `0..=n-1`. The children swap tails:
//! `A[..k] ++ B[k..]` and `B[..k] ++ A[k..]`. A split at zero simply swaps the
//! parents. No point value is altered, so the children's combined points are
//! exactly the parents' combined points.

use crate::{
    error::{QuadratureError, Result},
    phenotype::Phenotype,
    rng::RandomNumberGenerator,
};

/// Recombines two parents into two children at a random split index.
///
/// ## Errors
///
/// Returns `PreconditionViolated` if the parents differ in length or are empty.
pub fn single_point_crossover(
    first: &Phenotype,
    second: &Phenotype,
    rng: &mut RandomNumberGenerator,
) -> Result<(Phenotype, Phenotype)> {
    if first.len() != second.len() {
        return Err(QuadratureError::PreconditionViolated(format!(
            "Cannot recombine phenotypes of different lengths ({} and {})",
            first.len(),
            second.len()
        )));
    }

    if first.is_empty() {
        return Err(QuadratureError::PreconditionViolated(
            "Cannot recombine empty phenotypes".to_string(),
        ));
    }

    let split = rng.pick_index(first.len() - 1);
    Ok(crossover_at(first, second, split))
}

pub(crate) fn crossover_at(
    first: &Phenotype,
    second: &Phenotype,
    split: usize,
) -> (Phenotype, Phenotype) {
    (first.splice(second, split), second.splice(first, split))
}
