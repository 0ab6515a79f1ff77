use std::cmp::Ordering;

use crate::phenotype::{Phenotype, Population};

/// A phenotype paired with its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPhenotype {
    pub pheno: Phenotype,
    pub score: f64,
}

/// Ascending order with NaN scores placed after every number.
pub fn compare_fitness(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        _ => Ordering::Less,
    })
}

/// Stable ascending sort by fitness.
pub fn sort_by_fitness(scored: &mut [ScoredPhenotype]) {
    scored.sort_by(|a, b| compare_fitness(a.score, b.score));
}

/// Number of entries trimmed from each end of a sorted generation of `size`.
pub fn skip_count(size: usize) -> usize {
    size / 4
}

/// The middle band `sorted[skip..len - skip]`.
pub fn middle_band(sorted: &[ScoredPhenotype], skip: usize) -> Vec<ScoredPhenotype> {
    sorted[skip..sorted.len() - skip].to_vec()
}

/// Builds the sorted candidate pool `sorted[..skip] ++ sorted[..len - skip] ++ bred`.
///
/// The first two slices overlap: the lowest band appears twice and the highest
/// band not at all. With `skip == 0` both slices are empty and the pool is
/// `bred` alone.
pub fn candidate_pool(
    sorted: &[ScoredPhenotype],
    skip: usize,
    bred: Vec<ScoredPhenotype>,
) -> Vec<ScoredPhenotype> {
    let kept = if skip > 0 { sorted.len() - skip } else { 0 };
    let mut pool = Vec::with_capacity(skip + kept + bred.len());
    pool.extend_from_slice(&sorted[..skip]);
    pool.extend_from_slice(&sorted[..kept]);
    pool.extend(bred);
    sort_by_fitness(&mut pool);
    pool
}

/// Takes `size` phenotypes from the centre of a sorted pool.
///
/// The window starts at `(len - size) / 2`; a pool shorter than `size` is
/// returned whole.
pub fn centered_window(pool: Vec<ScoredPhenotype>, size: usize) -> Population {
    let first = pool.len().saturating_sub(size) / 2;
    pool.into_iter()
        .skip(first)
        .take(size)
        .map(|scored| scored.pheno)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(values: &[f64]) -> Vec<ScoredPhenotype> {
        values
            .iter()
            .map(|&score| ScoredPhenotype {
                pheno: Phenotype::new(vec![score]),
                score,
            })
            .collect()
    }

    fn scores(entries: &[ScoredPhenotype]) -> Vec<f64> {
        entries.iter().map(|s| s.score).collect()
    }

    #[test]
    fn test_sort_is_ascending_with_nan_last() {
        let mut entries = scored(&[0.5, f64::NAN, 0.3, 0.8]);
        sort_by_fitness(&mut entries);

        assert_eq!(&scores(&entries)[..3], &[0.3, 0.5, 0.8]);
        assert!(entries[3].score.is_nan());
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut entries = vec![
            ScoredPhenotype {
                pheno: Phenotype::new(vec![1.0]),
                score: 2.0,
            },
            ScoredPhenotype {
                pheno: Phenotype::new(vec![2.0]),
                score: 1.0,
            },
            ScoredPhenotype {
                pheno: Phenotype::new(vec![3.0]),
                score: 2.0,
            },
        ];
        sort_by_fitness(&mut entries);

        assert_eq!(entries[1].pheno.points(), &[1.0]);
        assert_eq!(entries[2].pheno.points(), &[3.0]);
    }

    #[test]
    fn test_middle_band() {
        let sorted = scored(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        assert_eq!(skip_count(8), 2);
        assert_eq!(skip_count(3), 0);
        assert_eq!(scores(&middle_band(&sorted, 2)), vec![3.0, 4.0, 5.0, 6.0]);
        assert_eq!(scores(&middle_band(&sorted, 0)), scores(&sorted));
    }

    #[test]
    fn test_candidate_pool_duplicates_lowest_band() {
        let sorted = scored(&[1.0, 2.0, 3.0, 4.0]);
        let bred = scored(&[2.5, 2.5]);

        let pool = candidate_pool(&sorted, 1, bred);

        assert_eq!(scores(&pool), vec![1.0, 1.0, 2.0, 2.5, 2.5, 3.0]);
    }

    #[test]
    fn test_candidate_pool_without_skip_is_bred_only() {
        let sorted = scored(&[0.1, 0.2, 0.3]);
        let pool = candidate_pool(&sorted, 0, scored(&[0.3, 0.1, 0.2]));

        assert_eq!(scores(&pool), vec![0.1, 0.2, 0.3]);

        let window = centered_window(pool, 3);
        let values: Vec<f64> = window.iter().map(|p| p.points()[0]).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_candidate_pool_window_with_skip() {
        let sorted = scored(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let bred = scored(&[3.0, 4.0, 5.0, 6.0, 4.5, 5.5, 3.5, 6.5]);

        let pool = candidate_pool(&sorted, 2, bred);
        assert_eq!(pool.len(), 16);

        let window = centered_window(pool, 8);
        let values: Vec<f64> = window.iter().map(|p| p.points()[0]).collect();
        assert_eq!(values, vec![3.0, 3.0, 3.5, 4.0, 4.0, 4.5, 5.0, 5.0]);
    }

    #[test]
    fn test_centered_window() {
        let pool = scored(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let window = centered_window(pool, 4);

        let values: Vec<f64> = window.iter().map(|p| p.points()[0]).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_centered_window_short_pool() {
        let window = centered_window(scored(&[1.0]), 3);
        assert_eq!(window.len(), 1);
    }
}
