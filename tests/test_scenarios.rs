use evoquad::{
    error::QuadratureError,
    estimator::{EstimatorOptions, QuadratureEstimator},
    phenotype::Phenotype,
};

#[test]
fn test_constant_function() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|_: f64| 1.0)
        .with_interval(0.0, 10.0)
        .with_seed(1)
        .build()
        .unwrap();

    let population = estimator.generate_initial_population(5, 4).unwrap().to_vec();
    assert_eq!(population.len(), 4);
    assert!(population.iter().all(|pheno| pheno.len() == 5));

    for pheno in &population {
        assert_eq!(estimator.fitness(pheno).unwrap(), 1.0);
    }
    assert_eq!(estimator.integral().unwrap(), 10.0);

    let estimate = estimator.advance(3).unwrap();
    assert_eq!(estimate.generation, 3);
    assert_eq!(estimate.midpoint, 1.0);
    assert_eq!(estimate.value_at_midpoint, 1.0);
    assert_eq!(estimate.integral, 10.0);
}

#[test]
fn test_degenerate_interval() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|x: f64| x * x + 1.0)
        .with_interval(5.0, 5.0)
        .with_seed(2)
        .build()
        .unwrap();

    let population = estimator.generate_initial_population(6, 8).unwrap();
    assert!(population.iter().all(|pheno| pheno.points() == [5.0; 6]));
    assert_eq!(estimator.integral().unwrap(), 0.0);

    for _ in 0..10 {
        estimator.run_next_step().unwrap();
        assert_eq!(estimator.integral().unwrap(), 0.0);
    }
}

#[test]
fn test_reversed_interval_gives_negative_integral() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|_: f64| 2.0)
        .with_interval(4.0, 0.0)
        .with_seed(3)
        .build()
        .unwrap();

    estimator.generate_initial_population(4, 6).unwrap();

    assert_eq!(estimator.integral().unwrap(), -8.0);
    assert_eq!(estimator.advance(2).unwrap().integral, -8.0);
}

#[test]
fn test_single_phenotype_population() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|x: f64| x.exp())
        .with_interval(0.0, 1.0)
        .with_seed(4)
        .build()
        .unwrap();

    estimator.generate_initial_population(10, 1).unwrap();

    for _ in 0..5 {
        let population = estimator.run_next_step().unwrap();
        assert_eq!(population.len(), 1);
        assert_eq!(population[0].len(), 10);
    }
}

#[test]
fn test_small_populations_keep_their_size() {
    for size in 1..=9 {
        let mut estimator = QuadratureEstimator::builder()
            .with_integrand(|x: f64| x.cos())
            .with_interval(-2.0, 2.0)
            .with_seed(size as u64)
            .build()
            .unwrap();

        estimator.generate_initial_population(3, size).unwrap();
        for _ in 0..4 {
            assert_eq!(estimator.run_next_step().unwrap().len(), size);
        }
        assert_eq!(estimator.number_of_phenotypes(), size);
        assert_eq!(estimator.number_of_parts(), 3);
    }
}

fn fitness_spread<F: evoquad::Integrand>(estimator: &QuadratureEstimator<F>) -> f64 {
    let fitness: Vec<f64> = estimator
        .current_population()
        .iter()
        .map(|pheno| estimator.fitness(pheno).unwrap())
        .collect();
    let max = fitness.iter().copied().fold(f64::MIN, f64::max);
    let min = fitness.iter().copied().fold(f64::MAX, f64::min);
    max - min
}

#[test]
fn test_linear_function_converges_to_zero() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|x: f64| x)
        .with_interval(-1.0, 1.0)
        .with_seed(2024)
        .build()
        .unwrap();

    // Two parts leave each phenotype's mean anywhere in [-0.5, 0.5).
    let options = EstimatorOptions::builder()
        .number_of_parts(2)
        .number_of_phenotypes(200)
        .build();
    estimator.seed_population(&options).unwrap();

    let initial_spread = fitness_spread(&estimator);
    assert!(initial_spread > 0.5, "initial spread {}", initial_spread);

    let estimate = estimator.advance(50).unwrap();
    let final_spread = fitness_spread(&estimator);

    assert!(
        final_spread < initial_spread / 100.0,
        "spread {} -> {}",
        initial_spread,
        final_spread
    );
    assert!(estimate.midpoint.abs() < 0.25, "midpoint {}", estimate.midpoint);
    assert!(estimate.integral.abs() < 0.5, "integral {}", estimate.integral);
    assert_eq!(estimator.current_population().len(), 200);
}

#[test]
fn test_estimate_matches_quadratic_integral() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(|x: f64| x * x)
        .with_interval(0.0, 3.0)
        .with_seed(7)
        .build()
        .unwrap();

    estimator.generate_initial_population(100, 50).unwrap();
    let estimate = estimator.advance(20).unwrap();

    // Exact value is 9.
    assert!((estimate.integral - 9.0).abs() < 0.3, "integral {}", estimate.integral);
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        QuadratureEstimator::new(|x: f64| x, 0.0, f64::NAN),
        Err(QuadratureError::InvalidArgument(_))
    ));

    let mut estimator = QuadratureEstimator::new(|x: f64| x, 0.0, 1.0).unwrap();

    assert!(matches!(
        estimator.generate_initial_population(0, 1),
        Err(QuadratureError::InvalidArgument(_))
    ));
    assert!(matches!(
        estimator.run_next_step(),
        Err(QuadratureError::PreconditionViolated(_))
    ));
    assert!(matches!(
        estimator.midpoint(),
        Err(QuadratureError::PreconditionViolated(_))
    ));
    assert!(matches!(
        estimator.fitness(&Phenotype::new(vec![0.5])),
        Err(QuadratureError::PreconditionViolated(_))
    ));
    assert!(matches!(
        estimator.recombine(&Phenotype::new(vec![0.1]), &Phenotype::new(vec![0.1, 0.2])),
        Err(QuadratureError::PreconditionViolated(_))
    ));
}

#[test]
fn test_swapping_integrand_keeps_population() {
    let mut estimator = QuadratureEstimator::builder()
        .with_integrand(Box::new(|_: f64| 1.0) as Box<dyn Fn(f64) -> f64>)
        .with_interval(0.0, 2.0)
        .with_seed(8)
        .build()
        .unwrap();

    estimator.generate_initial_population(4, 4).unwrap();
    let before = estimator.current_population().to_vec();
    assert_eq!(estimator.integral().unwrap(), 2.0);

    estimator.set_integrand(Box::new(|_: f64| 3.0));
    assert_eq!(estimator.current_population(), before.as_slice());
    assert_eq!(estimator.integral().unwrap(), 6.0);
}
