use tracing::{debug, info, trace};

use super::{
    estimate::Estimate,
    options::{EstimatorOptions, LogLevel},
    QuadratureEstimatorBuilder,
};
use crate::{
    breeding::single_point_crossover,
    error::{OptionExt, QuadratureError, Result},
    integrand::Integrand,
    interval::Interval,
    phenotype::{Phenotype, Population},
    rng::RandomNumberGenerator,
    selection::{
        candidate_pool, centered_window, compare_fitness, middle_band, skip_count,
        sort_by_fitness, ScoredPhenotype,
    },
};

/// Estimates `∫ f(x) dx` over `[a, b]` by evolving populations of stratified sample points.
///
/// The caller seeds a population with [`generate_initial_population`], then
/// alternates between reading [`midpoint`]/[`integral`] and requesting the next
/// generation with [`run_next_step`]. The estimator never loops on its own.
///
/// [`generate_initial_population`]: QuadratureEstimator::generate_initial_population
/// [`midpoint`]: QuadratureEstimator::midpoint
/// [`integral`]: QuadratureEstimator::integral
/// [`run_next_step`]: QuadratureEstimator::run_next_step
#[derive(Debug, Clone)]
pub struct QuadratureEstimator<F>
where
    F: Integrand,
{
    integrand: F,
    interval: Interval,
    current_population: Population,
    number_of_parts: usize,
    number_of_phenotypes: usize,
    generation: usize,
    log_level: LogLevel,
    rng: RandomNumberGenerator,
}

impl<F> QuadratureEstimator<F>
where
    F: Integrand,
{
    /// Creates an unseeded estimator for `integrand` over `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either bound is NaN or infinite.
    pub fn new(integrand: F, a: f64, b: f64) -> Result<Self> {
        let interval = Interval::new(a, b)?;
        Ok(Self::from_parts(
            integrand,
            interval,
            RandomNumberGenerator::new(),
            LogLevel::None,
        ))
    }

    pub fn builder() -> QuadratureEstimatorBuilder<F> {
        QuadratureEstimatorBuilder::new()
    }

    pub(crate) fn from_parts(
        integrand: F,
        interval: Interval,
        rng: RandomNumberGenerator,
        log_level: LogLevel,
    ) -> Self {
        Self {
            integrand,
            interval,
            current_population: Vec::new(),
            number_of_parts: 0,
            number_of_phenotypes: 0,
            generation: 0,
            log_level,
            rng,
        }
    }

    /// Seeds and stores a population of `number_of_phenotypes` stratified phenotypes.
    ///
    /// Each phenotype holds one point per equal-width sub-interval, jittered
    /// uniformly inside it. Resets the generation counter.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either count is zero. The stored state is
    /// left untouched in that case.
    pub fn generate_initial_population(
        &mut self,
        number_of_parts: usize,
        number_of_phenotypes: usize,
    ) -> Result<&[Phenotype]> {
        if number_of_parts == 0 {
            return Err(QuadratureError::InvalidArgument(
                "Number of parts must be positive".to_string(),
            ));
        }

        if number_of_phenotypes == 0 {
            return Err(QuadratureError::InvalidArgument(
                "Number of phenotypes must be positive".to_string(),
            ));
        }

        let interval = self.interval;
        let rng = &mut self.rng;
        let population: Population = (0..number_of_phenotypes)
            .map(|_| Phenotype::stratified(&interval, number_of_parts, rng))
            .collect();

        self.number_of_parts = number_of_parts;
        self.number_of_phenotypes = number_of_phenotypes;
        self.current_population = population;
        self.generation = 0;

        if self.log_level.summaries() {
            info!(
                parts = number_of_parts,
                phenotypes = number_of_phenotypes,
                width = interval.width(),
                "Seeded initial population"
            );
        }

        Ok(&self.current_population)
    }

    /// Applies the options' log level, then seeds the population with their counts.
    pub fn seed_population(&mut self, options: &EstimatorOptions) -> Result<&[Phenotype]> {
        self.log_level = options.get_log_level();
        self.generate_initial_population(
            options.get_number_of_parts(),
            options.get_number_of_phenotypes(),
        )
    }

    /// Mean integrand value over the phenotype's points, normalized by the stored part count.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolated` before a population has been seeded.
    pub fn fitness(&self, phenotype: &Phenotype) -> Result<f64> {
        if self.number_of_parts == 0 {
            return Err(QuadratureError::PreconditionViolated(
                "Number of parts is not set; seed a population first".to_string(),
            ));
        }

        let total: f64 = phenotype
            .points()
            .iter()
            .map(|&x| self.integrand.evaluate(x))
            .sum();

        Ok(total / self.number_of_parts as f64)
    }

    /// Single-point crossover of two phenotypes using the estimator's generator.
    pub fn recombine(
        &mut self,
        first: &Phenotype,
        second: &Phenotype,
    ) -> Result<(Phenotype, Phenotype)> {
        single_point_crossover(first, second, &mut self.rng)
    }

    /// Replaces the current population with the next generation and returns it.
    ///
    /// The generation is sorted by ascending fitness and cut to its middle band,
    /// dropping `P / 4` entries from each end. The band is refilled to `P` by
    /// crossing random pairs of its members. The next generation is the centered
    /// window of `P` entries over the sorted pool made of the lowest `P / 4`
    /// entries, the lowest `P - P / 4` entries and the refilled band. Below four
    /// phenotypes nothing is trimmed and the pool is the band alone.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolated` if the population is empty or its size no
    /// longer matches the seeded phenotype count. On error the current
    /// population is kept.
    pub fn run_next_step(&mut self) -> Result<&[Phenotype]> {
        let size = self.current_population.len();

        if size == 0 {
            return Err(QuadratureError::PreconditionViolated(
                "Current population is empty".to_string(),
            ));
        }

        if size != self.number_of_phenotypes {
            return Err(QuadratureError::PreconditionViolated(format!(
                "Population size ({}) doesn't match number of phenotypes ({})",
                size, self.number_of_phenotypes
            )));
        }

        let mut sorted = self
            .current_population
            .iter()
            .map(|pheno| self.score(pheno.clone()))
            .collect::<Result<Vec<_>>>()?;
        sort_by_fitness(&mut sorted);

        if self.log_level.details() {
            for (rank, scored) in sorted.iter().enumerate() {
                trace!(
                    generation = self.generation,
                    rank,
                    score = scored.score,
                    "Scored phenotype"
                );
            }
        }

        let skip = skip_count(size);
        let mut best = middle_band(&sorted, skip);

        while best.len() < size {
            let first = self.rng.pick_index(best.len() - 1);
            let second = self.rng.pick_index(best.len() - 1);
            let (left, right) =
                single_point_crossover(&best[first].pheno, &best[second].pheno, &mut self.rng)?;
            best.push(self.score(left)?);
            best.push(self.score(right)?);
        }

        if self.log_level.details() {
            debug!(
                generation = self.generation,
                skip,
                bred = best.len(),
                "Refilled middle band"
            );
        }

        let pool = candidate_pool(&sorted, skip, best);
        let pool_size = pool.len();
        let next = centered_window(pool, size);

        if self.log_level.details() {
            debug!(generation = self.generation, pool_size, "Selected centered window");
        }

        self.current_population = next;
        self.generation += 1;

        if self.log_level.summaries() {
            let midpoint = self.midpoint()?;
            info!(
                generation = self.generation,
                midpoint,
                integral = self.interval.width() * midpoint,
                "Generation complete"
            );
        }

        Ok(&self.current_population)
    }

    /// Median fitness of the current population (lower middle for even sizes).
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolated` if the population is empty.
    pub fn midpoint(&self) -> Result<f64> {
        let mut fitness = self
            .current_population
            .iter()
            .map(|pheno| self.fitness(pheno))
            .collect::<Result<Vec<f64>>>()?;
        fitness.sort_by(|a, b| compare_fitness(*a, *b));

        fitness.get(fitness.len() / 2).copied().ok_or_else_quadrature(|| {
            QuadratureError::PreconditionViolated("Current population is empty".to_string())
        })
    }

    /// `(b - a) * midpoint`.
    pub fn integral(&self) -> Result<f64> {
        Ok(self.interval.width() * self.midpoint()?)
    }

    /// The midpoint, the integrand at the midpoint and the integral of the current generation.
    pub fn estimate(&self) -> Result<Estimate> {
        let midpoint = self.midpoint()?;
        Ok(Estimate {
            generation: self.generation,
            midpoint,
            value_at_midpoint: self.integrand.evaluate(midpoint),
            integral: self.interval.width() * midpoint,
        })
    }

    /// Runs exactly `generations` transitions and returns the resulting estimate.
    pub fn advance(&mut self, generations: usize) -> Result<Estimate> {
        for _ in 0..generations {
            self.run_next_step()?;
        }
        self.estimate()
    }

    fn score(&self, pheno: Phenotype) -> Result<ScoredPhenotype> {
        let score = self.fitness(&pheno)?;
        Ok(ScoredPhenotype { pheno, score })
    }

    pub fn integrand(&self) -> &F {
        &self.integrand
    }

    pub fn set_integrand(&mut self, integrand: F) {
        self.integrand = integrand;
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn a(&self) -> f64 {
        self.interval.a()
    }

    pub fn b(&self) -> f64 {
        self.interval.b()
    }

    /// Replaces both bounds. Rejects NaN or infinite values.
    pub fn set_interval(&mut self, a: f64, b: f64) -> Result<()> {
        self.interval = Interval::new(a, b)?;
        Ok(())
    }

    pub fn set_a(&mut self, a: f64) -> Result<()> {
        self.set_interval(a, self.interval.b())
    }

    pub fn set_b(&mut self, b: f64) -> Result<()> {
        self.set_interval(self.interval.a(), b)
    }

    pub fn current_population(&self) -> &[Phenotype] {
        &self.current_population
    }

    /// Replaces the current population without touching the stored counts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the phenotypes differ in length.
    pub fn replace_population(&mut self, population: Population) -> Result<()> {
        if let Some(first) = population.first() {
            let expected = first.len();
            if let Some(pheno) = population.iter().find(|p| p.len() != expected) {
                return Err(QuadratureError::InvalidArgument(format!(
                    "All phenotypes must share one length (expected {}, found {})",
                    expected,
                    pheno.len()
                )));
            }
        }

        self.current_population = population;
        Ok(())
    }

    pub fn number_of_parts(&self) -> usize {
        self.number_of_parts
    }

    pub fn number_of_phenotypes(&self) -> usize {
        self.number_of_phenotypes
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }
}
