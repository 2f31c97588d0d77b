//! Simulation engine for directed-evolution runs.
//!
//! The engine seeds a random initial population and then drives the
//! public breeding operations generation by generation. It adds no
//! semantics of its own: each generation is a proliferate pass followed by
//! a breeding round.

use crate::base::{Gender, Genome, Individual};
use crate::evolution::{breed, proliferate, BreedError, MatingRules};
use crate::fitness::{Evaluator, FitnessError};
use crate::simulation::{Population, ReportEntry, SimulationParams};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::error;
use std::fmt;

/// Main simulation driver.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Reference configuration
    evaluator: Evaluator,
    /// Breeding rules
    rules: MatingRules,
    /// Run parameters
    params: SimulationParams,
    /// Random number generator, used only for initial seeding
    rng: Xoshiro256PlusPlus,
    /// Completed generations
    generation: usize,
}

impl Simulation {
    /// Create a simulation with a randomly seeded initial population.
    pub fn new(
        evaluator: Evaluator,
        rules: MatingRules,
        params: SimulationParams,
    ) -> Result<Self, SimulationError> {
        let mut rng = match params.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        };

        let mut population = Population::new(params.limit);
        for _ in 0..params.population_size {
            let individual = Self::random_individual(evaluator.genome_length(), &mut rng);
            population.insert_ranked(individual, &evaluator)?;
        }

        Ok(Self {
            population,
            evaluator,
            rules,
            params,
            rng,
            generation: 0,
        })
    }

    fn random_individual<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Individual {
        let genome: Genome = (0..length).map(|_| rng.random::<bool>()).collect();
        let gender = if rng.random::<bool>() {
            Gender::M
        } else {
            Gender::F
        };
        Individual::new(genome, gender)
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the evaluator.
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Run one generation: single-gene proliferation, then a breeding
    /// round.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        proliferate(&mut self.population, &self.evaluator)?;
        breed(&mut self.population, &self.evaluator, &self.rules)?;
        self.generation += 1;
        Ok(())
    }

    /// Run the configured number of generations.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        for _ in 0..self.params.generations {
            self.step()?;
        }
        Ok(())
    }

    /// Report the current population grouped by (superiority, gender).
    pub fn report(&self) -> Result<Vec<ReportEntry>, SimulationError> {
        Ok(self.population.report(&self.evaluator)?)
    }

    /// Whether any individual has reached the reference genome's rank.
    pub fn converged(&self) -> bool {
        self.population
            .best()
            .map(|b| b.rank() == self.evaluator.trait_count())
            .unwrap_or(false)
    }
}

/// Error type for simulation-level failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// Fitness evaluation failed (genome/zone-map length mismatch).
    Fitness(FitnessError),

    /// A breeding round failed.
    Breed(BreedError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fitness(err) => write!(f, "{err}"),
            Self::Breed(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Fitness(err) => Some(err),
            Self::Breed(err) => Some(err),
        }
    }
}

impl From<FitnessError> for SimulationError {
    fn from(err: FitnessError) -> Self {
        Self::Fitness(err)
    }
}

impl From<BreedError> for SimulationError {
    fn from(err: BreedError) -> Self {
        Self::Breed(err)
    }
}
