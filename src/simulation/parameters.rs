//! Simulation parameters and the classic configuration preset.

use crate::base::Genome;
use crate::fitness::{Evaluator, ZoneMap};
use serde::{Deserialize, Serialize};

/// Top-level knobs for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Population capacity; the lowest-ranked individual is evicted when
    /// an insertion exceeds it
    pub limit: usize,
    /// Number of randomly seeded individuals at generation zero
    pub population_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// RNG seed for initial-population seeding; `None` draws one from the
    /// system RNG
    pub seed: Option<u64>,
}

impl SimulationParams {
    /// Create parameters with the default capacity limit.
    pub fn new(population_size: usize, generations: usize, seed: Option<u64>) -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            population_size,
            generations,
            seed,
        }
    }

    /// Override the population capacity.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            population_size: 16,
            generations: 10,
            seed: None,
        }
    }
}

/// Default population capacity.
pub const DEFAULT_LIMIT: usize = 64;

/// Genome length of the classic configuration.
pub const CLASSIC_GENOME_LENGTH: usize = 16;

/// Trait names of the classic configuration, in order.
pub const CLASSIC_TRAITS: [&str; 4] = ["intelligence", "beauty", "strength", "speed"];

/// The classic 16-position zone table: one trait index per genome position.
pub const CLASSIC_ZONES: [usize; CLASSIC_GENOME_LENGTH] =
    [2, 1, 2, 3, 3, 1, 3, 3, 0, 0, 2, 2, 0, 1, 0, 1];

/// The classic reference ("superwug") genome.
pub const CLASSIC_REFERENCE: &str = "1101100000001000";

/// Build the classic zone map.
pub fn classic_zone_map() -> ZoneMap {
    ZoneMap::new(
        CLASSIC_TRAITS.map(String::from).to_vec(),
        CLASSIC_ZONES.to_vec(),
    )
    .expect("classic zone table is valid")
}

/// Build the classic reference genome.
pub fn classic_reference() -> Genome {
    Genome::parse(CLASSIC_REFERENCE).expect("classic reference genome is valid")
}

/// Build an evaluator for the classic configuration.
pub fn classic_evaluator() -> Evaluator {
    Evaluator::new(classic_zone_map(), classic_reference())
        .expect("classic reference matches the classic zone table")
}
