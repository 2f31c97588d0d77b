//! Genome decoding and fitness ranking.
//!
//! This module decodes genomes into named phenotype traits via a static
//! zone assignment and ranks them against a fixed reference genome.

mod evaluator;
mod phenotype;

pub use evaluator::{Evaluator, FitnessError, Superiority};
pub use phenotype::{Phenotype, ZoneMap, ZoneMapError};
