//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use wugsim::prelude::*;
//!
//! let evaluator = classic_evaluator();
//! let mut population = Population::new(64);
//! let wug = Individual::new(evaluator.reference().clone(), Gender::M);
//! population.insert_ranked(wug, &evaluator).unwrap();
//! ```

pub use crate::base::{Gender, Genome, Individual, InvalidSymbol};
pub use crate::evolution::{
    breed, children, flip_variants, proliferate, BreedError, MatingRules,
    RecombinationError, UnmatchedPolicy,
};
pub use crate::fitness::{Evaluator, FitnessError, Phenotype, Superiority, ZoneMap, ZoneMapError};
pub use crate::simulation::{
    classic_evaluator, classic_reference, classic_zone_map, Population, Ranked, ReportEntry,
    Simulation, SimulationError, SimulationParams,
};
