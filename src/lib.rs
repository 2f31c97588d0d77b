//! Wugsim: a library for simulating directed evolution of fixed-length
//! binary genomes.
//!
//! This library provides the population-management and breeding engine for
//! evolving a population of "wugs" toward an ideal reference genome (the
//! "superwug") through exhaustive single-gene mutation, bounded ranked
//! selection, suitability-scored pairing, and half-splice sexual
//! recombination.

pub mod base;
pub mod evolution;
pub mod fitness;
pub mod simulation;

pub mod prelude;

// Re-export commonly used types for convenient external access.
//
// These types form the public, stable surface that most consumers of the
// library will use when ranking genomes or running breeding rounds.
// Re-exporting them here makes them available as `wugsim::Genome`,
// `wugsim::Population`, etc.
pub use base::{Gender, Genome, Individual};
pub use fitness::{Evaluator, Phenotype, Superiority, ZoneMap};
pub use simulation::Population;
