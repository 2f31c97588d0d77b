//! Evolution module providing mutation, mating, and recombination.
//!
//! This module implements the core evolutionary processes:
//! - **Mutation**: exhaustive single-bit-flip variant expansion
//! - **Mating**: gender eligibility, suitability scoring, pairing rounds
//! - **Recombination**: half-splice offspring construction

pub mod mating;
pub mod mutation;
pub mod recombination;

pub use mating::{breed, BreedError, MatingRules, UnmatchedPolicy};
pub use mutation::{flip_variants, proliferate};
pub use recombination::{children, RecombinationError};
