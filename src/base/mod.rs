//! Base types for genome representation.
//!
//! This module provides the foundational types for representing binary
//! genomes and the individuals that carry them.

mod errors;
mod genome;
mod individual;

pub use errors::InvalidSymbol;
pub use genome::Genome;
pub use individual::{Gender, Individual};
