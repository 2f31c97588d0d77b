use super::Genome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender of an individual.
///
/// Variant order matters: `F < M` reproduces the string comparison used by
/// the population tie-break, where "F" sorts before "M".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Gender {
    F,
    M,
}

impl Gender {
    /// Get the opposite gender.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Gender::F => Gender::M,
            Gender::M => Gender::F,
        }
    }

    /// Single-letter symbol ('M' or 'F').
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Gender::F => 'F',
            Gender::M => 'M',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A member of a population: a genome paired with a gender.
///
/// Two individuals compare equal only when both genome and gender match.
/// Identical pairs may coexist in a population; they are never deduplicated.
/// The derived `Ord` compares genome first, then gender, which together with
/// rank forms the deterministic total order used for ranked insertion.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Individual {
    genome: Genome,
    gender: Gender,
}

impl Individual {
    /// Create a new individual.
    pub fn new(genome: Genome, gender: Gender) -> Self {
        Self { genome, gender }
    }

    /// Get the genome.
    #[inline]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Get the gender.
    #[inline]
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Reassign the gender, keeping the genome.
    #[inline]
    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.genome, self.gender)
    }
}
