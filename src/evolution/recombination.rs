//! Sexual recombination: half-splice offspring construction.
//!
//! A parent pair produces a brood of N single-flip variants of the spliced
//! "basic" genome plus two unmutated copies, one of each gender.

use super::mutation::proliferate;
use crate::base::{Gender, Individual};
use crate::fitness::{Evaluator, FitnessError};
use crate::simulation::Population;
use std::error;
use std::fmt;

/// Produce and insert the offspring of a parent pair.
///
/// The basic genome takes positions `[0, N/2)` from `parent1` and
/// `[N/2, N)` from `parent2`. The brood is built in three stages:
///
/// 1. a nursery pool seeded with `(basic, "M")` is proliferated under the
///    population's capacity limit, yielding the N single-flip variants in
///    ranked order, and the unflipped placeholder is removed;
/// 2. gender assignment by brood position: first half "M", second half "F";
/// 3. two unmutated copies of the basic genome appended, one "M", one "F".
///
/// All N + 2 offspring are ranked-inserted into `population` in brood
/// order. Callers are expected to pass the male parent as `parent1`; for
/// same-gender pairings the pairing initiator goes first.
///
/// # Errors
/// - `RecombinationError::IncompatibleParents` if the parents' genome
///   lengths differ.
/// - `RecombinationError::UnexpectedBroodSize` if the nursery did not
///   yield exactly N variants (a capacity limit below N + 1 trims the
///   brood).
/// - `RecombinationError::Fitness` if an offspring genome cannot be
///   decoded during insertion; prior insertions remain in place.
pub fn children(
    population: &mut Population,
    evaluator: &Evaluator,
    parent1: &Individual,
    parent2: &Individual,
) -> Result<(), RecombinationError> {
    if parent1.genome().len() != parent2.genome().len() {
        return Err(RecombinationError::IncompatibleParents {
            first: parent1.genome().len(),
            second: parent2.genome().len(),
        });
    }

    let basic = parent1.genome().splice_half(parent2.genome());
    let length = basic.len();

    let mut nursery = Population::new(population.limit());
    nursery.insert_ranked(Individual::new(basic.clone(), Gender::M), evaluator)?;
    proliferate(&mut nursery, evaluator)?;

    let mut brood = nursery.snapshot();
    if let Some(placeholder) = brood
        .iter()
        .position(|kid| kid.genome() == &basic && kid.gender() == Gender::M)
    {
        brood.remove(placeholder);
    }
    if brood.len() != length {
        return Err(RecombinationError::UnexpectedBroodSize {
            expected: length,
            actual: brood.len(),
        });
    }

    let half = length / 2;
    for (position, kid) in brood.iter_mut().enumerate() {
        kid.set_gender(if position < half { Gender::M } else { Gender::F });
    }

    brood.push(Individual::new(basic.clone(), Gender::M));
    brood.push(Individual::new(basic, Gender::F));

    for kid in brood {
        population.insert_ranked(kid, evaluator)?;
    }
    Ok(())
}

/// Error type for recombination failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecombinationError {
    /// The two parents' genome lengths differ, so no half-splice exists.
    IncompatibleParents { first: usize, second: usize },

    /// The mutation step did not yield exactly one variant per position.
    UnexpectedBroodSize { expected: usize, actual: usize },

    /// An offspring failed fitness evaluation during insertion.
    Fitness(FitnessError),
}

impl fmt::Display for RecombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompatibleParents { first, second } => write!(
                f,
                "Incompatible parent genomes: {first} bits vs {second} bits"
            ),
            Self::UnexpectedBroodSize { expected, actual } => write!(
                f,
                "Unexpected brood size: expected {expected} variants, got {actual}"
            ),
            Self::Fitness(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for RecombinationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Fitness(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FitnessError> for RecombinationError {
    fn from(err: FitnessError) -> Self {
        Self::Fitness(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Genome;
    use crate::simulation::parameters::classic_evaluator;

    fn parent(bits: &str, gender: Gender) -> Individual {
        Individual::new(Genome::parse(bits).unwrap(), gender)
    }

    #[test]
    fn test_children_inserts_n_plus_two() {
        let evaluator = classic_evaluator();
        let mut population = Population::new(1000);
        let father = parent("1101100000001000", Gender::M);
        let mother = parent("0000000011111111", Gender::F);

        children(&mut population, &evaluator, &father, &mother).unwrap();
        assert_eq!(population.len(), 18);
    }

    #[test]
    fn test_children_splices_halves() {
        let evaluator = classic_evaluator();
        let mut population = Population::new(1000);
        let father = parent("1111111100000000", Gender::M);
        let mother = parent("0000000011111111", Gender::F);

        children(&mut population, &evaluator, &father, &mother).unwrap();

        // The two unmutated copies carry the spliced basic genome.
        let basic = "1111111111111111";
        let copies = population
            .iter()
            .filter(|i| i.genome().to_string() == basic)
            .count();
        assert_eq!(copies, 2);
    }

    #[test]
    fn test_identical_parents_brood() {
        // Identical parents: basic genome equals either parent, every
        // mutated child differs from it in exactly one bit, genders split
        // evenly, plus one unmutated copy of each gender.
        let evaluator = classic_evaluator();
        let mut population = Population::new(1000);
        let genome = Genome::parse("1101100000001000").unwrap();
        let father = Individual::new(genome.clone(), Gender::M);
        let mother = Individual::new(genome.clone(), Gender::F);

        children(&mut population, &evaluator, &father, &mother).unwrap();
        assert_eq!(population.len(), 18);

        let mut males = 0;
        let mut females = 0;
        let mut unmutated_m = 0;
        let mut unmutated_f = 0;
        for individual in population.iter() {
            let distance = individual.genome().hamming_distance(&genome);
            match distance {
                0 => match individual.gender() {
                    Gender::M => unmutated_m += 1,
                    Gender::F => unmutated_f += 1,
                },
                1 => match individual.gender() {
                    Gender::M => males += 1,
                    Gender::F => females += 1,
                },
                other => panic!("child at hamming distance {other} from parent"),
            }
        }
        assert_eq!((males, females), (8, 8));
        assert_eq!((unmutated_m, unmutated_f), (1, 1));
    }

    #[test]
    fn test_tiny_limit_trims_brood() {
        // A capacity limit below N + 1 cannot hold the full nursery, so
        // the brood comes up short and the size check fires.
        let evaluator = classic_evaluator();
        let mut population = Population::new(10);
        let father = parent("1101100000001000", Gender::M);
        let mother = parent("0000000011111111", Gender::F);

        let err = children(&mut population, &evaluator, &father, &mother).unwrap_err();
        assert!(matches!(
            err,
            RecombinationError::UnexpectedBroodSize { expected: 16, .. }
        ));
    }

    #[test]
    fn test_children_rejects_mismatched_parents() {
        let evaluator = classic_evaluator();
        let mut population = Population::new(1000);
        let father = parent("1101100000001000", Gender::M);
        let mother = parent("0000", Gender::F);

        let err = children(&mut population, &evaluator, &father, &mother).unwrap_err();
        assert_eq!(
            err,
            RecombinationError::IncompatibleParents {
                first: 16,
                second: 4,
            }
        );
        assert!(population.is_empty());
    }
}
