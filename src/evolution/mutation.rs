//! Single-gene mutation expansion.
//!
//! Mutation is exhaustive rather than stochastic: every individual spawns
//! one variant per genome position, each differing from the original in
//! exactly that bit.

use crate::base::Individual;
use crate::fitness::{Evaluator, FitnessError};
use crate::simulation::Population;

/// Generate all single-bit-flip variants of an individual.
///
/// Returns one new individual per genome position, in position order, each
/// carrying the parent's gender and a fresh genome copy with that single
/// bit inverted. The parent itself is never included.
pub fn flip_variants(individual: &Individual) -> Vec<Individual> {
    let bits = individual.genome().bits();
    let mut variants = Vec::with_capacity(bits.len());
    for position in 0..bits.len() {
        let mut variant = bits.to_vec();
        variant[position] = !variant[position];
        variants.push(Individual::new(
            variant.into_iter().collect(),
            individual.gender(),
        ));
    }
    variants
}

/// Expand a population by single-gene mutation.
///
/// Takes a snapshot of the population first, collects every flip variant
/// of every snapshotted individual (N variants each), then ranked-inserts
/// them one at a time. Variants admitted during this call are never
/// mutated again within the same call.
///
/// # Errors
/// Returns `FitnessError::InvalidGenomeLength` if any genome cannot be
/// decoded; insertions made before the failure remain in place.
pub fn proliferate(
    population: &mut Population,
    evaluator: &Evaluator,
) -> Result<(), FitnessError> {
    let snapshot = population.snapshot();
    let mut variants = Vec::with_capacity(snapshot.len() * evaluator.genome_length());
    for individual in &snapshot {
        variants.extend(flip_variants(individual));
    }
    for variant in variants {
        population.insert_ranked(variant, evaluator)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Gender, Genome};
    use crate::fitness::ZoneMap;

    fn test_evaluator() -> Evaluator {
        let zone_map = ZoneMap::new(
            vec!["alpha".to_string(), "beta".to_string()],
            vec![0, 1, 0, 1],
        )
        .unwrap();
        Evaluator::new(zone_map, Genome::parse("1111").unwrap()).unwrap()
    }

    #[test]
    fn test_flip_variants_one_bit_each() {
        let parent = Individual::new(Genome::parse("0000").unwrap(), Gender::F);
        let variants = flip_variants(&parent);

        assert_eq!(variants.len(), 4);
        for (position, variant) in variants.iter().enumerate() {
            assert_eq!(variant.gender(), Gender::F);
            assert_eq!(variant.genome().hamming_distance(parent.genome()), 1);
            assert_eq!(variant.genome().get(position), Some(true));
        }
    }

    #[test]
    fn test_proliferate_counts() {
        let evaluator = test_evaluator();
        let mut population = Population::new(64);
        population
            .insert_ranked(
                Individual::new(Genome::parse("0000").unwrap(), Gender::M),
                &evaluator,
            )
            .unwrap();
        population
            .insert_ranked(
                Individual::new(Genome::parse("1111").unwrap(), Gender::F),
                &evaluator,
            )
            .unwrap();

        proliferate(&mut population, &evaluator).unwrap();

        // 2 originals + 2 * 4 variants, all admitted under a large limit.
        assert_eq!(population.len(), 10);
    }

    #[test]
    fn test_proliferate_respects_limit() {
        let evaluator = test_evaluator();
        let mut population = Population::new(3);
        population
            .insert_ranked(
                Individual::new(Genome::parse("0000").unwrap(), Gender::M),
                &evaluator,
            )
            .unwrap();

        proliferate(&mut population, &evaluator).unwrap();
        assert_eq!(population.len(), 3);
    }

    #[test]
    fn test_proliferate_mutates_snapshot_only() {
        // With a single parent, exactly N variants are produced; admitted
        // variants must not themselves proliferate within the same call.
        let evaluator = test_evaluator();
        let mut population = Population::new(64);
        population
            .insert_ranked(
                Individual::new(Genome::parse("0000").unwrap(), Gender::M),
                &evaluator,
            )
            .unwrap();

        proliferate(&mut population, &evaluator).unwrap();
        assert_eq!(population.len(), 5);
    }
}
