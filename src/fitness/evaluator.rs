use super::{Phenotype, ZoneMap};
use crate::base::{Genome, Individual};
use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// Per-trait equality-to-reference vector.
///
/// One entry per trait in trait-name order; `true` means the individual's
/// substring for that trait exactly equals the reference's substring.
/// Despite the "superiority" name, equality is what is tested.
///
/// The derived `Ord` is lexicographic over the entries (`false < true`),
/// matching tuple comparison in the population report ordering.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Superiority(Vec<bool>);

impl Superiority {
    /// Number of traits covered.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in trait order.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// Count of superior (reference-equal) traits.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&s| s).count()
    }

    /// Count of positions where this vector and `other` agree,
    /// compared element by element.
    pub fn agreement(&self, other: &Superiority) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}

impl From<Vec<bool>> for Superiority {
    fn from(entries: Vec<bool>) -> Self {
        Self(entries)
    }
}

impl fmt::Display for Superiority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &entry in &self.0 {
            write!(f, "{}", if entry { 'S' } else { '-' })?;
        }
        Ok(())
    }
}

/// Fitness evaluator: the read-only reference configuration.
///
/// Owns the zone map, the reference ("superwug") genome, and its decoded
/// phenotype. All decode/compare/rank operations are pure functions of
/// their inputs and this configuration; the evaluator holds no mutable
/// state.
#[derive(Debug, Clone)]
pub struct Evaluator {
    zone_map: ZoneMap,
    reference: Genome,
    reference_phenotype: Phenotype,
}

impl Evaluator {
    /// Create an evaluator from a zone map and reference genome.
    ///
    /// The reference phenotype is decoded once here and reused by every
    /// subsequent comparison.
    ///
    /// # Errors
    /// Returns `FitnessError::InvalidGenomeLength` if the reference genome
    /// does not match the zone map's length.
    pub fn new(zone_map: ZoneMap, reference: Genome) -> Result<Self, FitnessError> {
        let reference_phenotype = zone_map.decode(&reference)?;
        Ok(Self {
            zone_map,
            reference,
            reference_phenotype,
        })
    }

    /// Get the zone map.
    #[inline]
    pub fn zone_map(&self) -> &ZoneMap {
        &self.zone_map
    }

    /// Get the reference genome.
    #[inline]
    pub fn reference(&self) -> &Genome {
        &self.reference
    }

    /// Get the decoded reference phenotype.
    #[inline]
    pub fn reference_phenotype(&self) -> &Phenotype {
        &self.reference_phenotype
    }

    /// Configured genome length.
    #[inline(always)]
    pub fn genome_length(&self) -> usize {
        self.zone_map.genome_length()
    }

    /// Number of traits (the maximum attainable rank).
    #[inline(always)]
    pub fn trait_count(&self) -> usize {
        self.zone_map.trait_count()
    }

    /// Decode a genome with this evaluator's zone map.
    pub fn decode(&self, genome: &Genome) -> Result<Phenotype, FitnessError> {
        self.zone_map.decode(genome)
    }

    /// Compare a trial phenotype against a basis, trait by trait.
    ///
    /// An entry is `true` iff the trait's substring is identical between
    /// trial and basis.
    pub fn compare(trial: &Phenotype, basis: &Phenotype) -> Superiority {
        trial
            .values()
            .iter()
            .zip(basis.values().iter())
            .map(|(t, b)| t == b)
            .collect::<Vec<bool>>()
            .into()
    }

    /// Decode a genome and compare it against the reference phenotype.
    pub fn superiority(&self, genome: &Genome) -> Result<Superiority, FitnessError> {
        let trial = self.zone_map.decode(genome)?;
        Ok(Self::compare(&trial, &self.reference_phenotype))
    }

    /// Rank of an individual: the count of reference-equal traits.
    ///
    /// Always in `[0, trait_count]`.
    pub fn rank(&self, individual: &Individual) -> Result<usize, FitnessError> {
        Ok(self.superiority(individual.genome())?.count())
    }
}

/// Error type for fitness evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitnessError {
    /// Genome length did not match the configured zone-map length.
    InvalidGenomeLength { expected: usize, actual: usize },
}

impl fmt::Display for FitnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGenomeLength { expected, actual } => write!(
                f,
                "Invalid genome length: expected {expected} bits, got {actual}"
            ),
        }
    }
}

impl error::Error for FitnessError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Gender;

    fn test_evaluator() -> Evaluator {
        let zone_map = ZoneMap::new(
            vec!["alpha".to_string(), "beta".to_string()],
            vec![0, 1, 0, 1],
        )
        .unwrap();
        Evaluator::new(zone_map, Genome::parse("1100").unwrap()).unwrap()
    }

    #[test]
    fn test_reference_ranks_all_traits() {
        let evaluator = test_evaluator();
        let reference = Individual::new(evaluator.reference().clone(), Gender::M);
        assert_eq!(
            evaluator.rank(&reference).unwrap(),
            evaluator.trait_count()
        );
    }

    #[test]
    fn test_superiority_per_trait() {
        let evaluator = test_evaluator();
        // Reference is 1100: alpha = "10", beta = "10".
        // Trial 1000: alpha = "10" (equal), beta = "00" (different).
        let vector = evaluator
            .superiority(&Genome::parse("1000").unwrap())
            .unwrap();
        assert_eq!(vector.as_slice(), &[true, false]);
        assert_eq!(vector.count(), 1);
    }

    #[test]
    fn test_rank_is_bounded() {
        let evaluator = test_evaluator();
        for bits in 0u8..16 {
            let genome: Genome = (0..4).map(|i| bits & (1 << i) != 0).collect();
            let rank = evaluator
                .rank(&Individual::new(genome, Gender::F))
                .unwrap();
            assert!(rank <= evaluator.trait_count());
        }
    }

    #[test]
    fn test_rank_rejects_wrong_length() {
        let evaluator = test_evaluator();
        let short = Individual::new(Genome::parse("11").unwrap(), Gender::M);
        assert_eq!(
            evaluator.rank(&short).unwrap_err(),
            FitnessError::InvalidGenomeLength {
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_agreement_counts_matching_entries() {
        let a: Superiority = vec![true, false, true].into();
        let b: Superiority = vec![true, true, true].into();
        assert_eq!(a.agreement(&b), 2);
        assert_eq!(a.agreement(&a), 3);
    }

    #[test]
    fn test_superiority_ordering() {
        let low: Superiority = vec![false, true, true].into();
        let high: Superiority = vec![true, false, false].into();
        assert!(high > low);
    }
}
