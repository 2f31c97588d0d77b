//! Mate selection and breeding rounds.
//!
//! Pairing walks a snapshot of the population: the first unpaired
//! individual picks the gender-eligible candidate with the highest
//! suitability score, the pair recombines, and both leave the pool.

use super::recombination::{children, RecombinationError};
use crate::base::{Gender, Individual};
use crate::fitness::{Evaluator, FitnessError};
use crate::simulation::Population;
use serde::{Deserialize, Serialize};
use std::error;
use std::fmt;

/// What to do when an individual has no gender-eligible partner left in
/// the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedPolicy {
    /// Fail the whole breeding round with `BreedError::NoEligiblePartner`.
    Abort,
    /// Drop the unmatched individual from the pool and keep pairing.
    Skip,
}

/// Rules governing one breeding round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatingRules {
    /// When true, same-gender pairings are allowed
    pub hermaphrodite: bool,
    /// Score bonus per coinciding superiority-vector entry
    pub coincidence_bonus: i64,
    /// Behavior when no eligible partner exists for some individual
    pub on_unmatched: UnmatchedPolicy,
}

impl Default for MatingRules {
    fn default() -> Self {
        Self {
            hermaphrodite: false,
            coincidence_bonus: 0,
            on_unmatched: UnmatchedPolicy::Abort,
        }
    }
}

impl MatingRules {
    /// Create rules with the given hermaphrodite flag and coincidence
    /// bonus, aborting on unmatched individuals.
    pub fn new(hermaphrodite: bool, coincidence_bonus: i64) -> Self {
        Self {
            hermaphrodite,
            coincidence_bonus,
            on_unmatched: UnmatchedPolicy::Abort,
        }
    }

    /// Set the unmatched-individual policy.
    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.on_unmatched = policy;
        self
    }

    /// Genders eligible to partner an individual of the given gender.
    pub fn eligible(&self, gender: Gender) -> &'static [Gender] {
        if self.hermaphrodite {
            &[Gender::M, Gender::F]
        } else {
            match gender {
                Gender::M => &[Gender::F],
                Gender::F => &[Gender::M],
            }
        }
    }

    /// Check whether `candidate` may partner `seeker`.
    #[inline]
    pub fn accepts(&self, seeker: Gender, candidate: Gender) -> bool {
        self.hermaphrodite || candidate == seeker.opposite()
    }

    /// Suitability score of a candidate pairing.
    ///
    /// Score = rank(a) + rank(b) + bonus × (number of positions where the
    /// two superiority vectors agree). Symmetric in `a` and `b`.
    pub fn suitability(
        &self,
        evaluator: &Evaluator,
        a: &Individual,
        b: &Individual,
    ) -> Result<i64, FitnessError> {
        let vector_a = evaluator.superiority(a.genome())?;
        let vector_b = evaluator.superiority(b.genome())?;
        let coincidence = vector_a.agreement(&vector_b) as i64;
        Ok(vector_a.count() as i64
            + vector_b.count() as i64
            + self.coincidence_bonus * coincidence)
    }
}

/// Run one breeding round over the population.
///
/// The candidate pool is a snapshot of the population at call time; pairing
/// removes individuals from the pool only, never from the population.
/// While the pool is non-empty, its first member scans the remaining pool
/// in order and picks the gender-eligible candidate with the maximum
/// suitability (first encountered wins ties). The pair recombines via
/// [`children`] with the male parent first; for same-gender pairings the
/// scanning individual goes first. Pool removal is by position, so
/// duplicate (genome, gender) entries are handled unambiguously.
///
/// # Errors
/// - `BreedError::NoEligiblePartner` if some individual has no eligible
///   partner and the rules say `UnmatchedPolicy::Abort`. Offspring from
///   pairs completed earlier in the round remain inserted.
/// - `BreedError::Recombination` / `BreedError::Fitness` propagated from
///   offspring construction.
pub fn breed(
    population: &mut Population,
    evaluator: &Evaluator,
    rules: &MatingRules,
) -> Result<(), BreedError> {
    let mut pool = population.snapshot();

    while !pool.is_empty() {
        let mut best: Option<(usize, i64)> = None;
        for candidate in 1..pool.len() {
            if !rules.accepts(pool[0].gender(), pool[candidate].gender()) {
                continue;
            }
            let score = rules.suitability(evaluator, &pool[0], &pool[candidate])?;
            if best.map_or(true, |(_, max)| score > max) {
                best = Some((candidate, score));
            }
        }

        let Some((mate_index, _)) = best else {
            match rules.on_unmatched {
                UnmatchedPolicy::Abort => {
                    return Err(BreedError::NoEligiblePartner {
                        gender: pool[0].gender(),
                        pool_size: pool.len(),
                    });
                }
                UnmatchedPolicy::Skip => {
                    pool.remove(0);
                    continue;
                }
            }
        };

        // mate_index >= 1, so removing it first leaves the initiator at 0.
        let mate = pool.remove(mate_index);
        let initiator = pool.remove(0);

        // Male parent first; the initiator leads same-gender pairings.
        let (parent1, parent2) =
            if initiator.gender() == Gender::M || initiator.gender() == mate.gender() {
                (initiator, mate)
            } else {
                (mate, initiator)
            };
        children(population, evaluator, &parent1, &parent2)?;
    }

    Ok(())
}

/// Error type for breeding-round failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreedError {
    /// No gender-eligible partner remained in the pool for some individual.
    NoEligiblePartner { gender: Gender, pool_size: usize },

    /// Offspring construction failed.
    Recombination(RecombinationError),

    /// Fitness evaluation failed while scoring candidates.
    Fitness(FitnessError),
}

impl fmt::Display for BreedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEligiblePartner { gender, pool_size } => write!(
                f,
                "No eligible partner for a {gender} individual ({pool_size} left in pool)"
            ),
            Self::Recombination(err) => write!(f, "{err}"),
            Self::Fitness(err) => write!(f, "{err}"),
        }
    }
}

impl error::Error for BreedError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::NoEligiblePartner { .. } => None,
            Self::Recombination(err) => Some(err),
            Self::Fitness(err) => Some(err),
        }
    }
}

impl From<RecombinationError> for BreedError {
    fn from(err: RecombinationError) -> Self {
        Self::Recombination(err)
    }
}

impl From<FitnessError> for BreedError {
    fn from(err: FitnessError) -> Self {
        Self::Fitness(err)
    }
}
