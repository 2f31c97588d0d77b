//! Population management and operations.
//!
//! This module provides the bounded, ranked collection of individuals that
//! every engine operation works against.

use crate::base::{Gender, Individual};
use crate::fitness::{Evaluator, FitnessError, Superiority};
use std::collections::BTreeMap;

/// A population entry: an individual with its cached rank.
///
/// Rank is a pure function of the genome and the static reference
/// configuration, so caching it at insertion time is sound and avoids
/// re-decoding on every comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    rank: usize,
    individual: Individual,
}

impl Ranked {
    /// Get the cached rank.
    #[inline]
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Get the individual.
    #[inline]
    pub fn individual(&self) -> &Individual {
        &self.individual
    }
}

/// One line of a population report: a (superiority vector, gender) group
/// and how many individuals fall in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub superiority: Superiority,
    pub gender: Gender,
    pub count: usize,
}

/// A bounded population of individuals, kept sorted by descending
/// (rank, genome, gender).
///
/// The ordering is a deterministic total order used purely for stable,
/// reproducible ranking and truncation; insertion order never affects the
/// final arrangement. Whenever an insertion pushes the population over its
/// limit, exactly one individual (the lowest in the order) is evicted.
///
/// Duplicate (genome, gender) pairs may coexist and are counted
/// separately.
#[derive(Debug, Clone)]
pub struct Population {
    /// Entries in descending rank order
    entries: Vec<Ranked>,
    /// Capacity; one eviction per over-capacity insertion
    limit: usize,
}

impl Population {
    /// Create an empty population with the given capacity limit.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::with_capacity(limit.saturating_add(1)),
            limit,
        }
    }

    /// Create a population by ranked-inserting every individual in turn.
    pub fn with_individuals(
        limit: usize,
        individuals: impl IntoIterator<Item = Individual>,
        evaluator: &Evaluator,
    ) -> Result<Self, FitnessError> {
        let mut population = Self::new(limit);
        for individual in individuals {
            population.insert_ranked(individual, evaluator)?;
        }
        Ok(population)
    }

    /// Get the capacity limit.
    #[inline(always)]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Get the number of individuals.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the population is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with cached ranks, best first.
    #[inline]
    pub fn entries(&self) -> &[Ranked] {
        &self.entries
    }

    /// Iterate over individuals, best first.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.entries.iter().map(|e| &e.individual)
    }

    /// Get an individual by position in the ranking.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.entries.get(index).map(|e| &e.individual)
    }

    /// The highest-ranked individual, if any.
    pub fn best(&self) -> Option<&Ranked> {
        self.entries.first()
    }

    /// Copy out the individuals in ranking order.
    ///
    /// Used to take the snapshots that `proliferate` and `breed` operate
    /// on while the population itself is being mutated.
    pub fn snapshot(&self) -> Vec<Individual> {
        self.entries.iter().map(|e| e.individual.clone()).collect()
    }

    /// Insert an individual at its ranked position, evicting the lowest
    /// entry if the limit is exceeded.
    ///
    /// Equivalent to append-then-resort-then-trim, but via binary search on
    /// the cached keys. Because the order is total (rank, then genome, then
    /// gender), the outcome is independent of insertion order.
    ///
    /// # Errors
    /// Returns `FitnessError::InvalidGenomeLength` if the individual's
    /// genome cannot be decoded against the configured zone map.
    pub fn insert_ranked(
        &mut self,
        individual: Individual,
        evaluator: &Evaluator,
    ) -> Result<(), FitnessError> {
        let rank = evaluator.rank(&individual)?;
        let position = self
            .entries
            .partition_point(|e| (e.rank, &e.individual) > (rank, &individual));
        self.entries.insert(position, Ranked { rank, individual });
        if self.entries.len() > self.limit {
            self.entries.pop();
        }
        Ok(())
    }

    /// Group the population by (superiority vector, gender) and count each
    /// group.
    ///
    /// Groups are ordered descending by the group key itself (vector first,
    /// then gender), not by count. This key ordering is deliberate: it
    /// reproduces the sort-then-reverse behavior of the original report.
    pub fn report(&self, evaluator: &Evaluator) -> Result<Vec<ReportEntry>, FitnessError> {
        let mut groups: BTreeMap<(Superiority, Gender), usize> = BTreeMap::new();
        for entry in &self.entries {
            let superiority = evaluator.superiority(entry.individual.genome())?;
            *groups
                .entry((superiority, entry.individual.gender()))
                .or_insert(0) += 1;
        }

        Ok(groups
            .into_iter()
            .rev()
            .map(|((superiority, gender), count)| ReportEntry {
                superiority,
                gender,
                count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Genome;
    use crate::fitness::ZoneMap;

    fn test_evaluator() -> Evaluator {
        let zone_map = ZoneMap::new(
            vec!["alpha".to_string(), "beta".to_string()],
            vec![0, 1, 0, 1],
        )
        .unwrap();
        Evaluator::new(zone_map, Genome::parse("1111").unwrap()).unwrap()
    }

    fn individual(bits: &str, gender: Gender) -> Individual {
        Individual::new(Genome::parse(bits).unwrap(), gender)
    }

    #[test]
    fn test_insert_keeps_descending_rank() {
        let evaluator = test_evaluator();
        let mut population = Population::new(8);
        // Reference 1111: rank counts fully-matching trait substrings.
        population
            .insert_ranked(individual("0000", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1111", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1010", Gender::F), &evaluator)
            .unwrap();

        let ranks: Vec<usize> = population.entries().iter().map(|e| e.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
        assert_eq!(population.best().unwrap().rank(), 2);
    }

    #[test]
    fn test_insert_order_does_not_matter() {
        let evaluator = test_evaluator();
        let individuals = [
            individual("1111", Gender::M),
            individual("1010", Gender::F),
            individual("0101", Gender::M),
            individual("0000", Gender::F),
            individual("1010", Gender::M),
        ];

        let mut forward = Population::new(8);
        for ind in individuals.iter().cloned() {
            forward.insert_ranked(ind, &evaluator).unwrap();
        }
        let mut backward = Population::new(8);
        for ind in individuals.iter().rev().cloned() {
            backward.insert_ranked(ind, &evaluator).unwrap();
        }

        let fwd: Vec<&Individual> = forward.iter().collect();
        let bwd: Vec<&Individual> = backward.iter().collect();
        assert_eq!(fwd, bwd);
    }

    #[test]
    fn test_tie_break_genome_then_gender() {
        let evaluator = test_evaluator();
        let mut population = Population::new(8);
        // All rank 0 against reference 1111; order must fall back to
        // genome bits, then gender (M before F).
        population
            .insert_ranked(individual("0001", Gender::F), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("0010", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("0001", Gender::M), &evaluator)
            .unwrap();

        let order: Vec<String> = population
            .iter()
            .map(|i| format!("{}{}", i.genome(), i.gender()))
            .collect();
        assert_eq!(order, vec!["0010M", "0001M", "0001F"]);
    }

    #[test]
    fn test_limit_evicts_exactly_one() {
        let evaluator = test_evaluator();
        let mut population = Population::new(2);
        population
            .insert_ranked(individual("0000", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1111", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1100", Gender::F), &evaluator)
            .unwrap();

        assert_eq!(population.len(), 2);
        // The lowest-ordered individual (rank 0) was evicted.
        assert!(population.iter().all(|i| i.genome().to_string() != "0000"));
    }

    #[test]
    fn test_duplicates_coexist() {
        let evaluator = test_evaluator();
        let mut population = Population::new(8);
        population
            .insert_ranked(individual("1111", Gender::F), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1111", Gender::F), &evaluator)
            .unwrap();
        assert_eq!(population.len(), 2);
    }

    #[test]
    fn test_report_groups_and_orders_by_key() {
        let evaluator = test_evaluator();
        let mut population = Population::new(8);
        population
            .insert_ranked(individual("1111", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1111", Gender::M), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("1111", Gender::F), &evaluator)
            .unwrap();
        population
            .insert_ranked(individual("0000", Gender::M), &evaluator)
            .unwrap();

        let report = population.report(&evaluator).unwrap();
        assert_eq!(report.len(), 3);
        // Descending by key: (true,true,M) then (true,true,F) then
        // (false,false,M). Key order, not count order.
        assert_eq!(report[0].gender, Gender::M);
        assert_eq!(report[0].count, 2);
        assert_eq!(report[1].gender, Gender::F);
        assert_eq!(report[1].count, 1);
        assert_eq!(report[2].superiority.count(), 0);
        assert_eq!(report[2].count, 1);
    }
}
