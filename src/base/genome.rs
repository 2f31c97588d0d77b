use super::InvalidSymbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-length binary genome.
///
/// A genome is an ordered sequence of bits. Genomes are immutable once
/// constructed: every mutation operates on a fresh copy, so no two genomes
/// ever share storage.
///
/// The derived `Ord` compares bit-by-bit from position 0 (`false < true`),
/// which is the ordering used as a tie-break when ranking individuals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Create a genome from raw bits.
    pub fn from_bits(bits: impl Into<Vec<bool>>) -> Self {
        Self { bits: bits.into() }
    }

    /// Parse a genome from a string of '0' and '1' characters.
    ///
    /// # Errors
    /// Returns `InvalidSymbol` for any character other than '0' or '1'.
    pub fn parse(s: &str) -> Result<Self, InvalidSymbol> {
        let bits: Result<Vec<bool>, _> = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(InvalidSymbol(other)),
            })
            .collect();
        Ok(Self { bits: bits? })
    }

    /// Get length in bits.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the bit at a position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Get raw bits.
    #[inline]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Return a copy of this genome with the bit at `index` inverted.
    ///
    /// This is the only way to derive a variant genome; the original is
    /// never modified in place.
    pub fn flipped(&self, index: usize) -> Option<Self> {
        if index >= self.bits.len() {
            return None;
        }
        let mut bits = self.bits.clone();
        bits[index] = !bits[index];
        Some(Self { bits })
    }

    /// Splice the first half of this genome with the trailing part of
    /// `other`.
    ///
    /// The split point is `self.len() / 2`; positions `[0, mid)` come from
    /// `self` and positions `[mid, other.len())` from `other`.
    pub fn splice_half(&self, other: &Genome) -> Genome {
        let mid = self.bits.len() / 2;
        let mut bits = Vec::with_capacity(mid + other.bits.len().saturating_sub(mid));
        bits.extend_from_slice(&self.bits[..mid]);
        bits.extend_from_slice(&other.bits[mid.min(other.bits.len())..]);
        Self { bits }
    }

    /// Count the positions at which this genome differs from `other`.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
