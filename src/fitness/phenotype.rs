use super::FitnessError;
use crate::base::Genome;
use std::error;
use std::fmt;
use std::sync::Arc;

/// Shared, immutable zone assignment.
///
/// Maps every genome position to a trait index and carries the ordered
/// trait-name list. One instance is built at startup and shared across all
/// fitness operations; it is never mutated.
#[derive(Debug, Clone)]
pub struct ZoneMap {
    /// Trait names, in the fixed display/comparison order
    traits: Arc<[String]>,
    /// One trait index per genome position
    zones: Arc<[usize]>,
}

impl ZoneMap {
    /// Create a new zone map from trait names and per-position zone indices.
    ///
    /// # Errors
    /// Returns an error if the trait list is empty or any zone index does
    /// not refer to a trait.
    pub fn new(
        traits: impl Into<Vec<String>>,
        zones: impl Into<Vec<usize>>,
    ) -> Result<Self, ZoneMapError> {
        let traits: Vec<String> = traits.into();
        let zones: Vec<usize> = zones.into();

        if traits.is_empty() {
            return Err(ZoneMapError::NoTraits);
        }
        for (position, &zone) in zones.iter().enumerate() {
            if zone >= traits.len() {
                return Err(ZoneMapError::ZoneOutOfRange {
                    position,
                    zone,
                    trait_count: traits.len(),
                });
            }
        }

        Ok(Self {
            traits: traits.into(),
            zones: zones.into(),
        })
    }

    /// Genome length this map decodes (one zone entry per position).
    #[inline(always)]
    pub fn genome_length(&self) -> usize {
        self.zones.len()
    }

    /// Number of traits.
    #[inline(always)]
    pub fn trait_count(&self) -> usize {
        self.traits.len()
    }

    /// Trait names in order.
    #[inline]
    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    /// Per-position zone indices.
    #[inline]
    pub fn zones(&self) -> &[usize] {
        &self.zones
    }

    /// Decode a genome into its phenotype.
    ///
    /// Walks the genome in position order and appends each bit's character
    /// form to the accumulator of the trait owning that position. Trait
    /// order in the result is the static trait-name order, regardless of
    /// where each trait's positions fall in the genome.
    ///
    /// # Errors
    /// Returns `FitnessError::InvalidGenomeLength` if the genome length
    /// does not match this map.
    pub fn decode(&self, genome: &Genome) -> Result<Phenotype, FitnessError> {
        if genome.len() != self.zones.len() {
            return Err(FitnessError::InvalidGenomeLength {
                expected: self.zones.len(),
                actual: genome.len(),
            });
        }

        let mut values = vec![String::new(); self.traits.len()];
        for (bit, &zone) in genome.bits().iter().zip(self.zones.iter()) {
            values[zone].push(if *bit { '1' } else { '0' });
        }

        Ok(Phenotype {
            traits: Arc::clone(&self.traits),
            values,
        })
    }
}

/// Decoded phenotype: one bit-substring per trait, in trait-name order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phenotype {
    /// Shared trait-name list (same order as the zone map)
    traits: Arc<[String]>,
    /// Bit substrings, aligned with `traits`
    values: Vec<String>,
}

impl Phenotype {
    /// Number of traits.
    #[inline(always)]
    pub fn trait_count(&self) -> usize {
        self.values.len()
    }

    /// Look up the substring for a trait by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.traits
            .iter()
            .position(|t| t == name)
            .map(|i| self.values[i].as_str())
    }

    /// Bit substrings in trait order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Iterate over (trait name, substring) pairs in trait order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.traits
            .iter()
            .map(|t| t.as_str())
            .zip(self.values.iter().map(|v| v.as_str()))
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (name, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Error type for failures when constructing a `ZoneMap`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneMapError {
    /// The trait-name list was empty.
    NoTraits,

    /// A position referred to a trait index outside the trait list.
    ZoneOutOfRange {
        position: usize,
        zone: usize,
        trait_count: usize,
    },
}

impl fmt::Display for ZoneMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTraits => write!(f, "Zone map requires at least one trait"),
            Self::ZoneOutOfRange {
                position,
                zone,
                trait_count,
            } => write!(
                f,
                "Zone index {zone} at position {position} out of range ({trait_count} traits)"
            ),
        }
    }
}

impl error::Error for ZoneMapError {}
