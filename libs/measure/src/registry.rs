//! Dimensionless pseudo-dimensions and their prime differentiators.
//!
//! Each nominally dimensionless but semantically distinct quantity gets a
//! unique prime as its [`Dimension`] differentiator. Primes are assigned in
//! declaration order from a single [`PrimeAllocator`], and the resulting
//! table is read-only once built.
//!
//! The built-in table is materialized on first use behind a
//! [`once_cell::sync::Lazy`], so concurrent first access cannot hand out
//! the same prime twice. Its declaration order is fixed:
//!
//! | # | Name                              | Prime |
//! |---|-----------------------------------|-------|
//! | 1 | `Radian`                          | 2     |
//! | 2 | `Pi`                              | 3     |
//! | 3 | `RelativeDensity`                 | 5     |
//! | 4 | `RefractiveIndex`                 | 7     |
//! | 5 | `RelativePermeability`            | 11    |
//! | 6 | `RelativeBiologicalEffectiveness` | 13    |
//! | 7 | `Meterset`                        | 17    |
//!
//! `Steradian` is derived as `Radian²` and consumes no prime.

use once_cell::sync::Lazy;

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::primes::PrimeAllocator;

pub const RADIAN: &str = "Radian";
pub const PI: &str = "Pi";
pub const RELATIVE_DENSITY: &str = "RelativeDensity";
pub const REFRACTIVE_INDEX: &str = "RefractiveIndex";
pub const RELATIVE_PERMEABILITY: &str = "RelativePermeability";
pub const RELATIVE_BIOLOGICAL_EFFECTIVENESS: &str = "RelativeBiologicalEffectiveness";
pub const METERSET: &str = "Meterset";

/// Built-in declaration order. Changing it changes every differentiator.
pub const BUILTIN_DECLARATION_ORDER: [&str; 7] = [
    RADIAN,
    PI,
    RELATIVE_DENSITY,
    REFRACTIVE_INDEX,
    RELATIVE_PERMEABILITY,
    RELATIVE_BIOLOGICAL_EFFECTIVENESS,
    METERSET,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PseudoDimension {
    pub name: &'static str,
    pub prime: u32,
    pub dimension: Dimension,
}

/// Read-only table of declared pseudo-dimensions.
#[derive(Debug, Clone, Default)]
pub struct DimensionlessRegistry {
    entries: Vec<PseudoDimension>,
}

impl DimensionlessRegistry {
    /// Declares `names` in order, drawing primes from a fresh allocator.
    ///
    /// # Errors
    ///
    /// See [`DimensionlessRegistry::build_with`].
    pub fn build(names: &[&'static str]) -> Result<Self> {
        Self::build_with(&mut PrimeAllocator::new(), names)
    }

    /// Declares `names` in order, drawing primes from `allocator`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a repeated name, and
    /// [`Error::PrimesExhausted`] if the allocator runs dry.
    pub fn build_with(allocator: &mut PrimeAllocator, names: &[&'static str]) -> Result<Self> {
        let mut entries: Vec<PseudoDimension> = Vec::with_capacity(names.len());
        for &name in names {
            if entries.iter().any(|e| e.name == name) {
                return Err(Error::InvalidArgument(format!(
                    "pseudo-dimension '{name}' declared twice"
                )));
            }
            let prime = allocator.next_prime()?;
            tracing::debug!(name, prime, "declared dimensionless pseudo-dimension");
            entries.push(PseudoDimension {
                name,
                prime,
                dimension: Dimension::dimensionless(f64::from(prime)),
            });
        }
        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<Dimension> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PseudoDimension> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a DimensionlessRegistry {
    type Item = &'a PseudoDimension;
    type IntoIter = std::slice::Iter<'a, PseudoDimension>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

static BUILTIN: Lazy<DimensionlessRegistry> = Lazy::new(|| {
    DimensionlessRegistry::build(&BUILTIN_DECLARATION_ORDER)
        .expect("built-in pseudo-dimensions fit in the u32 prime range")
});

/// The process-wide built-in table.
pub fn builtin() -> &'static DimensionlessRegistry {
    &BUILTIN
}

fn builtin_dimension(name: &str) -> Dimension {
    // Every name passed here is a member of BUILTIN_DECLARATION_ORDER.
    builtin().get(name).unwrap_or_default()
}

pub fn radian() -> Dimension {
    builtin_dimension(RADIAN)
}

pub fn steradian() -> Dimension {
    radian().powi(2)
}

pub fn pi() -> Dimension {
    builtin_dimension(PI)
}

pub fn relative_density() -> Dimension {
    builtin_dimension(RELATIVE_DENSITY)
}

pub fn refractive_index() -> Dimension {
    builtin_dimension(REFRACTIVE_INDEX)
}

pub fn relative_permeability() -> Dimension {
    builtin_dimension(RELATIVE_PERMEABILITY)
}

pub fn relative_biological_effectiveness() -> Dimension {
    builtin_dimension(RELATIVE_BIOLOGICAL_EFFECTIVENESS)
}

pub fn meterset() -> Dimension {
    builtin_dimension(METERSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::NUMBER;
    use crate::primes::Primes;

    #[test]
    fn test_builtin_primes_follow_declaration_order() {
        let primes: Vec<u32> = builtin().iter().map(|e| e.prime).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17]);
        assert_eq!(builtin().len(), BUILTIN_DECLARATION_ORDER.len());
    }

    #[test]
    fn test_builtin_accessors() {
        assert_eq!(radian().differentiator(), 2.0);
        assert_eq!(steradian().differentiator(), 4.0);
        assert_eq!(meterset().differentiator(), 17.0);
        assert!(steradian().is_dimensionless());
    }

    #[test]
    fn test_pseudo_dimensions_are_distinct() {
        let all: Vec<Dimension> = builtin().iter().map(|e| e.dimension).collect();
        for (i, a) in all.iter().enumerate() {
            assert_ne!(*a, NUMBER);
            for b in &all[i + 1..] {
                assert_ne!(a, b);
                assert!(a.exponents_equal(b));
            }
        }
    }

    #[test]
    fn test_squared_pseudo_dimension_matches_no_other() {
        for entry in builtin() {
            let squared = entry.dimension.powi(2);
            assert!(builtin().iter().all(|other| other.dimension != squared));
            assert_ne!(squared, NUMBER);
        }
    }

    #[test]
    fn test_custom_registry_uses_its_own_allocator() {
        let mut allocator = PrimeAllocator::new();
        allocator.next_prime().unwrap();
        let registry = DimensionlessRegistry::build_with(&mut allocator, &["Gain", "Ratio"]).unwrap();
        assert_eq!(registry.get("Gain"), Some(Dimension::dimensionless(3.0)));
        assert_eq!(registry.get("Ratio"), Some(Dimension::dimensionless(5.0)));
        assert_eq!(registry.get("Radian"), None);
    }

    #[test]
    fn test_duplicate_declaration_rejected() {
        let err = DimensionlessRegistry::build(&["Gain", "Gain"]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_exhausted_allocator_propagates() {
        let mut allocator = PrimeAllocator::with_primes(Primes::up_to(3));
        let err = DimensionlessRegistry::build_with(&mut allocator, &["A", "B", "C"]).unwrap_err();
        assert_eq!(err, Error::PrimesExhausted);
    }
}
