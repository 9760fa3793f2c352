//! SI dimension vectors with a dimensionless differentiator.
//!
//! A [`Dimension`] carries the seven SI base exponents plus a scalar
//! differentiator. True SI quantities always have a differentiator of `1.0`;
//! nominally dimensionless quantities (plane angle, refractive index, ...)
//! get a distinct prime from the [`registry`](crate::registry) so they stay
//! apart from each other and from a plain [`NUMBER`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};

const SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "Cd", "mol"];

/// Relative tolerance applied when comparing differentiators.
const DIFFERENTIATOR_TOLERANCE: f64 = f64::EPSILON;

#[derive(Clone, Copy, Debug)]
pub struct Dimension {
    exponents: [i32; 7],
    differentiator: f64,
}

pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0, 0, 0);
pub const MASS: Dimension = Dimension::new(0, 1, 0, 0, 0, 0, 0);
pub const TIME: Dimension = Dimension::new(0, 0, 1, 0, 0, 0, 0);
pub const ELECTRIC_CURRENT: Dimension = Dimension::new(0, 0, 0, 1, 0, 0, 0);
pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 0, 1, 0, 0);
pub const LUMINOUS_INTENSITY: Dimension = Dimension::new(0, 0, 0, 0, 0, 1, 0);
pub const AMOUNT_OF_SUBSTANCE: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 1);

/// A true dimensionless number: all exponents zero, differentiator `1.0`.
pub const NUMBER: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 0);

impl Dimension {
    /// Exponents in SI base order: length, mass, time, electric current,
    /// temperature, luminous intensity, amount of substance.
    pub const fn new(
        length: i32,
        mass: i32,
        time: i32,
        electric_current: i32,
        temperature: i32,
        luminous_intensity: i32,
        amount_of_substance: i32,
    ) -> Self {
        Self {
            exponents: [
                length,
                mass,
                time,
                electric_current,
                temperature,
                luminous_intensity,
                amount_of_substance,
            ],
            differentiator: 1.0,
        }
    }

    /// Dimensionless pseudo-dimension tagged with `differentiator`.
    pub const fn dimensionless(differentiator: f64) -> Self {
        Self {
            exponents: [0; 7],
            differentiator,
        }
    }

    pub const fn exponents(&self) -> [i32; 7] {
        self.exponents
    }

    pub const fn differentiator(&self) -> f64 {
        self.differentiator
    }

    pub const fn length(&self) -> i32 {
        self.exponents[0]
    }

    pub const fn mass(&self) -> i32 {
        self.exponents[1]
    }

    pub const fn time(&self) -> i32 {
        self.exponents[2]
    }

    pub const fn electric_current(&self) -> i32 {
        self.exponents[3]
    }

    pub const fn temperature(&self) -> i32 {
        self.exponents[4]
    }

    pub const fn luminous_intensity(&self) -> i32 {
        self.exponents[5]
    }

    pub const fn amount_of_substance(&self) -> i32 {
        self.exponents[6]
    }

    /// All SI exponents are zero (the differentiator is not consulted).
    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    #[must_use]
    pub fn multiply(&self, rhs: &Dimension) -> Dimension {
        Dimension {
            exponents: std::array::from_fn(|i| self.exponents[i].wrapping_add(rhs.exponents[i])),
            differentiator: self.differentiator * rhs.differentiator,
        }
    }

    #[must_use]
    pub fn divide(&self, rhs: &Dimension) -> Dimension {
        Dimension {
            exponents: std::array::from_fn(|i| self.exponents[i].wrapping_sub(rhs.exponents[i])),
            differentiator: self.differentiator / rhs.differentiator,
        }
    }

    #[must_use]
    pub fn powi(&self, n: i32) -> Dimension {
        Dimension {
            exponents: self.exponents.map(|e| e.wrapping_mul(n)),
            differentiator: self.differentiator.powi(n),
        }
    }

    /// Base-SI compatibility: exponents match, differentiator ignored.
    pub fn exponents_equal(&self, other: &Dimension) -> bool {
        self.exponents == other.exponents
    }

    fn differentiators_equal(&self, other: &Dimension) -> bool {
        let scale = self.differentiator.abs().max(other.differentiator.abs());
        (self.differentiator - other.differentiator).abs() <= DIFFERENTIATOR_TOLERANCE * scale
    }
}

impl Default for Dimension {
    fn default() -> Self {
        NUMBER
    }
}

impl PartialEq for Dimension {
    fn eq(&self, other: &Self) -> bool {
        self.exponents_equal(other) && self.differentiators_equal(other)
    }
}

// Equality tolerates differentiator rounding, so only exponents feed the hash.
impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exponents.hash(state);
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        self.multiply(&rhs)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self.divide(&rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (symbol, exp) in SYMBOLS.iter().zip(self.exponents) {
            if exp == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(symbol)?;
            if exp != 1 {
                write!(f, "^{exp}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VELOCITY: Dimension = Dimension::new(1, 0, -1, 0, 0, 0, 0);

    #[test]
    fn test_multiply_adds_exponents() {
        let area = LENGTH * LENGTH;
        assert_eq!(area, Dimension::new(2, 0, 0, 0, 0, 0, 0));
        assert_eq!(VELOCITY * TIME, LENGTH);
    }

    #[test]
    fn test_divide_subtracts_exponents() {
        assert_eq!(LENGTH / TIME, VELOCITY);
        assert_eq!(LENGTH / LENGTH, NUMBER);
    }

    #[test]
    fn test_powi_scales_exponents_and_differentiator() {
        let angle = Dimension::dimensionless(2.0);
        let squared = angle.powi(2);
        assert_eq!(squared.differentiator(), 4.0);
        assert!(squared.is_dimensionless());
        assert_eq!(LENGTH.powi(3).length(), 3);
        assert_eq!(VELOCITY.powi(-2), Dimension::new(-2, 0, 2, 0, 0, 0, 0));
    }

    #[test]
    fn test_extreme_exponents_wrap() {
        let huge = Dimension::new(i32::MAX, 0, 0, 0, 0, 0, 0);
        assert_eq!((huge * LENGTH).length(), i32::MIN);
        assert_eq!((NUMBER / huge).length(), -i32::MAX);
        assert_eq!((Dimension::new(i32::MIN, 0, 0, 0, 0, 0, 0) / LENGTH).length(), i32::MAX);
        assert_eq!(LENGTH.powi(2).powi(i32::MAX).length(), -2);
    }

    #[test]
    fn test_equality_respects_differentiator() {
        let angle = Dimension::dimensionless(2.0);
        let density = Dimension::dimensionless(5.0);
        assert_ne!(angle, NUMBER);
        assert_ne!(angle, density);
        assert!(angle.exponents_equal(&density));
        assert!(angle.exponents_equal(&NUMBER));
    }

    #[test]
    fn test_differentiator_tolerance() {
        let a = Dimension::dimensionless(3.0);
        let roundtrip = (a * Dimension::dimensionless(7.0)) / Dimension::dimensionless(7.0);
        assert_eq!(roundtrip, a);
    }

    #[test]
    fn test_display_omits_zero_exponents() {
        let dose = Dimension::new(2, 0, -2, 0, 0, 0, 0);
        assert_eq!(dose.to_string(), "m^2 s^-2");
        assert_eq!(MASS.to_string(), "kg");
        assert_eq!(NUMBER.to_string(), "");
        assert_eq!(Dimension::dimensionless(2.0).to_string(), "");
        assert_eq!(
            Dimension::new(0, 0, 0, 1, 1, 1, 1).to_string(),
            "A K Cd mol"
        );
    }
}
