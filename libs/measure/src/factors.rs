//! Conversion factors to standard SI units, in single precision.

#![allow(clippy::unreadable_literal)]

use num_traits::Float;
use once_cell::sync::Lazy;

pub const ONE: f32 = 1.0;

pub const YOTTA: f32 = 1.0e24;
pub const ZETTA: f32 = 1.0e21;
pub const EXA: f32 = 1.0e18;
pub const PETA: f32 = 1.0e15;
pub const TERA: f32 = 1.0e12;
pub const GIGA: f32 = 1.0e9;
pub const MEGA: f32 = 1.0e6;
pub const KILO: f32 = 1.0e3;
pub const HECTO: f32 = 1.0e2;
pub const DEKA: f32 = 1.0e1;
pub const DECI: f32 = 1.0e-1;
pub const CENTI: f32 = 1.0e-2;
pub const MILLI: f32 = 1.0e-3;
pub const MICRO: f32 = 1.0e-6;
pub const NANO: f32 = 1.0e-9;
pub const PICO: f32 = 1.0e-12;
pub const FEMTO: f32 = 1.0e-15;
pub const ATTO: f32 = 1.0e-18;
pub const ZEPTO: f32 = 1.0e-21;
pub const YOCTO: f32 = 1.0e-24;

pub const SECONDS_PER_MINUTE: f32 = 60.0;
pub const SECONDS_PER_HOUR: f32 = SECONDS_PER_MINUTE * 60.0;
pub const SECONDS_PER_DAY: f32 = SECONDS_PER_HOUR * 24.0;
pub const SECONDS_PER_WEEK: f32 = SECONDS_PER_DAY * 7.0;
pub const SECONDS_PER_JULIAN_YEAR: f32 = SECONDS_PER_DAY * 365.25;

pub const KELVIN_CELSIUS_INTERCEPT: f32 = 273.15;
pub const KELVIN_FAHRENHEIT_INTERCEPT: f32 = 459.67;
pub const KELVIN_FAHRENHEIT_SLOPE: f32 = 5.0 / 9.0;

pub const COULOMBS_PER_ELEMENTARY_CHARGE: f32 = 1.6021765e-19;
pub const JOULES_PER_ELECTRON_VOLT: f32 = COULOMBS_PER_ELEMENTARY_CHARGE;

pub const METERS_PER_ANGSTROM: f32 = 1.0e-10;
pub const METERS_PER_INCH: f32 = 0.0254;
pub const METERS_PER_FOOT: f32 = METERS_PER_INCH * 12.0;
pub const METERS_PER_YARD: f32 = METERS_PER_FOOT * 3.0;
pub const METERS_PER_MILE: f32 = METERS_PER_YARD * 1760.0;
pub const METERS_PER_NAUTICAL_MILE: f32 = 1852.0;

pub const KILOGRAMS_PER_ELECTRON_MASS: f32 = 9.1093825e-31;
pub const KILOGRAMS_PER_ATOMIC_MASS_UNIT: f32 = 1.660539e-27;

pub const BECQUERELS_PER_CURIE: f32 = 3.7e10;

pub const RADIANS_PER_DEGREE: f32 = std::f32::consts::PI / 180.0;
pub const RADIANS_PER_ARC_MINUTE: f32 = RADIANS_PER_DEGREE / 60.0;
pub const RADIANS_PER_ARC_SECOND: f32 = RADIANS_PER_ARC_MINUTE / 60.0;

/// Smallest `eps` with `1 + eps != 1`, found by halving until
/// `1 + eps / 2 == 1`.
pub fn machine_epsilon<F: Float>() -> F {
    let half = F::one() / (F::one() + F::one());
    let mut eps = F::one();
    loop {
        eps = eps * half;
        if F::one() + half * eps == F::one() {
            return eps;
        }
    }
}

/// [`machine_epsilon`] for the amount type, measured once.
pub static MACHINE_EPSILON: Lazy<f32> = Lazy::new(machine_epsilon::<f32>);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_epsilon_property() {
        let eps = *MACHINE_EPSILON;
        assert_eq!(1.0_f32 + 0.5 * eps, 1.0);
        assert_ne!(1.0_f32 + eps, 1.0);
    }

    #[test]
    fn test_machine_epsilon_matches_platform() {
        assert_eq!(machine_epsilon::<f32>(), f32::EPSILON);
        assert_eq!(machine_epsilon::<f64>(), f64::EPSILON);
    }

    #[test]
    fn test_time_factors() {
        assert_eq!(SECONDS_PER_HOUR, 3600.0);
        assert_eq!(SECONDS_PER_DAY, 86_400.0);
        assert_eq!(SECONDS_PER_WEEK, 604_800.0);
    }

    #[test]
    fn test_particle_constants_fit_single_precision() {
        assert_eq!(JOULES_PER_ELECTRON_VOLT, 1.6021765e-19);
        assert!(KILOGRAMS_PER_ELECTRON_MASS > 0.0);
        assert!(KILOGRAMS_PER_ATOMIC_MASS_UNIT / KILOGRAMS_PER_ELECTRON_MASS > 1822.0);
    }
}
