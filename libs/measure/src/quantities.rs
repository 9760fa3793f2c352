//! Quantity types shipped with the crate.

use crate::dimension::{Dimension, LENGTH, MASS, NUMBER, TEMPERATURE, TIME};
use crate::factors::{
    BECQUERELS_PER_CURIE, CENTI, JOULES_PER_ELECTRON_VOLT, KELVIN_CELSIUS_INTERCEPT,
    KELVIN_FAHRENHEIT_INTERCEPT, KELVIN_FAHRENHEIT_SLOPE, KILO, KILOGRAMS_PER_ATOMIC_MASS_UNIT,
    KILOGRAMS_PER_ELECTRON_MASS, METERS_PER_ANGSTROM, METERS_PER_FOOT, METERS_PER_INCH,
    METERS_PER_MILE, METERS_PER_NAUTICAL_MILE, METERS_PER_YARD, MICRO, MILLI, NANO,
    RADIANS_PER_ARC_MINUTE, RADIANS_PER_ARC_SECOND, RADIANS_PER_DEGREE, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, SECONDS_PER_JULIAN_YEAR, SECONDS_PER_MINUTE, SECONDS_PER_WEEK,
};
use crate::registry;

crate::quantity! {
    @core
    /// A plain dimensionless number, the result of dividing two values of
    /// the same quantity.
    pub struct Number {
        display_name: "Number",
        dimension: NUMBER,
        standard: one => "",
        units: {
            percent => factor("%", CENTI),
        }
    }
}

impl std::ops::Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        Number::new(self.amount * rhs.amount)
    }
}

impl std::ops::Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number::new(self.amount / rhs.amount)
    }
}

crate::quantity! {
    /// Energy deposited by ionizing radiation per unit mass.
    pub struct AbsorbedDose {
        display_name: "Absorbed Dose",
        dimension: Dimension::new(2, 0, -2, 0, 0, 0, 0),
        standard: gray => "Gy",
        units: {
            nano_gray => prefixed(Nano),
            micro_gray => prefixed(Micro),
            milli_gray => prefixed(Milli),
            centi_gray => prefixed(Centi),
            deci_gray => prefixed(Deci),
            deka_gray => prefixed(Deka),
            hecto_gray => prefixed(Hecto),
            kilo_gray => prefixed(Kilo),
            rad => factor("rad", CENTI),
        }
    }
}

crate::quantity! {
    pub struct Length {
        display_name: "Length",
        dimension: LENGTH,
        standard: metre => "m",
        units: {
            nano_metre => prefixed(Nano),
            micro_metre => prefixed(Micro),
            milli_metre => prefixed(Milli),
            centi_metre => prefixed(Centi),
            kilo_metre => prefixed(Kilo),
            angstrom => factor("Å", METERS_PER_ANGSTROM),
            inch => factor("in", METERS_PER_INCH),
            foot => factor("ft", METERS_PER_FOOT),
            yard => factor("yd", METERS_PER_YARD),
            mile => factor("mi", METERS_PER_MILE),
            nautical_mile => factor("NM", METERS_PER_NAUTICAL_MILE),
        }
    }
}

crate::quantity! {
    pub struct Mass {
        display_name: "Mass",
        dimension: MASS,
        standard: kilogram => "kg",
        units: {
            gram => factor("g", MILLI),
            milligram => factor("mg", MICRO),
            microgram => factor("µg", NANO),
            tonne => factor("t", KILO),
            atomic_mass_unit => factor("u", KILOGRAMS_PER_ATOMIC_MASS_UNIT),
            electron_mass => factor("m_e", KILOGRAMS_PER_ELECTRON_MASS),
        }
    }
}

crate::quantity! {
    pub struct Time {
        display_name: "Time",
        dimension: TIME,
        standard: second => "s",
        units: {
            nano_second => prefixed(Nano),
            micro_second => prefixed(Micro),
            milli_second => prefixed(Milli),
            minute => factor("min", SECONDS_PER_MINUTE),
            hour => factor("h", SECONDS_PER_HOUR),
            day => factor("d", SECONDS_PER_DAY),
            week => factor("wk", SECONDS_PER_WEEK),
            julian_year => factor("a", SECONDS_PER_JULIAN_YEAR),
        }
    }
}

crate::quantity! {
    /// Plane angle. Dimensionless, tagged with the `Radian` differentiator.
    pub struct Angle {
        display_name: "Angle",
        dimension: registry::radian(),
        standard: radian => "rad",
        units: {
            milli_radian => prefixed(Milli),
            degree => factor("°", RADIANS_PER_DEGREE),
            arc_minute => factor("'", RADIANS_PER_ARC_MINUTE),
            arc_second => factor("\"", RADIANS_PER_ARC_SECOND),
        }
    }
}

crate::quantity! {
    /// Solid angle, dimensionally `Radian²`.
    pub struct SolidAngle {
        display_name: "Solid Angle",
        dimension: registry::steradian(),
        standard: steradian => "sr",
        units: {}
    }
}

crate::quantity! {
    /// Thermodynamic temperature. Celsius and Fahrenheit are affine scales.
    pub struct Temperature {
        display_name: "Temperature",
        dimension: TEMPERATURE,
        standard: kelvin => "K",
        units: {
            celsius => affine("°C", 1.0, KELVIN_CELSIUS_INTERCEPT),
            fahrenheit => affine(
                "°F",
                KELVIN_FAHRENHEIT_SLOPE,
                KELVIN_FAHRENHEIT_INTERCEPT * KELVIN_FAHRENHEIT_SLOPE
            ),
        }
    }
}

crate::quantity! {
    /// Ratio of reference to test radiation dose producing the same effect.
    pub struct RelativeBiologicalEffectiveness {
        display_name: "Relative Biological Effectiveness",
        dimension: registry::relative_biological_effectiveness(),
        standard: rbe => "RBE",
        units: {}
    }
}

crate::quantity! {
    pub struct Energy {
        display_name: "Energy",
        dimension: Dimension::new(2, 1, -2, 0, 0, 0, 0),
        standard: joule => "J",
        units: {
            milli_joule => prefixed(Milli),
            kilo_joule => prefixed(Kilo),
            mega_joule => prefixed(Mega),
            electron_volt => factor("eV", JOULES_PER_ELECTRON_VOLT),
            kilo_electron_volt => factor("keV", JOULES_PER_ELECTRON_VOLT * KILO),
            mega_electron_volt => factor("MeV", JOULES_PER_ELECTRON_VOLT * 1.0e6),
        }
    }
}

crate::quantity! {
    /// Radioactive decay rate.
    pub struct Activity {
        display_name: "Activity",
        dimension: Dimension::new(0, 0, -1, 0, 0, 0, 0),
        standard: becquerel => "Bq",
        units: {
            kilo_becquerel => prefixed(Kilo),
            mega_becquerel => prefixed(Mega),
            giga_becquerel => prefixed(Giga),
            curie => factor("Ci", BECQUERELS_PER_CURIE),
            milli_curie => factor("mCi", BECQUERELS_PER_CURIE * MILLI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn test_standard_units_come_first() {
        assert_eq!(AbsorbedDose::units()[0].symbol(), "Gy");
        assert!(AbsorbedDose::units()[0].is_standard());
        assert!(AbsorbedDose::units()[1..].iter().all(|u| !u.is_standard()));
        assert_eq!(AbsorbedDose::units().len(), 10);
        assert_eq!(SolidAngle::units().len(), 1);
    }

    #[test]
    fn test_prefixed_symbols() {
        let symbols: Vec<&str> = AbsorbedDose::units().iter().map(|u| u.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["Gy", "nGy", "µGy", "mGy", "cGy", "dGy", "daGy", "hGy", "kGy", "rad"]
        );
    }

    #[test]
    fn test_dimensionless_quantities_are_distinct() {
        assert_ne!(Angle::dimension(), Number::dimension());
        assert_ne!(SolidAngle::dimension(), Angle::dimension());
        assert_eq!(SolidAngle::dimension(), Angle::dimension().powi(2));
        assert_ne!(RelativeBiologicalEffectiveness::dimension(), Number::dimension());
        assert!(Angle::dimension().exponents_equal(&Number::dimension()));
    }

    #[test]
    fn test_derived_dimensions() {
        assert_eq!(Energy::dimension() / Mass::dimension(), AbsorbedDose::dimension());
        assert_eq!(
            Length::dimension().powi(2) / Time::dimension().powi(2),
            AbsorbedDose::dimension()
        );
    }

    #[test]
    fn test_temperature_scales() {
        let boiling = Temperature::new_in(100.0, Temperature::celsius());
        assert!((boiling.amount() - 373.15).abs() < 1e-3);
        let freezing = Temperature::new_in(32.0, Temperature::fahrenheit());
        assert!((freezing.amount() - 273.15).abs() < 1e-3);
        assert!((freezing.get_amount(Temperature::celsius())).abs() < 1e-3);
    }

    #[test]
    fn test_time_units() {
        let day = Time::new_in(1.0, Time::day());
        assert_eq!(day.get_amount(Time::hour()), 24.0);
        assert_eq!(Time::new_in(2.0, Time::week()).get_amount(Time::day()), 14.0);
    }

    #[test]
    fn test_number_operations() {
        let half = Number::new(0.5);
        assert_eq!(half * Number::new(4.0_f32), Number::new(2.0_f32));
        assert_eq!(Number::new(3.0_f32) / Number::new(2.0_f32), Number::new(1.5_f32));
        assert_eq!(half.get_amount(Number::percent()), 50.0);
        assert_eq!(half.to_string(), "0.5");
    }

    #[test]
    fn test_number_scales_other_quantities() {
        let dose = AbsorbedDose::new(4.0_f32);
        assert_eq!(dose * Number::new(0.5_f32), AbsorbedDose::new(2.0_f32));
        assert_eq!(dose / Number::new(2.0_f32), AbsorbedDose::new(2.0_f32));
    }
}
