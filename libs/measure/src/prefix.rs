//! SI metric prefixes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UnitPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    Deka,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl UnitPrefix {
    pub const ALL: [UnitPrefix; 20] = [
        UnitPrefix::Yocto,
        UnitPrefix::Zepto,
        UnitPrefix::Atto,
        UnitPrefix::Femto,
        UnitPrefix::Pico,
        UnitPrefix::Nano,
        UnitPrefix::Micro,
        UnitPrefix::Milli,
        UnitPrefix::Centi,
        UnitPrefix::Deci,
        UnitPrefix::Deka,
        UnitPrefix::Hecto,
        UnitPrefix::Kilo,
        UnitPrefix::Mega,
        UnitPrefix::Giga,
        UnitPrefix::Tera,
        UnitPrefix::Peta,
        UnitPrefix::Exa,
        UnitPrefix::Zetta,
        UnitPrefix::Yotta,
    ];

    /// Power of ten this prefix stands for.
    pub const fn exponent(self) -> i32 {
        match self {
            UnitPrefix::Yocto => -24,
            UnitPrefix::Zepto => -21,
            UnitPrefix::Atto => -18,
            UnitPrefix::Femto => -15,
            UnitPrefix::Pico => -12,
            UnitPrefix::Nano => -9,
            UnitPrefix::Micro => -6,
            UnitPrefix::Milli => -3,
            UnitPrefix::Centi => -2,
            UnitPrefix::Deci => -1,
            UnitPrefix::Deka => 1,
            UnitPrefix::Hecto => 2,
            UnitPrefix::Kilo => 3,
            UnitPrefix::Mega => 6,
            UnitPrefix::Giga => 9,
            UnitPrefix::Tera => 12,
            UnitPrefix::Peta => 15,
            UnitPrefix::Exa => 18,
            UnitPrefix::Zetta => 21,
            UnitPrefix::Yotta => 24,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            UnitPrefix::Yocto => "y",
            UnitPrefix::Zepto => "z",
            UnitPrefix::Atto => "a",
            UnitPrefix::Femto => "f",
            UnitPrefix::Pico => "p",
            UnitPrefix::Nano => "n",
            UnitPrefix::Micro => "µ",
            UnitPrefix::Milli => "m",
            UnitPrefix::Centi => "c",
            UnitPrefix::Deci => "d",
            UnitPrefix::Deka => "da",
            UnitPrefix::Hecto => "h",
            UnitPrefix::Kilo => "k",
            UnitPrefix::Mega => "M",
            UnitPrefix::Giga => "G",
            UnitPrefix::Tera => "T",
            UnitPrefix::Peta => "P",
            UnitPrefix::Exa => "E",
            UnitPrefix::Zetta => "Z",
            UnitPrefix::Yotta => "Y",
        }
    }

    /// `10^exponent`, rounded once to single precision.
    pub fn factor(self) -> f32 {
        pow10(self.exponent())
    }

    /// `10^-exponent`, rounded once to single precision.
    ///
    /// Not `1.0 / factor()`: `1.0 / 1e-3f32` is `999.99994`, not `1000`.
    pub fn inverse_factor(self) -> f32 {
        pow10(-self.exponent())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pow10(exponent: i32) -> f32 {
    10f64.powi(exponent) as f32
}

impl fmt::Display for UnitPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
