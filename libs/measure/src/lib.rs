//! Dimensionally checked physical quantities.
//!
//! Every quantity is a small `Copy` value type holding its amount in the
//! quantity's standard unit. [`Measure`] is the generic `(amount, unit)`
//! container that keeps whatever unit it was constructed with. Dimensionless
//! quantities such as [`Angle`] are told apart from [`Number`] by a prime
//! differentiator on their [`Dimension`].
//!
//! ```
//! use measure_core::{AbsorbedDose, Quantity};
//!
//! let dose = AbsorbedDose::new_in(2.0, AbsorbedDose::milli_gray())
//!     + AbsorbedDose::new_in(0.003, AbsorbedDose::gray());
//! assert_eq!(dose, AbsorbedDose::new(0.005));
//! assert_eq!(AbsorbedDose::display_name(), "Absorbed Dose");
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod catalog;
mod dimension;
mod enumerable;
mod error;
mod measure;
mod prefix;
mod primes;
mod quantities;
mod quantity;
mod unit;

pub mod factors;
pub mod registry;

pub use catalog::{convert, find_quantity, find_units, quantities, QuantityEntry};
pub use dimension::{
    Dimension, AMOUNT_OF_SUBSTANCE, ELECTRIC_CURRENT, LENGTH, LUMINOUS_INTENSITY, MASS, NUMBER,
    TEMPERATURE, TIME,
};
pub use enumerable::{AmountsExt, AmountsIn, MeasuresExt, Quantities, StandardAmounts};
pub use error::{Error, Result};
pub use measure::Measure;
pub use prefix::UnitPrefix;
pub use primes::{PrimeAllocator, Primes};
pub use quantities::{
    AbsorbedDose, Activity, Angle, Energy, Length, Mass, Number, RelativeBiologicalEffectiveness,
    SolidAngle, Temperature, Time,
};
pub use quantity::{
    AnyMeasure, AnyUnit, Factory, IntoAmount, MeasureOf, Quantity, QuantityInfo, Unit,
};
pub use registry::{DimensionlessRegistry, PseudoDimension};
pub use unit::{AffineUnit, ConstantFactorUnit};

#[doc(hidden)]
pub mod __private {
    pub use crate::measure::{format_amount, hash_amount};
    pub use once_cell::sync::Lazy;
    #[cfg(feature = "decimal")]
    pub use rust_decimal::Decimal;
    #[cfg(feature = "serde")]
    pub use serde;
}
