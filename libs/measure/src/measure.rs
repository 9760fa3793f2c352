//! Generic `(amount, unit)` container.
//!
//! A [`Measure`] keeps the amount in whatever unit it was given. Binary
//! operations always convert the right operand into the left operand's unit
//! first and then work on raw amounts, so the left unit decides rounding:
//!
//! ```
//! use measure_core::{AbsorbedDose, Measure};
//!
//! let a = Measure::new(2.0, AbsorbedDose::milli_gray());
//! let b = Measure::new(0.003, AbsorbedDose::gray());
//! let sum = a + b;
//! assert_eq!(sum.unit().symbol(), "mGy");
//! assert!((sum.amount() - 5.0).abs() < 1e-4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

use crate::error::Result;
use crate::quantities::Number;
use crate::quantity::{check_same_quantity, AnyMeasure, AnyUnit, IntoAmount, MeasureOf, Quantity, Unit};

pub struct Measure<Q: 'static> {
    amount: f32,
    unit: &'static dyn Unit<Q>,
}

impl<Q: Quantity> Measure<Q> {
    pub fn new(amount: impl IntoAmount, unit: &'static dyn Unit<Q>) -> Self {
        Self {
            amount: amount.into_amount(),
            unit,
        }
    }

    /// Copies amount and unit of another measure of the same quantity.
    pub fn from_measure(other: &impl MeasureOf<Q>) -> Self {
        Self {
            amount: other.amount(),
            unit: other.unit(),
        }
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Converted on every call; nothing is cached.
    pub fn standard_amount(&self) -> f32 {
        self.unit.to_standard(self.amount)
    }

    pub fn unit(&self) -> &'static dyn Unit<Q> {
        self.unit
    }

    pub fn get_amount(&self, unit: &dyn Unit<Q>) -> f32 {
        unit.from_standard(self.standard_amount())
    }

    /// # Errors
    ///
    /// [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) if `unit`
    /// belongs to another quantity.
    pub fn get_amount_any(&self, unit: &dyn AnyUnit) -> Result<f32> {
        check_same_quantity(Q::info(), unit.quantity())?;
        Ok(unit.from_standard(self.standard_amount()))
    }

    /// Same physical value, expressed in `unit`.
    #[must_use]
    pub fn convert_to(&self, unit: &'static dyn Unit<Q>) -> Self {
        Self {
            amount: self.get_amount(unit),
            unit,
        }
    }

    pub fn into_quantity(self) -> Q {
        Q::from_standard_amount(self.standard_amount())
    }

    #[must_use]
    pub fn add(&self, rhs: &impl MeasureOf<Q>) -> Self {
        Self {
            amount: self.amount + rhs.get_amount(self.unit),
            unit: self.unit,
        }
    }

    #[must_use]
    pub fn subtract(&self, rhs: &impl MeasureOf<Q>) -> Self {
        Self {
            amount: self.amount - rhs.get_amount(self.unit),
            unit: self.unit,
        }
    }

    #[must_use]
    pub fn scale(&self, factor: f32) -> Self {
        Self {
            amount: self.amount * factor,
            unit: self.unit,
        }
    }

    /// Dimensionless ratio of the two standard amounts.
    pub fn divide(&self, rhs: &impl MeasureOf<Q>) -> Number {
        Number::new(self.standard_amount() / rhs.standard_amount())
    }

    pub fn compare(&self, rhs: &impl MeasureOf<Q>) -> Option<Ordering> {
        self.amount.partial_cmp(&rhs.get_amount(self.unit))
    }

    #[allow(clippy::float_cmp)]
    pub fn equals(&self, rhs: &impl MeasureOf<Q>) -> bool {
        self.amount == rhs.get_amount(self.unit)
    }
}

impl<Q: 'static> Clone for Measure<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: 'static> Copy for Measure<Q> {}

impl<Q: 'static> fmt::Debug for Measure<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("amount", &self.amount)
            .field("unit", &self.unit.symbol())
            .finish()
    }
}

impl<Q: 'static> fmt::Display for Measure<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_amount(f, self.amount, self.unit.symbol())
    }
}

/// Writes `"<amount> <symbol>"`, trimmed. A formatter precision (`{:.2}`)
/// applies to the amount.
#[doc(hidden)]
pub fn format_amount(f: &mut fmt::Formatter<'_>, amount: f32, symbol: &str) -> fmt::Result {
    let text = match f.precision() {
        Some(precision) => format!("{amount:.precision$} {symbol}"),
        None => format!("{amount} {symbol}"),
    };
    f.write_str(text.trim_end())
}

/// Hashes a standard amount so that `-0.0` and `0.0` agree.
#[doc(hidden)]
pub fn hash_amount<H: Hasher>(standard_amount: f32, state: &mut H) {
    let normalized = if standard_amount == 0.0 { 0.0 } else { standard_amount };
    normalized.to_bits().hash(state);
}

// Hash follows the standard amount, so equal values in different units agree.
impl<Q: Quantity> Hash for Measure<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_amount(self.standard_amount(), state);
    }
}

impl<Q: Quantity> MeasureOf<Q> for Measure<Q> {
    fn amount(&self) -> f32 {
        self.amount
    }

    fn standard_amount(&self) -> f32 {
        Measure::standard_amount(self)
    }

    fn unit(&self) -> &'static dyn Unit<Q> {
        self.unit
    }
}

impl<Q: Quantity> AnyMeasure for Measure<Q> {
    fn amount(&self) -> f32 {
        self.amount
    }

    fn standard_amount(&self) -> f32 {
        Measure::standard_amount(self)
    }

    fn any_unit(&self) -> &dyn AnyUnit {
        self.unit.as_any()
    }
}

impl<Q: Quantity> Add for Measure<Q> {
    type Output = Measure<Q>;

    fn add(self, rhs: Measure<Q>) -> Measure<Q> {
        Measure::add(&self, &rhs)
    }
}

impl<Q: Quantity> Sub for Measure<Q> {
    type Output = Measure<Q>;

    fn sub(self, rhs: Measure<Q>) -> Measure<Q> {
        self.subtract(&rhs)
    }
}

impl<Q: Quantity> Mul<f32> for Measure<Q> {
    type Output = Measure<Q>;

    fn mul(self, scalar: f32) -> Measure<Q> {
        self.scale(scalar)
    }
}

impl<Q: Quantity> Mul<Measure<Q>> for f32 {
    type Output = Measure<Q>;

    fn mul(self, measure: Measure<Q>) -> Measure<Q> {
        Measure {
            amount: self * measure.amount,
            unit: measure.unit,
        }
    }
}

impl<Q: Quantity> Div<f32> for Measure<Q> {
    type Output = Measure<Q>;

    fn div(self, scalar: f32) -> Measure<Q> {
        Measure {
            amount: self.amount / scalar,
            unit: self.unit,
        }
    }
}

impl<Q: Quantity> Div for Measure<Q> {
    type Output = Number;

    fn div(self, rhs: Measure<Q>) -> Number {
        self.divide(&rhs)
    }
}

impl<Q: Quantity> PartialEq for Measure<Q> {
    fn eq(&self, other: &Measure<Q>) -> bool {
        self.equals(other)
    }
}

impl<Q: Quantity> PartialOrd for Measure<Q> {
    fn partial_cmp(&self, other: &Measure<Q>) -> Option<Ordering> {
        self.compare(other)
    }
}
