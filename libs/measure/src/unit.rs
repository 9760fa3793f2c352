//! Concrete unit implementations.

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::prefix::UnitPrefix;
use crate::quantity::{AnyUnit, Quantity, QuantityInfo, Unit};

fn check_factor(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value != 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{name} must be finite and non-zero, got {value}"
        )))
    }
}

/// Linear unit: `standard = factor × amount`.
pub struct ConstantFactorUnit<Q> {
    symbol: Cow<'static, str>,
    to_standard: f32,
    from_standard: f32,
    _quantity: PhantomData<fn() -> Q>,
}

impl<Q> ConstantFactorUnit<Q> {
    /// A standard unit (factor one).
    pub fn standard(symbol: impl Into<Cow<'static, str>>) -> Self {
        Self {
            symbol: symbol.into(),
            to_standard: 1.0,
            from_standard: 1.0,
            _quantity: PhantomData,
        }
    }

    /// A unit that is `factor` standard units large. Marked standard iff
    /// `factor == 1`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `factor` is zero, infinite or NaN.
    pub fn new(symbol: impl Into<Cow<'static, str>>, factor: f32) -> Result<Self> {
        check_factor("conversion factor", factor)?;
        Ok(Self {
            symbol: symbol.into(),
            to_standard: factor,
            from_standard: 1.0 / factor,
            _quantity: PhantomData,
        })
    }

    pub fn factor(&self) -> f32 {
        self.to_standard
    }
}

impl<Q: Quantity> ConstantFactorUnit<Q> {
    /// Metric-prefixed variant of the quantity's standard unit, e.g. `mGy`.
    pub fn prefixed(prefix: UnitPrefix) -> Self {
        Self {
            symbol: Cow::Owned(format!("{}{}", prefix.symbol(), Q::standard_unit().symbol())),
            to_standard: prefix.factor(),
            from_standard: prefix.inverse_factor(),
            _quantity: PhantomData,
        }
    }
}

impl<Q> fmt::Debug for ConstantFactorUnit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstantFactorUnit")
            .field("symbol", &self.symbol)
            .field("factor", &self.to_standard)
            .finish()
    }
}

impl<Q: Quantity> AnyUnit for ConstantFactorUnit<Q> {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    #[allow(clippy::float_cmp)]
    fn is_standard(&self) -> bool {
        self.to_standard == 1.0
    }

    fn quantity(&self) -> &'static QuantityInfo {
        Q::info()
    }

    fn to_standard(&self, amount: f32) -> f32 {
        self.to_standard * amount
    }

    fn from_standard(&self, standard_amount: f32) -> f32 {
        self.from_standard * standard_amount
    }
}

impl<Q: Quantity> Unit<Q> for ConstantFactorUnit<Q> {
    fn as_any(&self) -> &dyn AnyUnit {
        self
    }
}

/// Scale-and-offset unit: `standard = scale × amount + offset`.
///
/// Temperature scales such as Celsius and Fahrenheit are affine relative to
/// kelvin.
pub struct AffineUnit<Q> {
    symbol: Cow<'static, str>,
    scale: f32,
    offset: f32,
    _quantity: PhantomData<fn() -> Q>,
}

impl<Q> AffineUnit<Q> {
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `scale` is zero or not finite, or if
    /// `offset` is not finite.
    pub fn new(symbol: impl Into<Cow<'static, str>>, scale: f32, offset: f32) -> Result<Self> {
        check_factor("scale", scale)?;
        if !offset.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "offset must be finite, got {offset}"
            )));
        }
        Ok(Self {
            symbol: symbol.into(),
            scale,
            offset,
            _quantity: PhantomData,
        })
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl<Q> fmt::Debug for AffineUnit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AffineUnit")
            .field("symbol", &self.symbol)
            .field("scale", &self.scale)
            .field("offset", &self.offset)
            .finish()
    }
}

impl<Q: Quantity> AnyUnit for AffineUnit<Q> {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    #[allow(clippy::float_cmp)]
    fn is_standard(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    fn quantity(&self) -> &'static QuantityInfo {
        Q::info()
    }

    fn to_standard(&self, amount: f32) -> f32 {
        self.scale * amount + self.offset
    }

    fn from_standard(&self, standard_amount: f32) -> f32 {
        (standard_amount - self.offset) / self.scale
    }
}

impl<Q: Quantity> Unit<Q> for AffineUnit<Q> {
    fn as_any(&self) -> &dyn AnyUnit {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{AbsorbedDose, Temperature};

    #[test]
    fn test_standard_flag_follows_factor() {
        let gray = ConstantFactorUnit::<AbsorbedDose>::standard("Gy");
        assert!(gray.is_standard());
        let also_gray = ConstantFactorUnit::<AbsorbedDose>::new("Gy2", 1.0).unwrap();
        assert!(also_gray.is_standard());
        let rad = ConstantFactorUnit::<AbsorbedDose>::new("rad", 0.01).unwrap();
        assert!(!rad.is_standard());
    }

    #[test]
    fn test_constant_factor_conversion() {
        let rad = ConstantFactorUnit::<AbsorbedDose>::new("rad", 0.01).unwrap();
        assert_eq!(rad.to_standard(200.0), 2.0);
        assert_eq!(rad.from_standard(2.0), 200.0);
        assert_eq!(rad.quantity().display_name(), "Absorbed Dose");
    }

    #[test]
    fn test_prefixed_symbol_and_factor() {
        let milli = ConstantFactorUnit::<AbsorbedDose>::prefixed(UnitPrefix::Milli);
        assert_eq!(milli.symbol(), "mGy");
        assert_eq!(milli.factor(), 1.0e-3);
        assert_eq!(milli.from_standard(1.0), 1000.0);
        let kilo = ConstantFactorUnit::<AbsorbedDose>::prefixed(UnitPrefix::Kilo);
        assert_eq!(kilo.symbol(), "kGy");
        assert_eq!(kilo.to_standard(2.0), 2000.0);
    }

    #[test]
    fn test_invalid_factors_rejected() {
        for bad in [0.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = ConstantFactorUnit::<AbsorbedDose>::new("x", bad).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
        }
        assert!(AffineUnit::<Temperature>::new("x", 0.0, 1.0).is_err());
        assert!(AffineUnit::<Temperature>::new("x", 1.0, f32::NAN).is_err());
    }

    #[test]
    fn test_affine_conversion() {
        let celsius = AffineUnit::<Temperature>::new("°C", 1.0, 273.15).unwrap();
        assert!(!celsius.is_standard());
        assert_eq!(celsius.to_standard(0.0), 273.15);
        assert!((celsius.from_standard(373.15) - 100.0).abs() < 1e-4);
    }
}
