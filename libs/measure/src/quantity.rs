//! Capability contracts for units and quantities.
//!
//! [`AnyUnit`] and [`AnyMeasure`] are the untyped, object-safe views used when
//! the quantity is only known at runtime. [`Unit`], [`MeasureOf`] and
//! [`Quantity`] are the statically typed contracts: a concrete quantity type
//! supplies its metadata (display name, dimension, standard unit, factory)
//! through trait association rather than through a default instance.

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::measure::Measure;

/// Identity and metadata of one quantity.
///
/// Two infos are equal iff they describe the same quantity type.
#[derive(Debug)]
pub struct QuantityInfo {
    display_name: &'static str,
    dimension: Dimension,
    type_id: TypeId,
}

impl QuantityInfo {
    pub fn of<Q: 'static>(display_name: &'static str, dimension: Dimension) -> Self {
        Self {
            display_name,
            dimension,
            type_id: TypeId::of::<Q>(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn is<Q: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<Q>()
    }
}

impl PartialEq for QuantityInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for QuantityInfo {}

impl Hash for QuantityInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for QuantityInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// A unit whose quantity is only known at runtime.
pub trait AnyUnit: fmt::Debug + Send + Sync {
    fn symbol(&self) -> &str;

    /// Human-readable name; the symbol unless a unit overrides it.
    fn display_name(&self) -> &str {
        self.symbol()
    }

    /// The quantity's canonical unit; every conversion routes through it.
    fn is_standard(&self) -> bool;

    fn quantity(&self) -> &'static QuantityInfo;

    fn to_standard(&self, amount: f32) -> f32;

    fn from_standard(&self, standard_amount: f32) -> f32;
}

/// A unit of quantity `Q`.
pub trait Unit<Q>: AnyUnit {
    fn as_any(&self) -> &dyn AnyUnit;
}

impl<Q> fmt::Display for dyn Unit<Q> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Anything holding an amount of quantity `Q` in some unit of `Q`.
pub trait MeasureOf<Q> {
    /// Amount in [`MeasureOf::unit`].
    fn amount(&self) -> f32;

    fn standard_amount(&self) -> f32;

    fn unit(&self) -> &'static dyn Unit<Q>;

    fn get_amount(&self, unit: &dyn Unit<Q>) -> f32 {
        unit.from_standard(self.standard_amount())
    }
}

impl<Q, M: MeasureOf<Q> + ?Sized> MeasureOf<Q> for &M {
    fn amount(&self) -> f32 {
        (**self).amount()
    }

    fn standard_amount(&self) -> f32 {
        (**self).standard_amount()
    }

    fn unit(&self) -> &'static dyn Unit<Q> {
        (**self).unit()
    }
}

/// A physical quantity type.
///
/// Implementations are generated by [`quantity!`](crate::quantity); values
/// are immutable and always hold the amount in the standard unit.
pub trait Quantity: MeasureOf<Self> + Copy + fmt::Debug + Send + Sync + 'static {
    fn info() -> &'static QuantityInfo;

    fn standard_unit() -> &'static dyn Unit<Self>;

    /// Every declared unit, standard unit first.
    fn units() -> &'static [&'static dyn Unit<Self>];

    /// Factory primitive: wraps an amount already in the standard unit.
    fn from_standard_amount(amount: f32) -> Self;

    fn display_name() -> &'static str {
        Self::info().display_name()
    }

    fn dimension() -> Dimension {
        Self::info().dimension()
    }

    fn factory() -> Factory<Self> {
        Factory::new()
    }
}

/// Amount types accepted by constructors. Amounts are stored as `f32`.
pub trait IntoAmount {
    fn into_amount(self) -> f32;
}

impl IntoAmount for f32 {
    fn into_amount(self) -> f32 {
        self
    }
}

impl IntoAmount for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn into_amount(self) -> f32 {
        self as f32
    }
}

#[cfg(feature = "decimal")]
impl IntoAmount for rust_decimal::Decimal {
    fn into_amount(self) -> f32 {
        num_traits::ToPrimitive::to_f32(&self).unwrap_or(f32::NAN)
    }
}

/// Creates values of `Q` in the standard unit or with a preserved unit.
pub struct Factory<Q>(PhantomData<fn() -> Q>);

impl<Q> Factory<Q> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<Q: Quantity> Factory<Q> {
    pub fn create(&self, standard_amount: impl IntoAmount) -> Q {
        Q::from_standard_amount(standard_amount.into_amount())
    }

    pub fn create_in(&self, amount: impl IntoAmount, unit: &dyn Unit<Q>) -> Q {
        Q::from_standard_amount(unit.to_standard(amount.into_amount()))
    }

    pub fn create_preserve_unit(
        &self,
        amount: impl IntoAmount,
        unit: &'static dyn Unit<Q>,
    ) -> Measure<Q> {
        Measure::new(amount, unit)
    }
}

impl<Q> Clone for Factory<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Factory<Q> {}

impl<Q> Default for Factory<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> fmt::Debug for Factory<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Factory")
            .field(&std::any::type_name::<Q>())
            .finish()
    }
}

/// A measure whose quantity is only known at runtime.
pub trait AnyMeasure: fmt::Debug {
    fn amount(&self) -> f32;

    fn standard_amount(&self) -> f32;

    fn any_unit(&self) -> &dyn AnyUnit;

    fn quantity(&self) -> &'static QuantityInfo {
        self.any_unit().quantity()
    }

    /// Amount expressed in `unit`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `unit` belongs to another quantity.
    fn get_amount_any(&self, unit: &dyn AnyUnit) -> Result<f32> {
        check_same_quantity(self.quantity(), unit.quantity())?;
        Ok(unit.from_standard(self.standard_amount()))
    }

    /// Orders two measures that may belong to different quantities.
    ///
    /// Only the SI exponents are checked, so two distinct dimensionless
    /// pseudo-quantities (say `Angle` and `Number`) compare here even though
    /// the typed operators and [`AnyMeasure::get_amount_any`] reject them.
    /// The other amount is read in standard units and converted into this
    /// measure's unit before comparing.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the SI exponents differ.
    fn compare_any(&self, other: &dyn AnyMeasure) -> Result<Option<Ordering>> {
        let (mine, theirs) = (self.quantity(), other.quantity());
        if !mine.dimension().exponents_equal(&theirs.dimension()) {
            return Err(Error::mismatch(mine.display_name(), theirs.display_name()));
        }
        let other_amount = self.any_unit().from_standard(other.standard_amount());
        Ok(self.amount().partial_cmp(&other_amount))
    }
}

pub(crate) fn check_same_quantity(
    expected: &'static QuantityInfo,
    found: &'static QuantityInfo,
) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(Error::mismatch(expected.display_name(), found.display_name()))
    }
}
