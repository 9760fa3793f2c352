//! Iterator adapters between raw amounts and quantity values.

use std::marker::PhantomData;

use crate::quantity::{IntoAmount, MeasureOf, Quantity, Unit};

/// Turns amounts into quantity values.
///
/// ```
/// use measure_core::{AbsorbedDose, AmountsExt};
///
/// let doses: Vec<AbsorbedDose> = [1.0_f32, 2.0]
///     .into_iter()
///     .into_quantities_in(AbsorbedDose::centi_gray())
///     .collect();
/// assert_eq!(doses[1], AbsorbedDose::new(0.02_f32));
/// ```
pub trait AmountsExt: Iterator + Sized
where
    Self::Item: IntoAmount,
{
    /// Amounts already in the standard unit.
    fn into_quantities<Q: Quantity>(self) -> Quantities<'static, Self, Q> {
        Quantities {
            iter: self,
            unit: None,
            _quantity: PhantomData,
        }
    }

    /// Amounts in `unit`, converted to the standard unit.
    fn into_quantities_in<Q: Quantity>(self, unit: &dyn Unit<Q>) -> Quantities<'_, Self, Q> {
        Quantities {
            iter: self,
            unit: Some(unit),
            _quantity: PhantomData,
        }
    }
}

impl<I> AmountsExt for I
where
    I: Iterator,
    I::Item: IntoAmount,
{
}

/// Reads amounts back out of measures.
pub trait MeasuresExt<Q>: Iterator + Sized
where
    Self::Item: MeasureOf<Q>,
{
    fn standard_amounts(self) -> StandardAmounts<Self, Q> {
        StandardAmounts {
            iter: self,
            _quantity: PhantomData,
        }
    }

    fn amounts_in(self, unit: &dyn Unit<Q>) -> AmountsIn<'_, Self, Q> {
        AmountsIn { iter: self, unit }
    }
}

impl<Q, I> MeasuresExt<Q> for I
where
    I: Iterator,
    I::Item: MeasureOf<Q>,
{
}

/// Iterator returned by [`AmountsExt::into_quantities`] and
/// [`AmountsExt::into_quantities_in`].
pub struct Quantities<'a, I, Q> {
    iter: I,
    unit: Option<&'a dyn Unit<Q>>,
    _quantity: PhantomData<fn() -> Q>,
}

impl<I, Q> Iterator for Quantities<'_, I, Q>
where
    I: Iterator,
    I::Item: IntoAmount,
    Q: Quantity,
{
    type Item = Q;

    fn next(&mut self) -> Option<Q> {
        let amount = self.iter.next()?.into_amount();
        let standard = match self.unit {
            Some(unit) => unit.to_standard(amount),
            None => amount,
        };
        Some(Q::from_standard_amount(standard))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator returned by [`MeasuresExt::standard_amounts`].
pub struct StandardAmounts<I, Q> {
    iter: I,
    _quantity: PhantomData<fn() -> Q>,
}

impl<I, Q> Iterator for StandardAmounts<I, Q>
where
    I: Iterator,
    I::Item: MeasureOf<Q>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.iter.next().map(|m| m.standard_amount())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator returned by [`MeasuresExt::amounts_in`].
pub struct AmountsIn<'a, I, Q> {
    iter: I,
    unit: &'a dyn Unit<Q>,
}

impl<I, Q> Iterator for AmountsIn<'_, I, Q>
where
    I: Iterator,
    I::Item: MeasureOf<Q>,
{
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let unit = self.unit;
        self.iter.next().map(|m| m.get_amount(unit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
