//! Runtime lookup over the shipped quantities and their units.
//!
//! Lookups are by exact unit symbol. Nothing here parses unit expressions.

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::quantities::{
    AbsorbedDose, Activity, Angle, Energy, Length, Mass, Number, RelativeBiologicalEffectiveness,
    SolidAngle, Temperature, Time,
};
use crate::quantity::{AnyUnit, Quantity, QuantityInfo, Unit};

/// One quantity and its declared units, standard unit first.
#[derive(Debug)]
pub struct QuantityEntry {
    info: &'static QuantityInfo,
    units: Vec<&'static dyn AnyUnit>,
}

impl QuantityEntry {
    fn of<Q: Quantity>() -> Self {
        Self {
            info: Q::info(),
            units: Q::units().iter().map(|unit| Unit::as_any(*unit)).collect(),
        }
    }

    pub fn info(&self) -> &'static QuantityInfo {
        self.info
    }

    pub fn display_name(&self) -> &'static str {
        self.info.display_name()
    }

    pub fn units(&self) -> &[&'static dyn AnyUnit] {
        &self.units
    }

    pub fn standard_unit(&self) -> &'static dyn AnyUnit {
        self.units[0]
    }

    pub fn unit(&self, symbol: &str) -> Option<&'static dyn AnyUnit> {
        self.units.iter().copied().find(|unit| unit.symbol() == symbol)
    }

    /// Converts `amount` between two units of this quantity.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownUnit`] if either symbol is not a unit of this quantity.
    pub fn convert(&self, amount: f32, from: &str, to: &str) -> Result<f32> {
        let from_unit = self
            .unit(from)
            .ok_or_else(|| Error::UnknownUnit(from.to_string()))?;
        let to_unit = self
            .unit(to)
            .ok_or_else(|| Error::UnknownUnit(to.to_string()))?;
        Ok(to_unit.from_standard(from_unit.to_standard(amount)))
    }
}

static CATALOG: Lazy<Vec<QuantityEntry>> = Lazy::new(|| {
    let entries = vec![
        QuantityEntry::of::<Number>(),
        QuantityEntry::of::<AbsorbedDose>(),
        QuantityEntry::of::<Length>(),
        QuantityEntry::of::<Mass>(),
        QuantityEntry::of::<Time>(),
        QuantityEntry::of::<Angle>(),
        QuantityEntry::of::<SolidAngle>(),
        QuantityEntry::of::<Temperature>(),
        QuantityEntry::of::<RelativeBiologicalEffectiveness>(),
        QuantityEntry::of::<Energy>(),
        QuantityEntry::of::<Activity>(),
    ];
    tracing::debug!(
        quantities = entries.len(),
        units = entries.iter().map(|e| e.units.len()).sum::<usize>(),
        "quantity catalog built"
    );
    entries
});

/// Every shipped quantity.
pub fn quantities() -> &'static [QuantityEntry] {
    &CATALOG
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Finds a quantity by display name, ignoring case, spaces, `_` and `-`, so
/// `"Absorbed Dose"`, `"absorbed_dose"` and `"AbsorbedDose"` all match.
pub fn find_quantity(name: &str) -> Option<&'static QuantityEntry> {
    let wanted = normalize(name);
    quantities()
        .iter()
        .find(|entry| normalize(entry.display_name()) == wanted)
}

/// All units carrying `symbol`. Symbols are not unique across quantities:
/// `rad` is both a dose unit and the radian.
pub fn find_units(symbol: &str) -> Vec<&'static dyn AnyUnit> {
    quantities()
        .iter()
        .filter_map(|entry| entry.unit(symbol))
        .collect()
}

/// Converts `amount` from the unit `from` into the unit `to`.
///
/// When a symbol is shared by several quantities the pair is resolved to the
/// one quantity both symbols belong to.
///
/// # Errors
///
/// * [`Error::UnknownUnit`] if a symbol names no shipped unit.
/// * [`Error::DimensionMismatch`] if the two units measure different
///   quantities.
/// * [`Error::InvalidArgument`] if the pair is ambiguous.
pub fn convert(amount: f32, from: &str, to: &str) -> Result<f32> {
    let sources = find_units(from);
    if sources.is_empty() {
        return Err(Error::UnknownUnit(from.to_string()));
    }
    let targets = find_units(to);
    if targets.is_empty() {
        return Err(Error::UnknownUnit(to.to_string()));
    }

    let mut pairs = sources.iter().flat_map(|source| {
        targets
            .iter()
            .filter(move |target| source.quantity() == target.quantity())
            .map(move |target| (*source, *target))
    });

    match (pairs.next(), pairs.next()) {
        (Some((source, target)), None) => {
            let converted = target.from_standard(source.to_standard(amount));
            tracing::trace!(amount, from, to, converted, "converted");
            Ok(converted)
        }
        (Some(_), Some(_)) => Err(Error::InvalidArgument(format!(
            "'{from}' to '{to}' is ambiguous across quantities"
        ))),
        (None, _) => Err(Error::mismatch(
            sources[0].quantity().display_name(),
            targets[0].quantity().display_name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_quantity_once() {
        let names: Vec<&str> = quantities().iter().map(|e| e.display_name()).collect();
        assert_eq!(names.len(), 11);
        assert!(names.contains(&"Absorbed Dose"));
        let mut unique = names.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_standard_unit_first() {
        for entry in quantities() {
            assert!(entry.standard_unit().is_standard(), "{}", entry.display_name());
            assert_eq!(entry.standard_unit().quantity(), entry.info());
        }
    }

    #[test]
    fn test_find_quantity_is_lenient_on_spelling() {
        assert!(find_quantity("Absorbed Dose").is_some());
        assert!(find_quantity("absorbed_dose").is_some());
        assert!(find_quantity("AbsorbedDose").is_some());
        assert!(find_quantity("Luminosity").is_none());
    }

    #[test]
    fn test_find_units_across_quantities() {
        let rads = find_units("rad");
        let owners: Vec<&str> = rads.iter().map(|u| u.quantity().display_name()).collect();
        assert_eq!(owners, vec!["Absorbed Dose", "Angle"]);
        assert!(find_units("furlong").is_empty());
    }

    #[test]
    fn test_convert_between_symbols() {
        assert_eq!(convert(1.0, "Gy", "mGy").unwrap(), 1000.0);
        assert_eq!(convert(250.0, "cGy", "Gy").unwrap(), 2.5);
        assert!((convert(2.0, "h", "min").unwrap() - 120.0).abs() < 1e-4);
        assert!((convert(0.0, "°C", "K").unwrap() - 273.15).abs() < 1e-4);
    }

    #[test]
    fn test_convert_resolves_shared_symbols() {
        assert_eq!(convert(100.0, "rad", "Gy").unwrap(), 1.0);
        let degrees = convert(1.0, "rad", "°").unwrap();
        assert!((degrees - 57.29578).abs() < 1e-3);
        assert!(matches!(
            convert(1.0, "rad", "rad"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_convert_errors() {
        assert_eq!(
            convert(1.0, "furlong", "m"),
            Err(Error::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert(1.0, "m", "furlong"),
            Err(Error::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            convert(1.0, "Gy", "m"),
            Err(Error::DimensionMismatch {
                expected: "Absorbed Dose",
                found: "Length",
            })
        );
    }

    #[test]
    fn test_entry_convert() {
        let angle = find_quantity("Angle").unwrap();
        assert!((angle.convert(180.0, "°", "rad").unwrap() - std::f32::consts::PI).abs() < 1e-5);
        assert_eq!(
            angle.convert(1.0, "Gy", "rad"),
            Err(Error::UnknownUnit("Gy".to_string()))
        );
    }
}
