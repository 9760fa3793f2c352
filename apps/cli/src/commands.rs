//! Subcommand implementations. Each returns the text to print.

use anyhow::{bail, Context};
use clap::ValueEnum;
use measure_core::registry;
use measure_core::{find_quantity, AnyUnit, QuantityEntry};
use serde_json::json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn format_amount(amount: f32, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => format!("{amount:.precision$}"),
        None => amount.to_string(),
    }
}

fn dimension_text(entry: &QuantityEntry) -> String {
    let dimension = entry.info().dimension();
    if dimension.is_dimensionless() {
        "1".to_string()
    } else {
        dimension.to_string()
    }
}

pub fn quantities(format: OutputFormat) -> anyhow::Result<String> {
    let entries = measure_core::quantities();
    match format {
        OutputFormat::Text => {
            let width = entries
                .iter()
                .map(|e| e.display_name().len())
                .max()
                .unwrap_or(0);
            Ok(entries
                .iter()
                .map(|e| {
                    format!(
                        "{:<width$}  {:<12}  {}",
                        e.display_name(),
                        dimension_text(e),
                        e.standard_unit().symbol()
                    )
                    .trim_end()
                    .to_string()
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        OutputFormat::Json => {
            let list: Vec<_> = entries
                .iter()
                .map(|e| {
                    json!({
                        "name": e.display_name(),
                        "dimension": e.info().dimension().exponents(),
                        "differentiator": e.info().dimension().differentiator(),
                        "standard_unit": e.standard_unit().symbol(),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&list)?)
        }
    }
}

pub fn units(quantity: &str, format: OutputFormat) -> anyhow::Result<String> {
    let entry =
        find_quantity(quantity).with_context(|| format!("Unknown quantity '{quantity}'"))?;
    let unit_text = |unit: &&'static dyn AnyUnit| {
        let to_standard = unit.to_standard(1.0);
        if unit.is_standard() {
            format!("{}  (standard)", unit.symbol())
        } else {
            format!(
                "{}  = {} {}",
                unit.symbol(),
                to_standard,
                entry.standard_unit().symbol()
            )
        }
    };
    match format {
        OutputFormat::Text => Ok(entry
            .units()
            .iter()
            .map(unit_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let list: Vec<_> = entry
                .units()
                .iter()
                .map(|unit| {
                    json!({
                        "symbol": unit.symbol(),
                        "standard": unit.is_standard(),
                        "one_in_standard": unit.to_standard(1.0),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&json!({
                "quantity": entry.display_name(),
                "units": list,
            }))?)
        }
    }
}

pub fn convert(
    amount: f32,
    from: &str,
    to: &str,
    quantity: Option<&str>,
    precision: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if !amount.is_finite() {
        bail!("Amount must be a finite number, got {amount}");
    }
    let converted = match quantity {
        Some(name) => find_quantity(name)
            .with_context(|| format!("Unknown quantity '{name}'"))?
            .convert(amount, from, to)?,
        None => measure_core::convert(amount, from, to)?,
    };
    tracing::debug!(amount, from, to, converted, "Conversion complete");

    match format {
        OutputFormat::Text => Ok(format!("{} {to}", format_amount(converted, precision))
            .trim_end()
            .to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "amount": amount,
            "from": from,
            "to": to,
            "result": converted,
        }))?),
    }
}

pub fn dimensions(format: OutputFormat) -> anyhow::Result<String> {
    let registry = registry::builtin();
    match format {
        OutputFormat::Text => Ok(registry
            .iter()
            .map(|pd| format!("{:<32}  {}", pd.name, pd.prime))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let list: Vec<_> = registry
                .iter()
                .map(|pd| json!({ "name": pd.name, "prime": pd.prime }))
                .collect();
            Ok(serde_json::to_string_pretty(&list)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantities_text_lists_dose() {
        let out = quantities(OutputFormat::Text).unwrap();
        let dose = out
            .lines()
            .find(|l| l.starts_with("Absorbed Dose"))
            .unwrap();
        assert!(dose.contains("m^2 s^-2"));
        assert!(dose.ends_with("Gy"));
        assert_eq!(out.lines().count(), measure_core::quantities().len());
    }

    #[test]
    fn test_quantities_json() {
        let out = quantities(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let angle = value
            .as_array()
            .unwrap()
            .iter()
            .find(|q| q["name"] == "Angle")
            .unwrap();
        assert_eq!(angle["standard_unit"], "rad");
        assert_eq!(angle["differentiator"], 2.0);
    }

    #[test]
    fn test_units_of_quantity() {
        let out = units("absorbed dose", OutputFormat::Text).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Gy  (standard)"));
        assert!(out.lines().any(|l| l == "rad  = 0.01 Gy"));
        assert!(units("luminosity", OutputFormat::Text).is_err());
    }

    #[test]
    fn test_convert_text() {
        assert_eq!(
            convert(250.0, "cGy", "Gy", None, None, OutputFormat::Text).unwrap(),
            "2.5 Gy"
        );
        assert_eq!(
            convert(1.0, "Gy", "mGy", None, Some(2), OutputFormat::Text).unwrap(),
            "1000.00 mGy"
        );
    }

    #[test]
    fn test_convert_with_quantity_disambiguates() {
        assert_eq!(
            convert(1.0, "rad", "rad", Some("Angle"), None, OutputFormat::Text).unwrap(),
            "1 rad"
        );
        assert!(convert(1.0, "rad", "rad", None, None, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_convert_rejects_mismatch_and_nan() {
        let err = convert(1.0, "Gy", "m", None, None, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(convert(f32::NAN, "Gy", "mGy", None, None, OutputFormat::Text).is_err());
    }

    #[test]
    fn test_dimensions_in_declaration_order() {
        let out = dimensions(OutputFormat::Text).unwrap();
        let first: Vec<(&str, &str)> = out
            .lines()
            .map(|l| {
                let mut parts = l.split_whitespace();
                (parts.next().unwrap(), parts.next().unwrap())
            })
            .collect();
        assert_eq!(first[0], ("Radian", "2"));
        assert_eq!(first[6], ("Meterset", "17"));
    }
}
