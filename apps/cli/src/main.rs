//! `measure`: unit conversion and quantity catalog inspection.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::commands::OutputFormat;
use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "measure", version, about = "Convert amounts between units of physical quantities")]
struct Cli {
    /// Configuration file (defaults to ./measure.toml when present)
    #[arg(long, global = true, env = "MEASURE_CONFIG")]
    config: Option<PathBuf>,

    /// Decimal places for printed amounts
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the known quantities with their dimension and standard unit
    Quantities,
    /// List the units of one quantity
    Units {
        /// Quantity name, e.g. "absorbed dose"
        quantity: String,
    },
    /// Convert an amount from one unit symbol to another
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f32,
        from: String,
        to: String,
        /// Restrict symbol lookup to one quantity
        #[arg(long, short)]
        quantity: Option<String>,
    },
    /// Print the dimensionless pseudo-dimensions and their primes
    Dimensions,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.precision, cli.json_logs);

    logging::init_logging(&config).context("Failed to initialize logging")?;
    tracing::debug!(command = ?cli.command, "Starting");

    let output = match &cli.command {
        Command::Quantities => commands::quantities(cli.format)?,
        Command::Units { quantity } => commands::units(quantity, cli.format)?,
        Command::Convert {
            amount,
            from,
            to,
            quantity,
        } => commands::convert(
            *amount,
            from,
            to,
            quantity.as_deref(),
            config.precision,
            cli.format,
        )?,
        Command::Dimensions => commands::dimensions(cli.format)?,
    };

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_with_negative_amount() {
        let cli = Cli::try_parse_from(["measure", "convert", "-40", "°C", "°F"]).unwrap();
        match cli.command {
            Command::Convert { amount, from, to, quantity } => {
                assert_eq!(amount, -40.0);
                assert_eq!(from, "°C");
                assert_eq!(to, "°F");
                assert_eq!(quantity, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "measure",
            "convert",
            "1",
            "Gy",
            "mGy",
            "--precision",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.precision, Some(3));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
