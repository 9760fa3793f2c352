//! Layered CLI configuration.
//!
//! Sources, lowest precedence first: built-in defaults, an optional TOML
//! file (`measure.toml` in the working directory unless `--config` names
//! another), `MEASURE_*` environment variables, then command-line flags.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "measure.toml";
pub const ENV_PREFIX: &str = "MEASURE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Default filter level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    pub log_json: bool,
    /// Decimal places for printed amounts; shortest round-trip form if unset.
    pub precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_json: false,
            precision: None,
        }
    }
}

impl Config {
    /// Loads configuration from the file (if present) and the process
    /// environment.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(file: Option<&Path>, environment: config::Environment) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_json", defaults.log_json)?;

        builder = match file {
            // An explicit path must exist.
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(environment.try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Applies command-line flags on top of the loaded values.
    pub fn with_overrides(mut self, precision: Option<usize>, json_logs: bool) -> Self {
        if precision.is_some() {
            self.precision = precision;
        }
        if json_logs {
            self.log_json = true;
        }
        self
    }
}
