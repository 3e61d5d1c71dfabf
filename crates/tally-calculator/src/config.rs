//! Calculator configuration
//!
//! Loaded from a TOML file; every section and field is optional and falls
//! back to the defaults below.
//!
//! ```toml
//! [parser]
//! max_expression_length = 256
//!
//! [display]
//! group_separator = "."
//! decimal_separator = ","
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "TALLY_CONFIG_PATH";

/// Environment variable overriding `parser.max_expression_length`
pub const MAX_EXPRESSION_LENGTH_ENV: &str = "TALLY_MAX_EXPRESSION_LENGTH";

const DEFAULT_CONFIG_PATH: &str = "tally.toml";

/// Amount parser limits
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    #[serde(default = "default_max_expression_length")]
    pub max_expression_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_expression_length: default_max_expression_length() }
    }
}

/// Amount rendering for input fields and suggestion chips
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_group_separator")]
    pub group_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

/// Top-level calculator configuration
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CalculatorConfig {
    /// Load configuration from `TALLY_CONFIG_PATH` (default `tally.toml`).
    ///
    /// A missing or invalid file is logged and replaced by the defaults;
    /// environment overrides are applied either way.
    pub fn load() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Same as [`CalculatorConfig::load`] with an arbitrary variable lookup
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_path =
            lookup(CONFIG_PATH_ENV).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let config = match Self::from_file(&config_path) {
            Ok(config) => {
                info!(path = %config_path, "Loaded calculator configuration");
                config
            }
            Err(err) => {
                warn!(
                    path = %config_path,
                    category = err.category(),
                    error = %err,
                    "Using default calculator configuration"
                );
                Self::default()
            }
        };

        config.apply_overrides(&lookup)
    }

    /// Read and validate a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `TALLY_*` environment variable overrides
    pub fn apply_env_overrides(self) -> Self {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `TALLY_*` overrides read through `lookup`; invalid values are
    /// logged and ignored
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(max_len) = lookup(MAX_EXPRESSION_LENGTH_ENV) {
            match max_len.parse::<usize>() {
                Ok(value) if value > 0 => self.parser.max_expression_length = value,
                _ => warn!(
                    variable = MAX_EXPRESSION_LENGTH_ENV,
                    value = %max_len,
                    "Ignoring invalid override"
                ),
            }
        }
        self
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.max_expression_length == 0 {
            return Err(ConfigError::Invalid {
                setting: "parser.max_expression_length",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.display.group_separator.is_empty() {
            return Err(ConfigError::Invalid {
                setting: "display.group_separator",
                message: "must not be empty".to_string(),
            });
        }
        if self.display.decimal_separator.is_empty() {
            return Err(ConfigError::Invalid {
                setting: "display.decimal_separator",
                message: "must not be empty".to_string(),
            });
        }
        if self.display.group_separator == self.display.decimal_separator {
            return Err(ConfigError::Invalid {
                setting: "display.decimal_separator",
                message: "must differ from display.group_separator".to_string(),
            });
        }
        Ok(())
    }
}

fn default_max_expression_length() -> usize {
    256
}
fn default_group_separator() -> String {
    ".".to_string()
}
fn default_decimal_separator() -> String {
    ",".to_string()
}
