//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$COLORWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/colorwork/config.toml`
//! 3. `~/.colorwork/config.toml` (canonical write location)
//!
//! # Project Config
//!
//! Located at `.colorwork/config.toml` (canonical) under the working directory.
//!
//! # Validation
//!
//! Enumerated values are checked by serde while parsing. Remaining values are
//! validated after parsing (e.g. a configured CSV path cannot be empty).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigError;
use crate::engine::modes::{NodeOrder, SelfLoopPolicy};

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// [coloring]
/// self_loops = "ignore"
/// node_order = "first-appearance"
///
/// [output]
/// format = "text"
/// verify = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Coloring defaults
    pub coloring: Option<ColoringDefaults>,

    /// Output defaults
    pub output: Option<OutputDefaults>,
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// [coloring]
/// self_loops = "reject"
///
/// [flights]
/// csv = "data/flight_list.csv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Coloring overrides
    pub coloring: Option<ColoringDefaults>,

    /// Output overrides
    pub output: Option<OutputDefaults>,

    /// Flight data settings
    pub flights: Option<FlightsConfig>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(flights) = &self.flights {
            flights.validate()?;
        }
        Ok(())
    }
}

/// Coloring defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ColoringDefaults {
    /// Self-loop handling
    pub self_loops: Option<SelfLoopPolicy>,

    /// Node processing order
    pub node_order: Option<NodeOrder>,
}

/// Output defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputDefaults {
    /// Rendering of results
    pub format: Option<OutputFormat>,

    /// Verify every coloring before printing it
    pub verify: Option<bool>,
}

/// Flight data settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FlightsConfig {
    /// Default CSV file, relative to the project directory
    pub csv: Option<String>,
}

impl FlightsConfig {
    /// Validate flight settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(csv) = &self.csv {
            if csv.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "flights.csv cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// How results are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "invalid output format '{}', must be one of: text, json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
