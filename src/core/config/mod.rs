//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! colorwork has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Overrides for one working directory
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$COLORWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/colorwork/config.toml`
//! 3. `~/.colorwork/config.toml` (canonical write location)
//!
//! # Project Config Locations
//!
//! Searched in order:
//! 1. `.colorwork/config.toml` (canonical)
//! 2. `.colorwork.toml` (compatibility, warns)
//!
//! # Example
//!
//! ```no_run
//! use colorwork::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! println!("Self-loops: {}", config.self_loops());
//! println!("Order: {}", config.node_order());
//! ```

pub mod schema;

pub use schema::{
    ColoringDefaults, FlightsConfig, GlobalConfig, OutputDefaults, OutputFormat, ProjectConfig,
};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::engine::modes::{EngineOptions, NodeOrder, SelfLoopPolicy};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project config overrides
/// global config, which overrides defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if found)
    pub project: Option<ProjectConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads project config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration from an explicit global file and project directory.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        // Run from $HOME, the global file is also the project file; read it as project only
        let global_path = match (global_path, project_dir) {
            (Some(path), Some(dir)) if Self::is_project_file(path, dir) => None,
            _ => global_path,
        };

        let global = match global_path {
            Some(path) if path.exists() => Self::read_config::<GlobalConfig>(path)?,
            _ => GlobalConfig::default(),
        };
        let global_path = global_path.filter(|p| p.exists()).map(Path::to_path_buf);

        let (project, project_path) = match project_dir {
            Some(dir) => Self::load_project(dir, &mut warnings)?,
            None => (None, None),
        };

        if let Some(ref p) = project {
            p.validate()?;
        }

        debug!(
            global = ?global_path,
            project = ?project_path,
            "loaded configuration"
        );

        Ok(ConfigLoadResult {
            config: Config {
                global,
                project,
                global_path,
                project_path,
            },
            warnings,
        })
    }

    /// Locate the global config file, if any exists.
    fn find_global() -> Option<PathBuf> {
        // 1. Check $COLORWORK_CONFIG
        if let Ok(path) = std::env::var("COLORWORK_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/colorwork/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("colorwork/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.colorwork/config.toml
        dirs::home_dir()
            .map(|home| home.join(".colorwork/config.toml"))
            .filter(|path| path.exists())
    }

    /// Whether `path` is one of the project config locations under `dir`.
    fn is_project_file(path: &Path, dir: &Path) -> bool {
        Self::same_file(path, &Self::project_config_path(dir))
            || Self::same_file(path, &dir.join(".colorwork.toml"))
    }

    fn same_file(a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }

    /// Load project configuration from standard locations.
    fn load_project(
        dir: &Path,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Option<ProjectConfig>, Option<PathBuf>), ConfigError> {
        // 1. Check .colorwork/config.toml (canonical)
        let canonical = Self::project_config_path(dir);
        if canonical.exists() {
            let config = Self::read_config(&canonical)?;
            return Ok((Some(config), Some(canonical)));
        }

        // 2. Check .colorwork.toml (compatibility)
        let compat = dir.join(".colorwork.toml");
        if compat.exists() {
            warnings.push(ConfigWarning {
                message: format!(
                    "Using deprecated config location. Please move to '{}'",
                    canonical.display()
                ),
                path: compat.clone(),
            });
            let config = Self::read_config(&compat)?;
            return Ok((Some(config), Some(compat)));
        }

        Ok((None, None))
    }

    /// Read and parse a config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.colorwork/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".colorwork/config.toml"))
    }

    /// Get the canonical path for project config.
    ///
    /// Returns `.colorwork/config.toml` relative to the given directory.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(".colorwork/config.toml")
    }

    /// Write project config atomically.
    ///
    /// Creates parent directories if needed. Uses atomic write
    /// (write to temp file, then rename) to prevent corruption.
    pub fn write_project(dir: &Path, config: &ProjectConfig) -> Result<PathBuf, ConfigError> {
        config.validate()?;
        let path = Self::project_config_path(dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically.
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        // Temp file in the same directory so the rename stays on one filesystem
        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    fn coloring_value<T>(&self, pick: impl Fn(&ColoringDefaults) -> Option<T>) -> Option<T> {
        self.project
            .as_ref()
            .and_then(|p| p.coloring.as_ref())
            .and_then(&pick)
            .or_else(|| self.global.coloring.as_ref().and_then(&pick))
    }

    fn output_value<T>(&self, pick: impl Fn(&OutputDefaults) -> Option<T>) -> Option<T> {
        self.project
            .as_ref()
            .and_then(|p| p.output.as_ref())
            .and_then(&pick)
            .or_else(|| self.global.output.as_ref().and_then(&pick))
    }

    /// Get the self-loop policy.
    ///
    /// Defaults to `ignore` if not configured.
    pub fn self_loops(&self) -> SelfLoopPolicy {
        self.coloring_value(|c| c.self_loops).unwrap_or_default()
    }

    /// Get the node processing order.
    ///
    /// Defaults to `first-appearance` if not configured.
    pub fn node_order(&self) -> NodeOrder {
        self.coloring_value(|c| c.node_order).unwrap_or_default()
    }

    /// Engine options built from the configured values.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions::default()
            .self_loops(self.self_loops())
            .node_order(self.node_order())
    }

    /// Get the output format.
    ///
    /// Defaults to `text` if not configured.
    pub fn output_format(&self) -> OutputFormat {
        self.output_value(|o| o.format).unwrap_or_default()
    }

    /// Check if colorings are verified before printing.
    ///
    /// Defaults to `true` if not configured.
    pub fn verify(&self) -> bool {
        self.output_value(|o| o.verify).unwrap_or(true)
    }

    /// Get the configured flight CSV path.
    ///
    /// Relative paths are resolved against the project config's directory.
    pub fn flights_csv(&self) -> Option<PathBuf> {
        let csv = self
            .project
            .as_ref()
            .and_then(|p| p.flights.as_ref())
            .and_then(|f| f.csv.as_deref())?;
        let csv = PathBuf::from(csv);
        if csv.is_absolute() {
            return Some(csv);
        }
        let base = self
            .project_path
            .as_deref()
            .and_then(Path::parent)
            .map(|dir| {
                // .colorwork/config.toml lives one level below the project
                if dir.file_name().is_some_and(|n| n == ".colorwork") {
                    dir.parent().unwrap_or(dir)
                } else {
                    dir
                }
            });
        Some(match base {
            Some(base) => base.join(csv),
            None => csv,
        })
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
