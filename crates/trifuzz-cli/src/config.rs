//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimal places for printed bounds; unset prints the shortest exact form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".trifuzz").join("config.toml"))
    }

    /// Load the configuration to use, along with the path it belongs to.
    ///
    /// An explicit path must load. Without one the default path is tried, and
    /// any failure there, a missing home directory included, yields defaults.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        Self::resolve_with(explicit, Self::path())
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        default_path: Result<PathBuf>,
    ) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            let config = Self::load_from(&path)?;
            return Ok((config, Some(path)));
        }

        match default_path {
            Ok(path) => match Self::load_from(&path) {
                Ok(config) => Ok((config, Some(path))),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                    Ok((Self::default(), Some(path)))
                }
            },
            Err(e) => {
                warn!(error = %e, "no default config location, using defaults");
                Ok((Self::default(), None))
            }
        }
    }

    /// Load configuration from `path`, or defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            precision: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
