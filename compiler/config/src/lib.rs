#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! opgen Configuration
//!
//! This crate provides the configuration surface consumed by the generator
//! pipeline:
//! - Registry acquisition settings (explicit snapshot path, live-runtime
//!   preference)
//! - Endpoint-metadata location
//! - Output directory and emission switches
//!
//! Configuration is stored in TOML format and can be loaded from files or
//! created with sensible defaults. The CLI layer owns flag parsing and hands
//! the resolved value into the pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Generator configuration, passed by value into the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// If set, parse this text snapshot instead of fetching the live registry
    #[serde(default)]
    pub ops_snapshot: Option<PathBuf>,
    /// If set, scan endpoint-metadata files here to enrich naming and groups
    #[serde(default)]
    pub api_def_dir: Option<PathBuf>,
    /// Where to write the plan, generated wrappers, and the coverage report
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    /// Try the live runtime registry first; without it (or on its failure)
    /// the bundled snapshot is used
    #[serde(default = "default_prefer_runtime")]
    pub prefer_runtime: bool,
    /// Emit typed wrapper source and the coverage report
    #[serde(default)]
    pub emit_wrappers: bool,
    /// Verbose stage tracing to stderr
    #[serde(default)]
    pub verbose: bool,
}

fn default_out_dir() -> PathBuf { PathBuf::from("generated") }

fn default_prefer_runtime() -> bool { true }

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            ops_snapshot: None,
            api_def_dir: None,
            out_dir: default_out_dir(),
            prefer_runtime: true,
            emit_wrappers: false,
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/opgen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("opgen");
        Ok(config_dir.join("config.toml"))
    }
}
