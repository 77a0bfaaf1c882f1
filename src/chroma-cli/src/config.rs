//! Configuration file loading.
//!
//! The config file is TOML. Lookup order:
//! 1. `--config <path>`
//! 2. `CHROMA_CONFIG` environment variable
//! 3. `<config dir>/chroma/config.toml`
//!
//! A missing file is not an error; every key falls back to its default.

use std::path::{Path, PathBuf};

use chroma_core::BlueprintMapping;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::logging::LogLevel;
use crate::report::OutputFormat;

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable for custom config file path.
pub const CHROMA_CONFIG_ENV: &str = "CHROMA_CONFIG";

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChromaConfig {
    /// Report format when `--json` is not given.
    pub output: OutputFormat,

    /// Blueprint normalization marked as preferred in reports and used to
    /// read `from-blueprint` input.
    pub blueprint_mapping: BlueprintMapping,

    /// Reject malformed or out-of-range input instead of falling back.
    pub strict: bool,

    /// Log level used when no flag or environment variable overrides it.
    pub log_level: Option<LogLevel>,
}

impl ChromaConfig {
    /// Parses a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Default config location under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("chroma").join(CONFIG_FILE))
}

/// Picks the config file to load, see the module docs for the order.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(val) = std::env::var(CHROMA_CONFIG_ENV)
        && !val.is_empty()
    {
        let path = PathBuf::from(&val);
        debug!(path = %path.display(), "Using CHROMA_CONFIG");
        return Some(path);
    }

    default_config_path()
}

/// Loads the config at `path`, returning defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<ChromaConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(ChromaConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = ChromaConfig::from_toml(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}

/// Resolves the path and loads it; no resolvable path means defaults.
pub fn load(explicit: Option<&Path>) -> Result<ChromaConfig, ConfigError> {
    match resolve_config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(ChromaConfig::default()),
    }
}
