//! Configuration loading for the padelscan CLI.

use std::fs;
use std::path::{Path, PathBuf};

use padelscan_providers::ProvidersConfig;
use thiserror::Error;
use tracing::debug;

/// Errors from reading or parsing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for the expected schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Loads the provider configuration.
///
/// An explicit path must exist and parse. Without one, the default location
/// is used when present, otherwise the built-in defaults apply.
pub fn load(explicit: Option<&Path>) -> Result<ProvidersConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    if let Some(path) = default_path() {
        if path.exists() {
            debug!(path = %path.display(), "loading config from default location");
            return load_from(&path);
        }
    }
    Ok(ProvidersConfig::default())
}

/// Loads the configuration from a specific file.
pub fn load_from(path: &Path) -> Result<ProvidersConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// `$XDG_CONFIG_HOME/padelscan/config.toml` (or the platform equivalent).
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("padelscan").join("config.toml"))
}
