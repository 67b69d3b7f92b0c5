//! Front-end configuration
//!
//! ```toml
//! signed = true
//! radix = 16
//! history = false
//! prompt = "n64> "
//! ```

use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "N64_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid config {}: radix must be 2, 8, 10 or 16, got {radix}", path.display())]
    Radix { path: PathBuf, radix: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Mode for values built without an explicit flag
    pub signed: bool,
    /// Radix used when echoing values
    pub radix: u32,
    /// Keep REPL history between runs
    pub history: bool,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            signed: false,
            radix: 10,
            history: true,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    pub fn mode(&self) -> Mode {
        Mode::from_signed(self.signed)
    }

    pub fn parse(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        if !crate::value::RADIXES.contains(&config.radix) {
            return Err(ConfigError::Radix {
                path: path.to_path_buf(),
                radix: config.radix,
            });
        }
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(path, &text)
    }

    /// Load from `path`, else from `$N64_CONFIG`, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match path.or(env_path.as_deref()) {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}
