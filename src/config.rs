//! Optional demo settings, read from `patterns.toml` when present.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Style the section headers when stdout is a color terminal.
    /// `false` turns styling off everywhere.
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// A missing file is not an error: defaults apply.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::io(path, err)),
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_path(Path::new(CONFIG_FILE))
    }
}
