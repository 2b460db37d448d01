use std::path::PathBuf;

use thiserror::Error;

/// A shape key outside the factory's fixed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shape type: '{key}'")]
pub struct UnknownShape {
    key: String,
}

impl UnknownShape {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
