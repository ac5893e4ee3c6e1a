//! storage::traits
//!
//! Config storage trait definition.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::config::{Config, ConfigError};

/// Errors from config storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Something that can load and save a repository configuration.
pub trait ConfigStorer {
    /// Load the stored configuration, or an empty one if nothing is stored.
    fn config(&self) -> Result<Config, StorageError>;

    /// Validate and store a configuration, replacing any previous one.
    fn set_config(&mut self, config: Config) -> Result<(), StorageError>;
}
