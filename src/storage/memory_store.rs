//! storage::memory_store
//!
//! In-memory config storage.

use tracing::debug;

use super::traits::{ConfigStorer, StorageError};
use crate::core::config::Config;

/// Keeps a configuration in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    config: Option<Config>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfigStorer for MemoryStorage {
    fn config(&self) -> Result<Config, StorageError> {
        Ok(self.config.clone().unwrap_or_default())
    }

    fn set_config(&mut self, mut config: Config) -> Result<(), StorageError> {
        config.validate()?;
        debug!(remotes = config.remotes.len(), "stored config in memory");
        self.config = Some(config);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{ConfigError, RemoteConfig};

    #[test]
    fn empty_store_returns_new_config() {
        let store = MemoryStorage::new();
        assert_eq!(store.config().unwrap(), Config::new());
    }

    #[test]
    fn set_validates_and_defaults() {
        let mut store = MemoryStorage::new();
        let mut config = Config::new();
        config
            .remotes
            .insert("origin".into(), RemoteConfig::new("origin", "u"));

        store.set_config(config).unwrap();
        let stored = store.config().unwrap();
        assert_eq!(stored.remote("origin").unwrap().fetch.len(), 1);
    }

    #[test]
    fn invalid_config_not_stored() {
        let mut store = MemoryStorage::new();
        let mut config = Config::new();
        config.remotes.insert("a".into(), RemoteConfig::new("b", "u"));

        let err = store.set_config(config).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Config(ConfigError::InvalidRemoteName { .. })
        ));
        assert!(store.config().unwrap().remotes.is_empty());
    }

    #[test]
    fn raw_content_kept() {
        let mut store = MemoryStorage::new();
        let config = Config::from_bytes(b"[user]\n\tname = Jane\n").unwrap();
        store.set_config(config).unwrap();

        let mut stored = store.config().unwrap();
        let text = String::from_utf8(stored.marshal().unwrap()).unwrap();
        assert!(text.contains("[user]\n\tname = Jane\n"));
    }
}
