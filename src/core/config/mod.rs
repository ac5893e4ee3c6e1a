//! core::config
//!
//! Typed view over a git config file.
//!
//! # Overview
//!
//! [`Config`] owns the raw tree decoded from the file and overlays two typed
//! facets on top of it:
//! - **Core**: `core.bare`
//! - **Remotes**: one [`RemoteConfig`] per `[remote "<name>"]` subsection,
//!   carrying `url` and the ordered `fetch` refspecs
//!
//! # Preservation
//!
//! Everything the typed model does not understand stays in the raw tree and is
//! written back untouched by [`Config::marshal`]: other sections, other keys
//! under `[core]`, and other keys inside a remote's subsection.
//!
//! Marshal patches the raw tree in place, so comments and layout of the
//! untouched lines are kept as well.
//!
//! The typed `remotes` map is the single source of truth for which remotes
//! exist. A `[remote "..."]` subsection with no matching remote is dropped on
//! marshal. Remotes new to the file are appended in name order.
//!
//! # Example
//!
//! ```
//! use gitcfg::core::config::{Config, RemoteConfig};
//!
//! let mut config = Config::from_bytes(b"[core]\n\tbare = true\n[user]\n\tname = Jane\n").unwrap();
//! assert!(config.core.is_bare);
//!
//! config.create_remote(RemoteConfig::new("origin", "https://example.com/repo.git")).unwrap();
//!
//! let text = String::from_utf8(config.marshal().unwrap()).unwrap();
//! assert!(text.starts_with("[core]\n\tbare = true\n[user]\n\tname = Jane\n"));
//! assert!(text.contains("\tfetch = +refs/heads/*:refs/remotes/origin/*\n"));
//! ```

pub mod remote;

pub use remote::RemoteConfig;

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::format::{self, DecodeError, EncodeError, RawConfig};

const CORE_SECTION: &str = "core";
pub(crate) const REMOTE_SECTION: &str = "remote";
const BARE_KEY: &str = "bare";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("config invalid remote: key '{key}' does not match remote name '{name}'")]
    InvalidRemoteName { key: String, name: String },

    #[error("remote config: empty name")]
    RemoteConfigEmptyName,

    #[error("remote config: empty URL")]
    RemoteConfigEmptyUrl,

    #[error("remote config not found: {0}")]
    RemoteNotFound(String),

    #[error("remote already exists: {0}")]
    RemoteExists(String),
}

/// Settings from the `[core]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoreConfig {
    /// The repository has no working tree.
    pub is_bare: bool,
}

/// Repository configuration.
///
/// Not synchronized; callers sharing a `Config` across threads must
/// serialize access themselves.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    /// Core variables
    pub core: CoreConfig,

    /// Remotes keyed by name; each key must equal the remote's `name`.
    pub remotes: BTreeMap<String, RemoteConfig>,

    /// Raw tree the typed fields were decoded from. Holds everything the
    /// typed model does not cover.
    #[serde(skip)]
    raw: RawConfig,
}

impl Config {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration from git-config text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Decode` if the text is malformed.
    pub fn from_bytes(data: &[u8]) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        config.unmarshal(data)?;
        Ok(config)
    }

    /// Replace this configuration with the contents of git-config text.
    ///
    /// The raw tree is reset before decoding. If decoding fails the raw tree
    /// is left empty and the typed fields keep their previous values.
    ///
    /// Malformed `fetch` refspecs are dropped rather than reported.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Decode` if the text is malformed.
    pub fn unmarshal(&mut self, data: &[u8]) -> Result<(), ConfigError> {
        self.raw = RawConfig::new();
        self.raw = format::decode(data)?;

        self.unmarshal_core();
        self.unmarshal_remotes();

        debug!(
            is_bare = self.core.is_bare,
            remotes = self.remotes.len(),
            "unmarshaled config"
        );
        Ok(())
    }

    fn unmarshal_core(&mut self) {
        self.core.is_bare = self.raw.get(CORE_SECTION, None, BARE_KEY).as_deref() == Some("true");
    }

    fn unmarshal_remotes(&mut self) {
        self.remotes = self
            .raw
            .subsections(REMOTE_SECTION)
            .iter()
            .map(|name| RemoteConfig::from_raw(&self.raw, name))
            .map(|remote| (remote.name.clone(), remote))
            .collect();
    }

    /// Encode this configuration as git-config text.
    ///
    /// Writes the typed fields into the raw tree first, so subsequent calls
    /// see the updated tree. Remotes new to the file are appended in name
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Encode` if a remote name cannot be written as a
    /// subsection header, or if encoding fails.
    pub fn marshal(&mut self) -> Result<Vec<u8>, ConfigError> {
        self.marshal_core()?;
        self.marshal_remotes()?;

        let data = format::encode_to_vec(&self.raw)?;
        debug!(bytes = data.len(), remotes = self.remotes.len(), "marshaled config");
        Ok(data)
    }

    fn marshal_core(&mut self) -> Result<(), EncodeError> {
        let bare = if self.core.is_bare { "true" } else { "false" };
        self.raw.set(CORE_SECTION, None, BARE_KEY, bare)
    }

    fn marshal_remotes(&mut self) -> Result<(), EncodeError> {
        for remote in self.remotes.values() {
            remote.carry_over(&mut self.raw)?;
        }

        let names: BTreeSet<&str> = self.remotes.values().map(|r| r.name.as_str()).collect();
        for stale in self.raw.subsections(REMOTE_SECTION) {
            if !names.contains(stale.as_str()) {
                debug!(remote = %stale, "dropping remote subsection");
                self.raw.remove_section(REMOTE_SECTION, Some(&stale));
            }
        }

        for remote in self.remotes.values_mut() {
            remote.marshal(&mut self.raw)?;
        }
        Ok(())
    }

    /// Validate every remote and fill in defaults.
    ///
    /// Remotes are checked in name order and the first failure is returned.
    /// Defaults already applied to earlier remotes are kept.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidRemoteName` if a map key differs from the remote's name
    /// - Any error from [`RemoteConfig::validate`]
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        for (key, remote) in self.remotes.iter_mut() {
            if *key != remote.name {
                return Err(ConfigError::InvalidRemoteName {
                    key: key.clone(),
                    name: remote.name.clone(),
                });
            }
            remote.validate()?;
        }
        Ok(())
    }

    /// Look up a remote by name.
    pub fn remote(&self, name: &str) -> Result<&RemoteConfig, ConfigError> {
        self.remotes
            .get(name)
            .ok_or_else(|| ConfigError::RemoteNotFound(name.to_string()))
    }

    /// Validate and add a new remote.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or `ConfigError::RemoteExists` if a remote
    /// with the same name is already configured.
    pub fn create_remote(&mut self, mut remote: RemoteConfig) -> Result<&RemoteConfig, ConfigError> {
        remote.validate()?;
        match self.remotes.entry(remote.name.clone()) {
            Entry::Occupied(entry) => Err(ConfigError::RemoteExists(entry.key().clone())),
            Entry::Vacant(entry) => Ok(&*entry.insert(remote)),
        }
    }

    /// Remove a remote, returning it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RemoteNotFound` if no such remote exists.
    pub fn delete_remote(&mut self, name: &str) -> Result<RemoteConfig, ConfigError> {
        self.remotes
            .remove(name)
            .ok_or_else(|| ConfigError::RemoteNotFound(name.to_string()))
    }

    /// The raw tree backing this configuration.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core && self.remotes == other.remotes
    }
}

impl Eq for Config {}
