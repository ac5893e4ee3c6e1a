//! core::config::remote
//!
//! Typed `[remote "<name>"]` subsections.

use serde::Serialize;
use tracing::warn;

use super::{ConfigError, REMOTE_SECTION};
use crate::core::refspec::RefSpec;
use crate::format::{EncodeError, RawConfig};

const URL_KEY: &str = "url";
const FETCH_KEY: &str = "fetch";

/// Configuration for one remote repository.
///
/// # Example
///
/// ```
/// use gitcfg::core::config::RemoteConfig;
///
/// let mut remote = RemoteConfig::new("origin", "https://example.com/repo.git");
/// remote.validate().unwrap();
/// assert_eq!(remote.fetch[0].as_str(), "+refs/heads/*:refs/remotes/origin/*");
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct RemoteConfig {
    /// Name of the remote
    pub name: String,

    /// URL of the remote repository
    pub url: String,

    /// Refspecs used by fetch, in configured order
    pub fetch: Vec<RefSpec>,

    /// Subsection this remote was decoded from or last encoded into. Keys
    /// other than `url` and `fetch` found there are kept on marshal, also
    /// when the remote has been renamed since.
    #[serde(skip)]
    origin: Option<String>,
}

impl RemoteConfig {
    /// Create a remote with no fetch refspecs.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Replace the fetch refspecs.
    pub fn with_fetch(mut self, fetch: impl IntoIterator<Item = RefSpec>) -> Self {
        self.fetch = fetch.into_iter().collect();
        self
    }

    /// Check the required fields without modifying anything.
    ///
    /// The name is checked before the URL.
    ///
    /// # Errors
    ///
    /// - `ConfigError::RemoteConfigEmptyName` if `name` is empty
    /// - `ConfigError::RemoteConfigEmptyUrl` if `url` is empty
    pub fn check_required(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::RemoteConfigEmptyName);
        }
        if self.url.is_empty() {
            return Err(ConfigError::RemoteConfigEmptyUrl);
        }
        Ok(())
    }

    /// Fill in the default fetch refspec when none is configured.
    pub fn apply_defaults(&mut self) {
        if self.fetch.is_empty() {
            self.fetch = vec![RefSpec::default_fetch(&self.name)];
        }
    }

    /// Check required fields, then apply defaults.
    ///
    /// Defaults are only applied when every check passes.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.check_required()?;
        self.apply_defaults();
        Ok(())
    }

    /// Build a remote from its `[remote "<name>"]` subsection.
    pub(crate) fn from_raw(raw: &RawConfig, name: &str) -> Self {
        let subsection = Some(name);
        let fetch = raw
            .get_all(REMOTE_SECTION, subsection, FETCH_KEY)
            .into_iter()
            .filter_map(|value| match RefSpec::new(value) {
                Ok(spec) => Some(spec),
                Err(err) => {
                    warn!(remote = %name, %err, "ignoring fetch refspec");
                    None
                }
            })
            .collect();

        Self {
            name: name.to_string(),
            url: raw
                .get(REMOTE_SECTION, subsection, URL_KEY)
                .unwrap_or_default(),
            fetch,
            origin: Some(name.to_string()),
        }
    }

    /// Copy the untyped keys of the origin subsection under the current
    /// name when the remote was renamed and nothing is there yet.
    pub(crate) fn carry_over(&self, raw: &mut RawConfig) -> Result<(), EncodeError> {
        let Some(origin) = self.origin.as_deref() else {
            return Ok(());
        };
        let target = Some(self.name.as_str());
        if origin == self.name || raw.has_section(REMOTE_SECTION, target) {
            return Ok(());
        }

        for (key, value) in raw.options(REMOTE_SECTION, Some(origin)) {
            if key.eq_ignore_ascii_case(URL_KEY) || key.eq_ignore_ascii_case(FETCH_KEY) {
                continue;
            }
            raw.add(REMOTE_SECTION, target, &key, &value)?;
        }
        Ok(())
    }

    /// Write the typed fields into this remote's subsection.
    ///
    /// `url` is replaced in place. Existing `fetch` values are replaced,
    /// never accumulated. Other keys are left as they were.
    pub(crate) fn marshal(&mut self, raw: &mut RawConfig) -> Result<(), EncodeError> {
        let subsection = Some(self.name.as_str());
        raw.set(REMOTE_SECTION, subsection, URL_KEY, &self.url)?;
        raw.remove(REMOTE_SECTION, subsection, FETCH_KEY);
        for spec in &self.fetch {
            raw.add(REMOTE_SECTION, subsection, FETCH_KEY, spec.as_str())?;
        }

        self.origin = Some(self.name.clone());
        Ok(())
    }
}

impl PartialEq for RemoteConfig {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.url == other.url && self.fetch == other.fetch
    }
}

impl Eq for RemoteConfig {}
