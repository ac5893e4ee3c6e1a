//! core::refspec
//!
//! Validated refspec strings.
//!
//! A refspec maps source refs to destination refs, e.g.
//! `+refs/heads/*:refs/remotes/origin/*`. The grammar accepted here:
//! - An optional leading `+` (force update)
//! - Exactly one `:` separating source from destination
//! - Source and destination carry the same number of `*`, at most one each
//!
//! An empty source (`:refs/heads/gone`) denotes a delete. An empty
//! destination (`refs/heads/main:`) fetches without updating a local ref.
//!
//! # Example
//!
//! ```
//! use gitcfg::core::refspec::RefSpec;
//!
//! let spec = RefSpec::default_fetch("origin");
//! assert_eq!(spec.as_str(), "+refs/heads/*:refs/remotes/origin/*");
//! assert!(spec.is_force_update());
//! assert_eq!(
//!     spec.dst_for("refs/heads/main").as_deref(),
//!     Some("refs/remotes/origin/main")
//! );
//!
//! assert!(RefSpec::new("refs/heads/*:refs/remotes/origin/main").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default fetch refspec template; `%s` is the remote name.
pub const DEFAULT_FETCH_REFSPEC: &str = "+refs/heads/*:refs/remotes/%s/*";

/// Default push refspec.
pub const DEFAULT_PUSH_REFSPEC: &str = "refs/heads/*:refs/heads/*";

const SEPARATOR: char = ':';
const WILDCARD: char = '*';
const FORCE: char = '+';

/// Errors from refspec validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefSpecError {
    #[error("malformed refspec '{0}': separators are wrong")]
    MalformedSeparator(String),

    #[error("malformed refspec '{0}': wildcards do not match")]
    MalformedWildcard(String),
}

/// A validated refspec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RefSpec(String);

impl RefSpec {
    /// Create a new validated refspec.
    ///
    /// # Errors
    ///
    /// Returns `RefSpecError` if the string does not follow the refspec grammar.
    pub fn new(spec: impl Into<String>) -> Result<Self, RefSpecError> {
        let spec = spec.into();
        Self::validate(&spec)?;
        Ok(Self(spec))
    }

    /// The default fetch refspec for a remote.
    pub fn default_fetch(remote: &str) -> Self {
        Self(DEFAULT_FETCH_REFSPEC.replacen("%s", remote, 1))
    }

    /// The default push refspec.
    pub fn default_push() -> Self {
        Self(DEFAULT_PUSH_REFSPEC.to_string())
    }

    /// Check a string against the refspec grammar.
    pub fn validate(spec: &str) -> Result<(), RefSpecError> {
        if spec.matches(SEPARATOR).count() != 1 {
            return Err(RefSpecError::MalformedSeparator(spec.to_string()));
        }
        let Some((src, dst)) = spec.split_once(SEPARATOR) else {
            return Err(RefSpecError::MalformedSeparator(spec.to_string()));
        };

        let src_wildcards = src.matches(WILDCARD).count();
        let dst_wildcards = dst.matches(WILDCARD).count();
        if src_wildcards != dst_wildcards || src_wildcards > 1 {
            return Err(RefSpecError::MalformedWildcard(spec.to_string()));
        }

        Ok(())
    }

    /// Whether a string follows the refspec grammar.
    pub fn is_valid(spec: &str) -> bool {
        Self::validate(spec).is_ok()
    }

    /// Get the refspec as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the refspec forces non-fast-forward updates (`+` prefix).
    pub fn is_force_update(&self) -> bool {
        self.0.starts_with(FORCE)
    }

    /// Whether the refspec deletes its destination (empty source).
    pub fn is_delete(&self) -> bool {
        self.src().is_empty()
    }

    /// Whether the refspec uses a `*` pattern.
    pub fn is_wildcard(&self) -> bool {
        self.0.contains(WILDCARD)
    }

    /// The source side, without the force marker.
    pub fn src(&self) -> &str {
        let spec = self.0.strip_prefix(FORCE).unwrap_or(self.0.as_str());
        spec.split_once(SEPARATOR).map_or(spec, |(src, _)| src)
    }

    /// The destination side.
    pub fn dst(&self) -> &str {
        self.0.split_once(SEPARATOR).map_or("", |(_, dst)| dst)
    }

    /// Whether a ref name is selected by the source side.
    pub fn matches(&self, name: &str) -> bool {
        self.capture(name).is_some()
    }

    /// The destination ref for a matching source ref name.
    ///
    /// Returns `None` when `name` does not match the source side.
    ///
    /// ```
    /// use gitcfg::core::refspec::RefSpec;
    ///
    /// let spec = RefSpec::new("refs/heads/*:refs/remotes/up/*").unwrap();
    /// assert_eq!(spec.dst_for("refs/heads/a/b").as_deref(), Some("refs/remotes/up/a/b"));
    /// assert_eq!(spec.dst_for("refs/tags/v1"), None);
    /// ```
    pub fn dst_for(&self, name: &str) -> Option<String> {
        let captured = self.capture(name)?;
        if self.is_wildcard() {
            Some(self.dst().replacen(WILDCARD, captured, 1))
        } else {
            Some(self.dst().to_string())
        }
    }

    /// The part of `name` matched by the source wildcard, or all of it for
    /// exact refspecs.
    fn capture<'n>(&self, name: &'n str) -> Option<&'n str> {
        let src = self.src();
        if src.is_empty() {
            return None;
        }
        match src.split_once(WILDCARD) {
            Some((prefix, suffix)) => {
                let middle = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
                (!middle.is_empty()).then_some(middle)
            }
            None => (src == name).then_some(name),
        }
    }
}

impl TryFrom<String> for RefSpec {
    type Error = RefSpecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RefSpec> for String {
    fn from(spec: RefSpec) -> Self {
        spec.0
    }
}

impl AsRef<str> for RefSpec {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RefSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RefSpec {
    type Err = RefSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
