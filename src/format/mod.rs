//! format
//!
//! Order-preserving raw tree for git-config text, backed by [`gix_config`].
//!
//! # Structure
//!
//! A [`RawConfig`] holds the parsed file. Sections are addressed by name and
//! an optional subsection name: `[remote "origin"]` is section `remote`,
//! subsection `origin`. A key may appear more than once; multi-valued keys
//! such as `fetch` rely on this. A header may also repeat, in which case
//! lookups span every matching section in file order.
//!
//! # Matching
//!
//! Following git, section names and keys compare ASCII case-insensitively.
//! Subsection names compare exactly.
//!
//! # Preservation
//!
//! Lines that are never touched, comments included, are written back byte
//! for byte. Values written through [`RawConfig::set`] or [`RawConfig::add`]
//! are quoted and escaped as needed.
//!
//! # Example
//!
//! ```
//! use gitcfg::format::{decode, encode_to_vec};
//!
//! let text = b"# cloned\n[remote \"origin\"]\n\turl = https://example.com/repo.git\n";
//! let mut raw = decode(text).unwrap();
//! assert_eq!(
//!     raw.get("remote", Some("origin"), "url").as_deref(),
//!     Some("https://example.com/repo.git")
//! );
//! assert_eq!(encode_to_vec(&raw).unwrap(), text);
//!
//! raw.add("remote", Some("origin"), "fetch", "+refs/heads/*:refs/remotes/origin/*").unwrap();
//! assert_eq!(raw.get_all("remote", Some("origin"), "fetch").len(), 1);
//! ```

mod decode;
mod encode;

pub use decode::{decode, DecodeError};
pub use encode::{encode, encode_to_vec, EncodeError};

use std::collections::HashMap;
use std::fmt;

use bstr::BStr;
use gix_config::file::{Metadata, Section, SectionId};
use gix_config::parse::section::ValueName;
use gix_config::File;

/// A single `key = value` line and the section it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Section name as written
    pub section: String,
    /// Subsection name, if the header has one
    pub subsection: Option<String>,
    /// Key as written
    pub key: String,
    /// Unquoted, unescaped value
    pub value: String,
}

impl fmt::Display for Entry {
    /// `git config --list` style: `section.subsection.key=value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subsection {
            Some(sub) => write!(f, "{}.{}.{}={}", self.section, sub, self.key, self.value),
            None => write!(f, "{}.{}={}", self.section, self.key, self.value),
        }
    }
}

/// Parsed git-config file.
///
/// Equality compares the [`entries`](RawConfig::entries), ignoring comments
/// and layout.
#[derive(Clone)]
pub struct RawConfig {
    file: File<'static>,
}

impl RawConfig {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::from_file(File::new(Metadata::api()))
    }

    pub(crate) fn from_file(file: File<'static>) -> Self {
        Self { file }
    }

    pub(crate) fn file(&self) -> &File<'static> {
        &self.file
    }

    /// Whether the tree has no sections.
    pub fn is_empty(&self) -> bool {
        self.file.sections().next().is_none()
    }

    /// Whether at least one `[name]` / `[name "subsection"]` header exists.
    pub fn has_section(&self, name: &str, subsection: Option<&str>) -> bool {
        self.sections(name, subsection).next().is_some()
    }

    /// Distinct subsection names under `name`, in first-seen order.
    pub fn subsections(&self, name: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for section in self.file.sections() {
            let header = section.header();
            if !header.name().eq_ignore_ascii_case(name.as_bytes()) {
                continue;
            }
            if let Some(sub) = header.subsection_name() {
                let sub = sub.to_string();
                if !names.contains(&sub) {
                    names.push(sub);
                }
            }
        }
        names
    }

    /// The last value of `key`, if any.
    pub fn get(&self, name: &str, subsection: Option<&str>, key: &str) -> Option<String> {
        self.get_all(name, subsection, key).pop()
    }

    /// Every value of `key`, in file order.
    pub fn get_all(&self, name: &str, subsection: Option<&str>, key: &str) -> Vec<String> {
        self.sections(name, subsection)
            .flat_map(|section| section.values(key))
            .map(|value| value.to_string())
            .collect()
    }

    /// Every `(key, value)` pair of the matching sections, in file order.
    pub fn options(&self, name: &str, subsection: Option<&str>) -> Vec<(String, String)> {
        self.sections(name, subsection)
            .flat_map(section_options)
            .collect()
    }

    /// Every entry in the file, in order.
    pub fn entries(&self) -> Vec<Entry> {
        self.file
            .sections()
            .flat_map(|section| {
                let header = section.header();
                let name = header.name().to_string();
                let subsection = header.subsection_name().map(|s| s.to_string());
                section_options(section)
                    .into_iter()
                    .map(move |(key, value)| Entry {
                        section: name.clone(),
                        subsection: subsection.clone(),
                        key,
                        value,
                    })
            })
            .collect()
    }

    /// Set `key` to `value`.
    ///
    /// Replaces the last occurrence in the last matching section, or appends
    /// to it. The section is created at the end of the file when missing.
    ///
    /// # Errors
    ///
    /// Returns `EncodeError` if the section header or key cannot be written
    /// as git-config text.
    pub fn set(
        &mut self,
        name: &str,
        subsection: Option<&str>,
        key: &str,
        value: &str,
    ) -> Result<(), EncodeError> {
        let value_name = value_name(key)?;
        let mut section = self
            .file
            .section_mut_or_create_new(name, subsection.map(BStr::new))
            .map_err(|_| EncodeError::invalid_section(name, subsection))?;
        section.set(value_name, BStr::new(value));
        Ok(())
    }

    /// Append `key = value` to the last matching section, creating it when
    /// missing.
    ///
    /// # Errors
    ///
    /// Same as [`RawConfig::set`].
    pub fn add(
        &mut self,
        name: &str,
        subsection: Option<&str>,
        key: &str,
        value: &str,
    ) -> Result<(), EncodeError> {
        let value_name = value_name(key)?;
        let mut section = self
            .file
            .section_mut_or_create_new(name, subsection.map(BStr::new))
            .map_err(|_| EncodeError::invalid_section(name, subsection))?;
        section.push(value_name, Some(BStr::new(value)));
        Ok(())
    }

    /// Remove every value of `key` from the matching sections. Returns the
    /// number of values removed.
    pub fn remove(&mut self, name: &str, subsection: Option<&str>, key: &str) -> usize {
        let mut removed = 0;
        for id in self.section_ids(name, subsection) {
            if let Some(mut section) = self.file.section_mut_by_id(id) {
                while section.remove(key).is_some() {
                    removed += 1;
                }
            }
        }
        removed
    }

    /// Remove every matching section. Returns whether any existed.
    pub fn remove_section(&mut self, name: &str, subsection: Option<&str>) -> bool {
        let ids = self.section_ids(name, subsection);
        for id in &ids {
            self.file.remove_section_by_id(*id);
        }
        !ids.is_empty()
    }

    fn sections<'a>(
        &'a self,
        name: &'a str,
        subsection: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Section<'static>> + 'a {
        self.file
            .sections()
            .filter(move |section| is_match(section, name, subsection))
    }

    fn section_ids(&self, name: &str, subsection: Option<&str>) -> Vec<SectionId> {
        self.file
            .sections_and_ids()
            .filter(|(section, _)| is_match(section, name, subsection))
            .map(|(_, id)| id)
            .collect()
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("entries", &self.entries())
            .finish()
    }
}

impl PartialEq for RawConfig {
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl Eq for RawConfig {}

fn is_match(section: &Section<'_>, name: &str, subsection: Option<&str>) -> bool {
    let header = section.header();
    header.name().eq_ignore_ascii_case(name.as_bytes())
        && header.subsection_name() == subsection.map(BStr::new)
}

/// Pair each key of a section with its value, keeping duplicates in order.
fn section_options(section: &Section<'_>) -> Vec<(String, String)> {
    let mut values: HashMap<String, std::vec::IntoIter<String>> = HashMap::new();
    let mut options = Vec::new();
    for value_name in section.value_names() {
        let key: &str = value_name.as_ref();
        let next = values
            .entry(key.to_ascii_lowercase())
            .or_insert_with(|| {
                section
                    .values(key)
                    .into_iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .into_iter()
            })
            .next();
        if let Some(value) = next {
            options.push((key.to_string(), value));
        }
    }
    options
}

fn value_name(key: &str) -> Result<ValueName<'static>, EncodeError> {
    ValueName::try_from(key)
        .map(|name| name.to_owned())
        .map_err(|_| EncodeError::InvalidKey(key.to_string()))
}
