//! gitcfg - Typed view over git config files
//!
//! Parses git-config text into a lossless raw tree, overlays typed
//! core and remote settings, and writes everything back without losing the
//! sections and keys the typed model does not cover.
//!
//! # Architecture
//!
//! - [`format`] - Raw tree over `gix-config`, with decode and encode
//! - [`core`] - Typed `Config`, `RemoteConfig` and `RefSpec`
//! - [`storage`] - `ConfigStorer` implementations (memory, file)
//! - [`cli`] - The `gitcfg` command-line tool
//!
//! # Example
//!
//! ```
//! use gitcfg::core::config::Config;
//!
//! let mut config = Config::from_bytes(b"[remote \"origin\"]\n\turl = https://example.com/r.git\n").unwrap();
//! config.validate().unwrap();
//!
//! let origin = config.remote("origin").unwrap();
//! assert_eq!(origin.fetch[0].as_str(), "+refs/heads/*:refs/remotes/origin/*");
//! ```

pub mod cli;
pub mod core;
pub mod format;
pub mod storage;
