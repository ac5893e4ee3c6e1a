//! core
//!
//! Typed git configuration model.
//!
//! # Modules
//!
//! - [`config`] - `Config` and `RemoteConfig`, mapped to and from the raw tree
//! - [`refspec`] - Validated refspec strings and default refspecs
//!
//! # Design Principles
//!
//! - Only `core.bare`, `remote.<name>.url` and `remote.<name>.fetch` are typed
//! - Everything else survives an unmarshal/marshal cycle through the raw tree
//! - Validation fills in defaults, so it takes `&mut self`

pub mod config;
pub mod refspec;
