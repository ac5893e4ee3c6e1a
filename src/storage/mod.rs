//! storage
//!
//! Loading and saving a [`Config`](crate::core::config::Config).
//!
//! # Architecture
//!
//! Storage goes through the [`ConfigStorer`] trait, which has two
//! implementations:
//!
//! - [`MemoryStorage`]: keeps the configuration in memory
//! - [`FileStorage`]: reads and writes a git config file on disk
//!
//! Both validate before storing, so defaults such as the fetch refspec of a
//! new remote are filled in on save.
//!
//! # Example
//!
//! ```
//! use gitcfg::core::config::RemoteConfig;
//! use gitcfg::storage::{ConfigStorer, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! let mut config = storage.config().unwrap();
//! config.remotes.insert("origin".into(), RemoteConfig::new("origin", "https://example.com/r.git"));
//! storage.set_config(config).unwrap();
//!
//! let stored = storage.config().unwrap();
//! assert_eq!(stored.remote("origin").unwrap().fetch.len(), 1);
//! ```

mod file_store;
mod memory_store;
mod traits;

pub use file_store::FileStorage;
pub use memory_store::MemoryStorage;
pub use traits::{ConfigStorer, StorageError};
