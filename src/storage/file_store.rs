//! storage::file_store
//!
//! File-based config storage.
//!
//! - A missing file reads as an empty configuration
//! - Writes are atomic (write `<file>.lock`, sync, then rename)
//! - An existing `<file>.lock` means another writer holds the file
//! - Parent directories are created on write

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::traits::{ConfigStorer, StorageError};
use crate::core::config::Config;

/// Reads and writes a git config file.
///
/// # Example
///
/// ```no_run
/// use gitcfg::storage::{ConfigStorer, FileStorage};
///
/// let storage = FileStorage::new("/path/to/repo/.git/config");
/// let config = storage.config().unwrap();
/// println!("bare: {}", config.core.is_bare);
/// ```
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Path to the config file
    path: PathBuf,
}

impl FileStorage {
    /// Create a store for the config file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the config file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the lock file used while writing: the config path with
    /// `.lock` appended, as git does.
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    /// Write `data` to the config file atomically.
    ///
    /// The lock file is removed again if anything fails before the rename.
    fn write_atomic(&self, data: &[u8]) -> Result<(), StorageError> {
        let write_error = |path: &Path, source: std::io::Error| StorageError::WriteError {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
            }
        }

        let lock_path = self.lock_path();
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock_path)
            .map_err(|e| write_error(&lock_path, e))?;

        let synced = file
            .write_all(data)
            .and_then(|()| file.sync_all())
            .map_err(|e| write_error(&lock_path, e));
        drop(file);

        let written = synced.and_then(|()| {
            fs::rename(&lock_path, &self.path).map_err(|e| write_error(&self.path, e))
        });

        if written.is_err() {
            if let Err(e) = fs::remove_file(&lock_path) {
                warn!(path = %lock_path.display(), error = %e, "failed to remove lock file");
            }
        }
        written
    }
}

impl ConfigStorer for FileStorage {
    fn config(&self) -> Result<Config, StorageError> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "config file missing, using empty config");
                return Ok(Config::new());
            }
            Err(e) => {
                return Err(StorageError::ReadError {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        Ok(Config::from_bytes(&data)?)
    }

    fn set_config(&mut self, mut config: Config) -> Result<(), StorageError> {
        config.validate()?;
        let data = config.marshal()?;
        self.write_atomic(&data)?;
        debug!(path = %self.path.display(), bytes = data.len(), "wrote config file");
        Ok(())
    }
}
