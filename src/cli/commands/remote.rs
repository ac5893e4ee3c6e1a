//! remote command - Add or remove remotes

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::config::RemoteConfig;
use crate::core::refspec::RefSpec;
use crate::storage::{ConfigStorer, FileStorage};

/// Add a remote and save the file.
///
/// Without `--fetch` the remote gets the default fetch refspec.
pub fn add_remote(ctx: &Context, file: &Path, name: &str, url: &str, fetch: &[String]) -> Result<()> {
    let fetch = fetch
        .iter()
        .map(|spec| RefSpec::new(spec.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut storage = FileStorage::new(file);
    let mut config = storage
        .config()
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    config.create_remote(RemoteConfig::new(name, url).with_fetch(fetch))?;
    storage
        .set_config(config)
        .with_context(|| format!("failed to write '{}'", file.display()))?;

    if !ctx.json {
        println!("added remote '{name}'");
    }
    Ok(())
}

/// Remove a remote and save the file.
pub fn remove_remote(ctx: &Context, file: &Path, name: &str) -> Result<()> {
    let mut storage = FileStorage::new(file);
    let mut config = storage
        .config()
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    config.delete_remote(name)?;
    storage
        .set_config(config)
        .with_context(|| format!("failed to write '{}'", file.display()))?;

    if !ctx.json {
        println!("removed remote '{name}'");
    }
    Ok(())
}
