//! show command - Print the typed settings of a config file

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::storage::{ConfigStorer, FileStorage};

/// Print `core.bare` and every remote.
///
/// Text output uses `git config --list` style lines.
pub fn show(ctx: &Context, file: &Path) -> Result<()> {
    let config = FileStorage::new(file)
        .config()
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("core.bare={}", config.core.is_bare);
    for remote in config.remotes.values() {
        println!("remote.{}.url={}", remote.name, remote.url);
        for spec in &remote.fetch {
            println!("remote.{}.fetch={}", remote.name, spec);
        }
    }
    Ok(())
}
