//! check command - Validate a config file without writing it

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::json;

use crate::cli::Context;
use crate::storage::{ConfigStorer, FileStorage};

/// Validate every remote, reporting the effective fetch refspecs.
pub fn check(ctx: &Context, file: &Path) -> Result<()> {
    let mut config = FileStorage::new(file)
        .config()
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config '{}'", file.display()))?;

    if ctx.json {
        let remotes: Vec<_> = config
            .remotes
            .values()
            .map(|r| json!({ "name": r.name, "fetch": r.fetch }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "valid": true, "remotes": remotes }))?
        );
        return Ok(());
    }

    println!("{}: ok ({} remotes)", file.display(), config.remotes.len());
    for remote in config.remotes.values() {
        let fetch: Vec<_> = remote.fetch.iter().map(|s| s.as_str()).collect();
        println!("  {}: {}", remote.name, fetch.join(", "));
    }
    Ok(())
}
