//! normalize command - Re-encode a config file through the typed model

use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::storage::{ConfigStorer, FileStorage};

/// Decode then encode `file`, printing the result or replacing the file.
///
/// `--write` goes through [`FileStorage`], so the config is validated and
/// remote defaults are applied before it is written.
pub fn normalize(ctx: &Context, file: &Path, write: bool) -> Result<()> {
    let mut storage = FileStorage::new(file);
    let mut config = storage
        .config()
        .with_context(|| format!("failed to load '{}'", file.display()))?;

    if write {
        storage
            .set_config(config)
            .with_context(|| format!("failed to write '{}'", file.display()))?;
        if !ctx.json {
            println!("wrote {}", file.display());
        }
        return Ok(());
    }

    let data = config.marshal()?;
    std::io::stdout().write_all(&data)?;
    Ok(())
}
