//! cli::commands
//!
//! Command handlers. Each handler loads the file through
//! [`FileStorage`](crate::storage::FileStorage), works on the typed
//! [`Config`](crate::core::config::Config) and writes back through the same
//! store when it changes anything.

mod check;
mod completion;
mod normalize;
mod remote;
mod show;

pub use check::check;
pub use completion::completion;
pub use normalize::normalize;
pub use remote::{add_remote, remove_remote};
pub use show::show;

use super::args::{Command, RemoteAction};
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Show { file } => show(ctx, &file),
        Command::Check { file } => check(ctx, &file),
        Command::Normalize { file, write } => normalize(ctx, &file, write),
        Command::Remote { action } => match action {
            RemoteAction::Add {
                file,
                name,
                url,
                fetch,
            } => add_remote(ctx, &file, &name, &url, &fetch),
            RemoteAction::Remove { file, name } => remove_remote(ctx, &file, &name),
        },
        Command::Completion { shell } => completion(shell),
    }
}
