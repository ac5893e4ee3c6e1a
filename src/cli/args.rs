//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--debug`: Enable debug logging (otherwise `GITCFG_LOG` controls it)
//! - `--json`: Emit JSON instead of text where a command prints data

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// gitcfg - Inspect and edit git config files through a typed model
#[derive(Parser, Debug)]
#[command(name = "gitcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the typed settings of a config file
    #[command(
        long_about = "Show `core.bare` and every remote with its URL and fetch refspecs.\n\n\
            Malformed fetch refspecs are skipped. Nothing is written.",
        after_help = "\
EXAMPLES:
    gitcfg show .git/config
    gitcfg --json show .git/config"
    )]
    Show {
        /// Path to the config file
        file: PathBuf,
    },

    /// Validate a config file
    #[command(long_about = "Check that every remote has a name and a URL.\n\n\
            Reports what the default fetch refspec would be for remotes without one. \
            Nothing is written.")]
    Check {
        /// Path to the config file
        file: PathBuf,
    },

    /// Re-encode a config file through the typed model
    #[command(long_about = "Decode the file, then encode it again.\n\n\
            Prints the result to stdout unless --write is given, in which case the \
            file is validated and replaced atomically.")]
    Normalize {
        /// Path to the config file
        file: PathBuf,

        /// Replace the file instead of printing
        #[arg(long)]
        write: bool,
    },

    /// Add or remove remotes
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Remote subcommands.
#[derive(Subcommand, Debug)]
pub enum RemoteAction {
    /// Add a remote
    Add {
        /// Path to the config file
        file: PathBuf,

        /// Remote name
        name: String,

        /// Remote URL
        url: String,

        /// Fetch refspec (repeatable; defaults to +refs/heads/*:refs/remotes/<name>/*)
        #[arg(long = "fetch", value_name = "REFSPEC")]
        fetch: Vec<String>,
    },

    /// Remove a remote
    Remove {
        /// Path to the config file
        file: PathBuf,

        /// Remote name
        name: String,
    },
}

/// Supported shells for completion.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
