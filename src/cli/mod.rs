//! cli
//!
//! Command-line interface for gitcfg.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the tracing subscriber
//! - Delegate to command handlers, which go through [`crate::storage`]

pub mod args;
pub mod commands;

pub use args::{Cli, Command, RemoteAction, Shell};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GITCFG_LOG";

/// Settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// Debug logging enabled
    pub debug: bool,
    /// Print JSON instead of text
    pub json: bool,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let ctx = Context {
        debug: cli.debug,
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Log to stderr so command output on stdout stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
