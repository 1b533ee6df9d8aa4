//! Command-line interface definition for Vigil.
//!
//! # Command Structure
//!
//! - `vigil build` - Run a build command once, timing it and checking artifact sizes
//! - `vigil watch` - Rebuild on source changes, reporting every rebuild
//! - `vigil check` - Check artifact sizes of an existing output directory

mod commands;
mod tests;
mod validation;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{BuildArgs, CheckArgs, Command, MonitorArgs, WatchArgs};
pub use validation::{parse_size_kb, parse_suffix};

/// Vigil - build timing and bundle size budgets for any build command
#[derive(Parser, Debug)]
#[command(
    name = "vigil",
    version,
    about = "Build timing and bundle size budgets for any build command",
    long_about = "Vigil wraps your build command, reports how long each build takes and\n\
                  warns when emitted scripts exceed a size budget. In watch mode it\n\
                  rebuilds on source changes and reports every rebuild."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational output; warnings and errors are still shown
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./vigil.config.json when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
