//! Command implementations for the Vigil CLI.
//!
//! - [`build`] - Run the build command once
//! - [`watch`] - Rebuild on source changes
//! - [`check`] - Size-check an existing output directory
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments plus the global [`Context`] and returns a Result.

pub mod build;
pub mod check;
pub mod watch;
pub(crate) mod utils;

pub use build::execute as build_execute;
pub use check::execute as check_execute;
pub use watch::execute as watch_execute;

use std::path::PathBuf;

/// Global flags every command needs.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit `--config` path
    pub config_path: Option<PathBuf>,
    /// `--quiet`: drop informational observer lines
    pub quiet: bool,
}
