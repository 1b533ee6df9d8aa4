//! Vigil CLI - build timing and bundle size budgets around any build command.
//!
//! This crate wires the observers from `vigil-hooks` into a command-line
//! host that runs an external build, scans what it emitted and reports
//! through the terminal.
//!
//! # Architecture
//!
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal output and the console reporter
//! - [`host`] - Build command runner, output scanner and file watcher
//! - `commands` - Individual CLI command implementations
//! - `config` - Configuration file handling
//!
//! # Example
//!
//! ```rust
//! use vigil_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, true);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod logger;
pub mod ui;

pub use error::{BuildError, CliError, ConfigError, Result, ResultExt};
