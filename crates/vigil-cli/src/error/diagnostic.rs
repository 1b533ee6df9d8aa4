//! Miette diagnostic conversion for CLI errors.

use crate::error::{BuildError, CliError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Build(e) => build_error_to_miette(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::Hook(e) => miette::miette!("{}", e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BuildError to miette Report
pub fn build_error_to_miette(err: BuildError) -> Report {
    match err {
        BuildError::BudgetExceeded { count } => miette::miette!(
            help = "Split large bundles or raise 'sizeLimitBytes' in vigil.config.json",
            "{} artifact(s) exceed the size budget",
            count
        ),
        _ => miette::miette!("{}", err),
    }
}
