//! Runs the external build command.

use crate::error::{BuildError, Result};
use std::path::Path;
use tokio::process::Command;

/// Run `command` in `cwd`, inheriting stdio, and wait for it to finish.
///
/// # Errors
///
/// - [`BuildError::EmptyCommand`] if `command` is empty
/// - [`BuildError::Spawn`] if the program cannot be started
/// - [`BuildError::CommandFailed`] if it exits unsuccessfully
pub async fn run_command(command: &[String], cwd: &Path) -> Result<()> {
    let (program, args) = command.split_first().ok_or(BuildError::EmptyCommand)?;
    let command_line = command.join(" ");

    tracing::debug!(command = %command_line, cwd = %cwd.display(), "running build command");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| BuildError::Spawn {
            command: program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(BuildError::CommandFailed {
            command: command_line,
            code: status.code(),
        }
        .into());
    }

    Ok(())
}
