//! Lifecycle notifications a build pipeline exposes to observers.

use crate::error::Result;
use crate::report::ArtifactReport;
use std::fmt;

/// What triggered a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunKind {
    /// A full build started by the user
    Build,
    /// A rebuild triggered by a source change in watch mode
    Watch,
}

impl RunKind {
    /// Label used in status messages.
    pub fn label(&self) -> &'static str {
        match self {
            RunKind::Build => "[Build]",
            RunKind::Watch => "[Watch]",
        }
    }
}

impl fmt::Display for RunKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observer of build lifecycle notifications.
///
/// The host pipeline calls these one at a time, never concurrently. Every
/// method defaults to a no-op so an observer only overrides the
/// notifications it cares about.
pub trait BuildHooks: Send {
    /// Name used when reporting observer failures.
    fn name(&self) -> &str;

    /// A full build is starting.
    fn on_run_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// A watch-triggered rebuild is starting.
    fn on_watch_run_start(&mut self) -> Result<()> {
        Ok(())
    }

    /// All artifacts of the current build are finalized.
    fn on_done(&mut self, _report: &ArtifactReport) -> Result<()> {
        Ok(())
    }
}
