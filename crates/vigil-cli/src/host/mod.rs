//! Host pipeline around an external build command.
//!
//! [`BuildHost`] plays the part of the bundler's lifecycle: it fires the
//! start notification, runs the command, scans the output directory into an
//! [`ArtifactReport`] and fires build-done with it.

pub mod artifacts;
pub mod runner;
pub mod watcher;

pub use artifacts::scan_output_dir;
pub use runner::run_command;
pub use watcher::{FileChange, FileWatcher, IgnoreRules};

use crate::config::{VigilConfig, resolve_path};
use crate::error::Result;
use std::path::{Path, PathBuf};
use vigil_hooks::{ArtifactReport, HookRegistry, RunKind, SharedReporter};

/// Drives a [`HookRegistry`] through one build per call to [`BuildHost::build`].
pub struct BuildHost {
    command: Vec<String>,
    root: PathBuf,
    out_dir: PathBuf,
    registry: HookRegistry,
}

impl BuildHost {
    /// Host with the built-in observers reporting to `reporter`.
    pub fn new(config: &VigilConfig, root: &Path, reporter: SharedReporter) -> Result<Self> {
        let registry = HookRegistry::with_defaults(&config.monitor, reporter)?;
        Ok(Self::with_registry(config, root, registry))
    }

    /// Host notifying a caller-assembled registry.
    pub fn with_registry(config: &VigilConfig, root: &Path, registry: HookRegistry) -> Self {
        Self {
            command: config.command.clone(),
            root: root.to_path_buf(),
            out_dir: resolve_path(&config.out_dir, root),
            registry,
        }
    }

    /// Run one build of the given kind and return what it produced.
    ///
    /// Build-done is only fired when the command succeeded and the output
    /// directory could be scanned. A failed build leaves the timer running;
    /// the next start notification restarts it.
    pub async fn build(&mut self, kind: RunKind) -> Result<ArtifactReport> {
        match kind {
            RunKind::Build => self.registry.run_start()?,
            RunKind::Watch => self.registry.watch_run_start()?,
        }

        run_command(&self.command, &self.root).await?;
        let report = scan_output_dir(&self.out_dir)?;
        self.registry.done(&report)?;

        Ok(report)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }
}
