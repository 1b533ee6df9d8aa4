//! Configuration system for Vigil with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vigil_hooks::MonitorConfig;

pub use defaults::*;
pub use loading::{CliOverrides, DEFAULT_CONFIG_FILE};

/// Vigil configuration - loaded from vigil.config.json, `VIGIL_*` env vars and CLI args.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VigilConfig {
    /// Build command to run, program first (e.g., ["npm", "run", "build"])
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Directory the build writes its artifacts to
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Directory watched for source changes in watch mode
    #[serde(default = "default_watch_dir")]
    pub watch_dir: PathBuf,

    /// Patterns ignored by the watcher ("node_modules", "*.log")
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Window in which repeated changes to one file trigger a single rebuild
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Observer thresholds
    #[serde(flatten)]
    pub monitor: MonitorConfig,

    /// Working directory for the build command and relative paths
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,
}

impl Default for VigilConfig {
    fn default() -> Self {
        Self {
            command: Vec::new(),
            out_dir: default_out_dir(),
            watch_dir: default_watch_dir(),
            ignore: default_ignore(),
            debounce_ms: default_debounce_ms(),
            monitor: MonitorConfig::default(),
            cwd: None,
        }
    }
}

impl VigilConfig {
    /// Project root: explicit `cwd` if set, otherwise `fallback`.
    pub fn project_root(&self, fallback: &Path) -> PathBuf {
        match &self.cwd {
            Some(cwd) => resolve_path(cwd, fallback),
            None => fallback.to_path_buf(),
        }
    }

}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
