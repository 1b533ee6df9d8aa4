use crate::commands::Context;
use crate::config::{CliOverrides, VigilConfig, resolve_path};
use crate::error::Result;
use std::path::PathBuf;

/// Load configuration and resolve the project root.
///
/// The config file is looked up in `--cwd` when given, otherwise in the
/// process working directory.
pub(crate) fn load_config(overrides: &CliOverrides, ctx: &Context) -> Result<(VigilConfig, PathBuf)> {
    let process_cwd = std::env::current_dir()?;
    let base = match overrides.cwd.as_deref() {
        Some(cwd) => resolve_path(cwd, &process_cwd),
        None => process_cwd.clone(),
    };

    let config = VigilConfig::load(overrides, ctx.config_path.as_deref(), &base)?;
    let root = config.project_root(&process_cwd);
    tracing::debug!(root = %root.display(), "resolved project root");

    Ok((config, root))
}
