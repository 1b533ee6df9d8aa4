//! `vigil build`: one timed build followed by a size check.

use crate::cli::BuildArgs;
use crate::commands::{Context, utils};
use crate::error::Result;
use crate::host::BuildHost;
use crate::ui::ConsoleReporter;
use std::sync::Arc;
use vigil_hooks::RunKind;

/// Execute the build command.
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Fire run-start and run the build command
/// 3. Scan the output directory and fire build-done
///
/// Oversized artifacts and slow builds are reported, not treated as
/// failures.
pub async fn execute(args: BuildArgs, ctx: &Context) -> Result<()> {
    let (config, root) = utils::load_config(&args.overrides(), ctx)?;
    config.require_command()?;

    let reporter = Arc::new(ConsoleReporter::new(ctx.quiet));
    let mut host = BuildHost::new(&config, &root, reporter)?;
    let report = host.build(RunKind::Build).await?;

    tracing::debug!(artifacts = report.len(), "build complete");
    Ok(())
}
