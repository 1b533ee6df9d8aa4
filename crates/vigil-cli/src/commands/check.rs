//! `vigil check`: size budget for an existing output directory.

use crate::cli::CheckArgs;
use crate::commands::{Context, utils};
use crate::config::resolve_path;
use crate::error::{BuildError, Result};
use crate::host::scan_output_dir;
use crate::ui::{self, ConsoleReporter};
use std::sync::Arc;
use vigil_hooks::SizeGuard;

/// Execute the check command.
///
/// Runs only the size guard; no build is started and no timing is
/// reported. With `--strict`, any oversized artifact fails the command.
pub async fn execute(args: CheckArgs, ctx: &Context) -> Result<()> {
    let (config, root) = utils::load_config(&args.overrides(), ctx)?;
    let out_dir = resolve_path(&config.out_dir, &root);

    let report = scan_output_dir(&out_dir)?;
    let guard = SizeGuard::new(
        config.monitor.size_limit_bytes,
        config.monitor.script_suffix.clone(),
        Arc::new(ConsoleReporter::new(ctx.quiet)),
    );
    let verdicts = guard.check(&report);

    if verdicts.is_empty() {
        if !ctx.quiet {
            ui::info(&format!(
                "No '{}' artifacts in {}",
                config.monitor.script_suffix,
                out_dir.display()
            ));
        }
        return Ok(());
    }

    if !ctx.quiet {
        ui::print_artifact_table(&verdicts);
    }

    let over = verdicts.iter().filter(|v| v.over_limit).count();
    if args.strict && over > 0 {
        return Err(BuildError::BudgetExceeded { count: over }.into());
    }

    Ok(())
}
