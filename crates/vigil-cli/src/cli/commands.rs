use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::validation::{parse_size_kb, parse_suffix};
use crate::config::CliOverrides;

/// Available Vigil subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the build command once
    ///
    /// Times the build, then scans the output directory and checks every
    /// script artifact against the size budget.
    Build(BuildArgs),

    /// Rebuild whenever sources change
    ///
    /// Runs an initial build, then watches the source directory and reruns
    /// the build command on every change, reporting each rebuild.
    Watch(WatchArgs),

    /// Check artifact sizes in an existing output directory
    ///
    /// Does not run any build; only the size budget is evaluated.
    Check(CheckArgs),
}

/// Threshold flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct MonitorArgs {
    /// Directory the build writes its artifacts to [default: dist]
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Size budget for a single script artifact, in kilobytes [default: 500]
    #[arg(long, value_name = "KB", value_parser = parse_size_kb)]
    pub size_limit_kb: Option<u64>,

    /// Suffix selecting which artifacts are size-checked [default: .js]
    #[arg(long, value_name = "SUFFIX", value_parser = parse_suffix)]
    pub suffix: Option<String>,

    /// Working directory for the build command and relative paths
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the build command
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    #[command(flatten)]
    pub monitor: MonitorArgs,

    /// Builds slower than this many seconds are flagged [default: 5]
    #[arg(long, value_name = "SECS")]
    pub slow_build_secs: Option<f64>,

    /// Build command and its arguments
    ///
    /// Examples:
    ///   vigil build -- npm run build
    ///   vigil build -- npx webpack --config build/webpack.prod.js
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Arguments for the watch command
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Directory watched for source changes [default: src]
    #[arg(short = 'w', long, value_name = "DIR")]
    pub watch_dir: Option<PathBuf>,

    /// Debounce window for repeated changes to one file [default: 100]
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub monitor: MonitorArgs,

    /// Exit with an error when any artifact exceeds the budget
    #[arg(long)]
    pub strict: bool,
}

impl MonitorArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            out_dir: self.out_dir.clone(),
            size_limit_bytes: self.size_limit_kb.map(|kb| kb * 1024),
            script_suffix: self.suffix.clone(),
            cwd: self.cwd.clone(),
            ..CliOverrides::default()
        }
    }
}

impl BuildArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            command: self.command.clone(),
            slow_build_secs: self.slow_build_secs,
            ..self.monitor.overrides()
        }
    }
}

impl WatchArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            watch_dir: self.watch_dir.clone(),
            debounce_ms: self.debounce_ms,
            ..self.build.overrides()
        }
    }
}

impl CheckArgs {
    pub fn overrides(&self) -> CliOverrides {
        self.monitor.overrides()
    }
}
