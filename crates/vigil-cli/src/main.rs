//! Vigil CLI entry point.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! selected command.

use clap::Parser;
use miette::Result;
use vigil_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let ctx = commands::Context {
        config_path: args.config,
        quiet: args.quiet,
    };

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args, &ctx).await,
        cli::Command::Watch(watch_args) => commands::watch_execute(watch_args, &ctx).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args, &ctx).await,
    };

    result.map_err(error::cli_error_to_miette)
}
