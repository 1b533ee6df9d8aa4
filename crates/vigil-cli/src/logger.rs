//! Logging infrastructure for the Vigil CLI.
//!
//! Observer status lines go through [`crate::ui`]; this subscriber carries
//! the diagnostic `tracing` events (config loading, dispatch, watcher
//! activity).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "vigil=debug,vigil_hooks=debug,vigil_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "vigil_hooks=info,vigil_cli=info";

/// Pick the filter directives for the given flags.
///
/// 1. `--verbose`: debug for vigil crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` if set
/// 4. info for vigil crates
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
