//! Terminal UI utilities for status lines and formatted output.
//!
//! Handles color detection (`NO_COLOR`, `FORCE_COLOR`, TTY) and degrades to
//! plain text when colors are unavailable or disabled with `--no-color`.

mod format;
mod messages;
mod reporter;

pub use format::{format_size, print_artifact_table};
pub use messages::{error, info, success, warning};
pub use reporter::ConsoleReporter;

use std::sync::atomic::{AtomicBool, Ordering};

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support. Call once early in `main`.
pub fn init_colors(no_color: bool) {
    COLORS.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}
