//! Formatting utilities for sizes and artifact summaries.

use super::colors_enabled;
use console::Term;
use owo_colors::OwoColorize;
use vigil_hooks::SizeVerdict;

/// Format file size in human-readable format.
///
/// Converts bytes to the most appropriate unit (B, KB, MB, GB).
///
/// ```
/// use vigil_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1_048_576), "1.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    if unit_idx == 0 {
        format!("{} {}", size as u64, UNITS[unit_idx])
    } else {
        format!("{:.2} {}", size, UNITS[unit_idx])
    }
}

/// Print a table of size-checked artifacts to stderr.
pub fn print_artifact_table(verdicts: &[SizeVerdict]) {
    if verdicts.is_empty() {
        return;
    }

    let width = (Term::stderr().size().1 as usize).min(80);
    let name_width = verdicts.iter().map(|v| v.name.len()).max().unwrap_or(0);

    eprintln!();
    eprintln!("{}", "─".repeat(width));
    for verdict in verdicts {
        let marker = if verdict.over_limit { "!" } else { "▸" };
        let line = format!(
            "  {} {:<name_width$}  {:>10}",
            marker,
            verdict.name,
            format_size(verdict.bytes),
            name_width = name_width
        );
        if colors_enabled() && verdict.over_limit {
            eprintln!("{}", line.yellow());
        } else {
            eprintln!("{}", line);
        }
    }
    eprintln!("{}", "─".repeat(width));

    let total: u64 = verdicts.iter().map(|v| v.bytes).sum();
    let over = verdicts.iter().filter(|v| v.over_limit).count();
    eprintln!(
        "  {} artifact(s), {} total, {} over budget",
        verdicts.len(),
        format_size(total),
        over
    );
}
