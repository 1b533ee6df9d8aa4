//! Per-artifact size budget.

use crate::error::Result;
use crate::hooks::BuildHooks;
use crate::report::ArtifactReport;
use crate::reporter::{Message, SharedReporter};

/// Classification of one size-checked artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeVerdict {
    pub name: String,
    pub bytes: u64,
    pub over_limit: bool,
}

/// Warns when a script artifact exceeds the size budget.
///
/// Each artifact is judged on its own; there is no cumulative budget.
/// Artifacts whose name does not end with the configured suffix are
/// skipped without a message.
pub struct SizeGuard {
    limit_bytes: u64,
    suffix: String,
    reporter: SharedReporter,
}

impl SizeGuard {
    pub fn new(limit_bytes: u64, suffix: impl Into<String>, reporter: SharedReporter) -> Self {
        Self {
            limit_bytes,
            suffix: suffix.into(),
            reporter,
        }
    }

    /// Classify every matching artifact without reporting anything.
    pub fn classify(&self, report: &ArtifactReport) -> Vec<SizeVerdict> {
        report
            .iter()
            .filter(|(name, _)| name.ends_with(self.suffix.as_str()))
            .map(|(name, bytes)| SizeVerdict {
                name: name.to_string(),
                bytes,
                over_limit: bytes > self.limit_bytes,
            })
            .collect()
    }

    /// Classify and report every matching artifact.
    pub fn check(&self, report: &ArtifactReport) -> Vec<SizeVerdict> {
        let verdicts = self.classify(report);
        let limit = format_kb(self.limit_bytes);

        for verdict in &verdicts {
            let size = format_kb(verdict.bytes);
            let message = if verdict.over_limit {
                Message::warning(format!(
                    "{} is too large: {} (limit {})",
                    verdict.name, size, limit
                ))
            } else {
                Message::info(format!("{} size OK: {} (limit {})", verdict.name, size, limit))
            };
            self.reporter.report(message);
        }

        verdicts
    }
}

impl BuildHooks for SizeGuard {
    fn name(&self) -> &str {
        "size-guard"
    }

    fn on_done(&mut self, report: &ArtifactReport) -> Result<()> {
        let verdicts = self.check(report);
        let over = verdicts.iter().filter(|v| v.over_limit).count();
        tracing::debug!(checked = verdicts.len(), over, "size check complete");
        Ok(())
    }
}

/// Format a byte count as kilobytes with two decimals (e.g. "500.00KB").
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}KB", bytes as f64 / 1024.0)
}
