//! Build duration reporting.

use crate::error::{HookError, Result};
use crate::hooks::{BuildHooks, RunKind};
use crate::report::ArtifactReport;
use crate::reporter::{Message, SharedReporter};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.offset.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + *self.offset.lock()
    }
}

/// Result of timing one build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingOutcome {
    pub kind: RunKind,
    /// Elapsed seconds rounded to two decimals
    pub elapsed_secs: f64,
    /// Whether the rounded elapsed time exceeded the threshold
    pub slow: bool,
}

/// Reports how long each build or rebuild takes and flags slow ones.
///
/// Only one build is tracked at a time. A start notification while a build
/// is already running restarts the timer.
pub struct BuildTimer {
    slow_build_secs: f64,
    started: Option<(RunKind, Instant)>,
    clock: Arc<dyn Clock>,
    reporter: SharedReporter,
}

impl BuildTimer {
    pub fn new(slow_build_secs: f64, reporter: SharedReporter) -> Self {
        Self::with_clock(slow_build_secs, reporter, Arc::new(SystemClock))
    }

    pub fn with_clock(slow_build_secs: f64, reporter: SharedReporter, clock: Arc<dyn Clock>) -> Self {
        Self {
            slow_build_secs,
            started: None,
            clock,
            reporter,
        }
    }

    /// Record the start of a build of the given kind.
    pub fn start(&mut self, kind: RunKind) {
        if self.started.is_some() {
            tracing::debug!("build restarted before completion, resetting timer");
        }
        self.started = Some((kind, self.clock.now()));
        self.reporter
            .report(Message::info(format!("{} build started...", kind.label())));
    }

    /// Stop timing the current build and report its duration.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::TimerNotStarted`] if no build is being timed.
    pub fn finish(&mut self) -> Result<TimingOutcome> {
        let (kind, started_at) = self.started.take().ok_or(HookError::TimerNotStarted)?;

        let elapsed = self.clock.now().saturating_duration_since(started_at);
        let elapsed_secs = round_centis(elapsed.as_secs_f64());
        let slow = elapsed_secs > self.slow_build_secs;

        let text = format!("{} build finished in {:.2}s", kind.label(), elapsed_secs);
        if slow {
            self.reporter.report(Message::warning(format!(
                "{} (slower than {}s)",
                text, self.slow_build_secs
            )));
        } else {
            self.reporter.report(Message::success(text));
        }

        Ok(TimingOutcome {
            kind,
            elapsed_secs,
            slow,
        })
    }

    /// Whether a build is currently being timed.
    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

impl BuildHooks for BuildTimer {
    fn name(&self) -> &str {
        "build-timer"
    }

    fn on_run_start(&mut self) -> Result<()> {
        self.start(RunKind::Build);
        Ok(())
    }

    fn on_watch_run_start(&mut self) -> Result<()> {
        self.start(RunKind::Watch);
        Ok(())
    }

    fn on_done(&mut self, _report: &ArtifactReport) -> Result<()> {
        self.finish().map(|_| ())
    }
}

fn round_centis(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
