//! Build lifecycle observers.
//!
//! `vigil-hooks` provides two observers a build pipeline can notify as it
//! runs:
//!
//! - [`BuildTimer`] reports how long each build or watch-triggered rebuild
//!   took and flags builds slower than a threshold (5 seconds by default).
//! - [`SizeGuard`] inspects the emitted artifacts after every build and
//!   flags scripts larger than a budget (500KB by default).
//!
//! The host pipeline drives them through a [`HookRegistry`], firing
//! run-start, watch-run-start and build-done notifications one at a time.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use vigil_hooks::{ArtifactReport, HookRegistry, MemoryReporter, MonitorConfig};
//!
//! let reporter = Arc::new(MemoryReporter::new());
//! let mut registry = HookRegistry::with_defaults(&MonitorConfig::default(), reporter.clone())?;
//!
//! registry.run_start()?;
//! let report: ArtifactReport = [("main.js", 12_000), ("main.css", 800)].into_iter().collect();
//! registry.done(&report)?;
//!
//! assert_eq!(reporter.messages().len(), 3);
//! # Ok::<(), vigil_hooks::HookError>(())
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod registry;
pub mod report;
pub mod reporter;
pub mod size_guard;
pub mod timer;

#[cfg(feature = "logging")]
pub mod logging;

pub use config::MonitorConfig;
pub use error::{HookError, Result};
pub use hooks::{BuildHooks, RunKind};
pub use registry::HookRegistry;
pub use report::ArtifactReport;
pub use reporter::{Level, MemoryReporter, Message, Reporter, SharedReporter, TracingReporter};
pub use size_guard::{SizeGuard, SizeVerdict, format_kb};
pub use timer::{BuildTimer, Clock, ManualClock, SystemClock, TimingOutcome};
