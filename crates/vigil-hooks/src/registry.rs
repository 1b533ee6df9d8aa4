//! Ordered observer registry.
//!
//! The registry is the notification source a host pipeline drives. Observers
//! are notified in registration order, and a failing observer never prevents
//! the remaining ones from seeing the same notification.

use crate::config::MonitorConfig;
use crate::error::{HookError, Result};
use crate::hooks::BuildHooks;
use crate::report::ArtifactReport;
use crate::reporter::SharedReporter;
use crate::size_guard::SizeGuard;
use crate::timer::BuildTimer;

/// Registry that dispatches lifecycle notifications to observers.
pub struct HookRegistry {
    hooks: Vec<Box<dyn BuildHooks>>,
}

impl HookRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registry with the built-in observers: [`BuildTimer`] then [`SizeGuard`].
    pub fn with_defaults(config: &MonitorConfig, reporter: SharedReporter) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::new();
        registry.add(BuildTimer::new(config.slow_build_secs, reporter.clone()));
        registry.add(SizeGuard::new(
            config.size_limit_bytes,
            config.script_suffix.clone(),
            reporter,
        ));
        Ok(registry)
    }

    /// Add an observer after the ones already registered
    pub fn add<H: BuildHooks + 'static>(&mut self, hooks: H) {
        self.hooks.push(Box::new(hooks));
    }

    /// Notify every observer that a full build is starting.
    pub fn run_start(&mut self) -> Result<()> {
        self.dispatch("run-start", |hooks| hooks.on_run_start())
    }

    /// Notify every observer that a watch-triggered rebuild is starting.
    pub fn watch_run_start(&mut self) -> Result<()> {
        self.dispatch("watch-run-start", |hooks| hooks.on_watch_run_start())
    }

    /// Notify every observer that the build finished with `report`.
    pub fn done(&mut self, report: &ArtifactReport) -> Result<()> {
        self.dispatch("build-done", |hooks| hooks.on_done(report))
    }

    /// Names of the registered observers, in notification order.
    pub fn names(&self) -> Vec<&str> {
        self.hooks.iter().map(|hooks| hooks.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run `notify` on every observer and return the first failure.
    fn dispatch<F>(&mut self, event: &str, mut notify: F) -> Result<()>
    where
        F: FnMut(&mut dyn BuildHooks) -> Result<()>,
    {
        let mut first_error: Option<HookError> = None;

        for hooks in self.hooks.iter_mut() {
            tracing::debug!(observer = hooks.name(), event, "dispatching");
            if let Err(err) = notify(hooks.as_mut()) {
                tracing::debug!(observer = hooks.name(), event, error = %err, "observer failed");
                first_error.get_or_insert(err);
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::{Level, MemoryReporter};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every notification it sees into a shared log.
    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
        fail_on_done: bool,
    }

    impl BuildHooks for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn on_run_start(&mut self) -> Result<()> {
            self.log.lock().push(format!("{}:run", self.name));
            Ok(())
        }

        fn on_watch_run_start(&mut self) -> Result<()> {
            self.log.lock().push(format!("{}:watch", self.name));
            Ok(())
        }

        fn on_done(&mut self, report: &ArtifactReport) -> Result<()> {
            self.log
                .lock()
                .push(format!("{}:done:{}", self.name, report.len()));
            if self.fail_on_done {
                return Err(HookError::Observer {
                    name: self.name.to_string(),
                    message: "refused".to_string(),
                });
            }
            Ok(())
        }
    }

    fn recorder(name: &'static str, log: &Arc<Mutex<Vec<String>>>, fail: bool) -> Recorder {
        Recorder {
            name,
            log: log.clone(),
            fail_on_done: fail,
        }
    }

    #[test]
    fn test_notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = HookRegistry::new();
        registry.add(recorder("first", &log, false));
        registry.add(recorder("second", &log, false));

        registry.run_start().unwrap();
        registry.watch_run_start().unwrap();
        registry.done(&ArtifactReport::new()).unwrap();

        assert_eq!(
            *log.lock(),
            vec![
                "first:run",
                "second:run",
                "first:watch",
                "second:watch",
                "first:done:0",
                "second:done:0",
            ]
        );
    }

    #[test]
    fn test_failure_does_not_skip_later_observers() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = HookRegistry::new();
        registry.add(recorder("broken", &log, true));
        registry.add(recorder("healthy", &log, false));

        let report: ArtifactReport = [("main.js", 1)].into_iter().collect();
        let err = registry.done(&report).unwrap_err();

        assert!(matches!(err, HookError::Observer { ref name, .. } if name == "broken"));
        assert_eq!(*log.lock(), vec!["broken:done:1", "healthy:done:1"]);
    }

    #[test]
    fn test_with_defaults_registers_builtins() {
        let reporter = Arc::new(MemoryReporter::new());
        let registry = HookRegistry::with_defaults(&MonitorConfig::default(), reporter).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["build-timer", "size-guard"]);
    }

    #[test]
    fn test_with_defaults_rejects_invalid_config() {
        let reporter = Arc::new(MemoryReporter::new());
        let config = MonitorConfig {
            size_limit_bytes: 0,
            ..Default::default()
        };
        assert!(HookRegistry::with_defaults(&config, reporter).is_err());
    }

    #[test]
    fn test_default_registry_full_cycle() {
        let reporter = Arc::new(MemoryReporter::new());
        let mut registry =
            HookRegistry::with_defaults(&MonitorConfig::default(), reporter.clone()).unwrap();

        registry.run_start().unwrap();
        let report: ArtifactReport = [("main.js", 1024), ("main.css", 999_999)]
            .into_iter()
            .collect();
        registry.done(&report).unwrap();

        let messages = reporter.messages();
        // start, timing, one size line (css ignored)
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].level, Level::Info);
        assert!(messages[0].text.contains("[Build]"));
        assert!(messages[2].text.contains("main.js"));
    }

    #[test]
    fn test_done_without_start_still_runs_size_guard() {
        let reporter = Arc::new(MemoryReporter::new());
        let mut registry =
            HookRegistry::with_defaults(&MonitorConfig::default(), reporter.clone()).unwrap();

        let report: ArtifactReport = [("main.js", 1024)].into_iter().collect();
        let err = registry.done(&report).unwrap_err();

        assert_eq!(err, HookError::TimerNotStarted);
        let messages = reporter.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].text.contains("main.js size OK"));
    }

    #[test]
    fn test_empty_registry() {
        let mut registry = HookRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.run_start().is_ok());
        assert!(registry.done(&ArtifactReport::new()).is_ok());
    }
}
