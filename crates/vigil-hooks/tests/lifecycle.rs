//! End-to-end lifecycle tests driving the built-in observers through the
//! registry the way a host pipeline would.

use std::sync::Arc;
use std::time::Duration;
use vigil_hooks::{
    ArtifactReport, BuildHooks, BuildTimer, HookError, HookRegistry, Level, ManualClock,
    MemoryReporter, MonitorConfig, SizeGuard,
};

fn registry_with_clock(
    config: &MonitorConfig,
) -> (HookRegistry, Arc<ManualClock>, Arc<MemoryReporter>) {
    let clock = Arc::new(ManualClock::new());
    let reporter = Arc::new(MemoryReporter::new());

    let mut registry = HookRegistry::new();
    registry.add(BuildTimer::with_clock(
        config.slow_build_secs,
        reporter.clone(),
        clock.clone(),
    ));
    registry.add(SizeGuard::new(
        config.size_limit_bytes,
        config.script_suffix.clone(),
        reporter.clone(),
    ));

    (registry, clock, reporter)
}

#[test]
fn test_build_then_watch_cycles() {
    let (mut registry, clock, reporter) = registry_with_clock(&MonitorConfig::default());
    let report: ArtifactReport = [
        ("main.3f2a.js", 120_000),
        ("vendors.9bc1.js", 640_000),
        ("main.3f2a.css", 48_000),
        ("index.html", 900),
    ]
    .into_iter()
    .collect();

    registry.run_start().unwrap();
    clock.advance(Duration::from_millis(2_500));
    registry.done(&report).unwrap();

    let first = reporter.take();
    let levels: Vec<_> = first.iter().map(|m| m.level).collect();
    assert_eq!(
        levels,
        vec![Level::Info, Level::Success, Level::Info, Level::Warning]
    );
    assert!(first[1].text.contains("2.50s"));
    assert!(first[3].text.starts_with("vendors.9bc1.js is too large"));

    registry.watch_run_start().unwrap();
    clock.advance(Duration::from_millis(7_250));
    registry.done(&report).unwrap();

    let second = reporter.take();
    assert!(second[0].text.starts_with("[Watch]"));
    assert_eq!(second[1].level, Level::Warning);
    assert!(second[1].text.contains("7.25s"));
    // size verdicts are unchanged between cycles
    assert_eq!(first[2..], second[2..]);
}

#[test]
fn test_custom_thresholds() {
    let config = MonitorConfig {
        slow_build_secs: 1.0,
        size_limit_bytes: 1024,
        script_suffix: ".mjs".to_string(),
    };
    let (mut registry, clock, reporter) = registry_with_clock(&config);
    let report: ArtifactReport = [("app.mjs", 2048), ("app.js", 1_000_000)]
        .into_iter()
        .collect();

    registry.run_start().unwrap();
    clock.advance(Duration::from_millis(1_500));
    registry.done(&report).unwrap();

    let messages = reporter.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].level, Level::Warning);
    assert_eq!(messages[2].level, Level::Warning);
    assert!(messages[2].text.contains("app.mjs"));
}

#[test]
fn test_done_without_start_reports_error() {
    let (mut registry, _, reporter) = registry_with_clock(&MonitorConfig::default());

    let err = registry.done(&ArtifactReport::new()).unwrap_err();
    assert_eq!(err, HookError::TimerNotStarted);
    assert!(reporter.messages().is_empty());
}

#[test]
fn test_host_observer_alongside_builtins() {
    struct Counter {
        builds: Arc<parking_lot::Mutex<usize>>,
    }

    impl BuildHooks for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn on_done(&mut self, _report: &ArtifactReport) -> vigil_hooks::Result<()> {
            *self.builds.lock() += 1;
            Ok(())
        }
    }

    let builds = Arc::new(parking_lot::Mutex::new(0));
    let (mut registry, _, _) = registry_with_clock(&MonitorConfig::default());
    registry.add(Counter {
        builds: builds.clone(),
    });

    for _ in 0..3 {
        registry.run_start().unwrap();
        registry.done(&ArtifactReport::new()).unwrap();
    }

    assert_eq!(*builds.lock(), 3);
}
