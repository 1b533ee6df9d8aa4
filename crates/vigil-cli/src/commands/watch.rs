//! `vigil watch`: rebuild on every source change.

use crate::cli::WatchArgs;
use crate::commands::{Context, utils};
use crate::config::resolve_path;
use crate::error::{Result, ResultExt};
use crate::host::{BuildHost, FileChange, FileWatcher, IgnoreRules};
use crate::ui::{self, ConsoleReporter};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use vigil_hooks::RunKind;

/// How a build raced against shutdown ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuildOutcome {
    /// The build ran to completion, successfully or not
    Finished,
    /// Shutdown fired first and the build was dropped
    Stopped,
}

/// Execute the watch command.
///
/// Runs an initial full build, then a watch-triggered rebuild for every
/// batch of source changes until Ctrl+C. Build failures are reported and
/// watching continues.
pub async fn execute(args: WatchArgs, ctx: &Context) -> Result<()> {
    let (config, root) = utils::load_config(&args.overrides(), ctx)?;
    config.require_command()?;

    let reporter = Arc::new(ConsoleReporter::new(ctx.quiet));
    let mut host = BuildHost::new(&config, &root, reporter)?;

    // One listener for the whole session, so Ctrl+C during a build is not lost
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    if build_until_shutdown(&mut host, RunKind::Build, &mut shutdown).await == BuildOutcome::Stopped {
        return Ok(());
    }

    let watch_root = resolve_path(&config.watch_dir, &root);
    let rules = IgnoreRules {
        patterns: config.ignore.clone(),
        excluded_dirs: vec![host.out_dir().to_path_buf()],
    };
    let (watcher, mut changes) = FileWatcher::new(watch_root, rules, config.debounce_ms)
        .with_hint("Set 'watchDir' in vigil.config.json or pass --watch-dir")?;

    if !ctx.quiet {
        ui::info(&format!(
            "Watching {} for changes (Ctrl+C to stop)",
            watcher.root().display()
        ));
    }

    watch_loop(&mut host, &mut changes, &mut shutdown).await;

    if !ctx.quiet {
        ui::info("Stopping watch mode");
    }
    Ok(())
}

/// Rebuild once per batch of changes until the channel closes or
/// `shutdown` fires.
pub(crate) async fn watch_loop<S>(
    host: &mut BuildHost,
    changes: &mut mpsc::Receiver<FileChange>,
    shutdown: &mut S,
) where
    S: Future<Output = std::io::Result<()>> + Unpin,
{
    loop {
        tokio::select! {
            biased;
            _ = &mut *shutdown => break,
            change = changes.recv() => {
                let Some(change) = change else {
                    break;
                };
                let batched = drain_pending(changes);
                tracing::debug!(path = %change.path().display(), batched, "change detected");

                if build_until_shutdown(host, RunKind::Watch, shutdown).await == BuildOutcome::Stopped {
                    break;
                }
            }
        }
    }
}

/// Run one build unless `shutdown` fires first. Dropping the build kills
/// the child process.
pub(crate) async fn build_until_shutdown<S>(
    host: &mut BuildHost,
    kind: RunKind,
    shutdown: &mut S,
) -> BuildOutcome
where
    S: Future<Output = std::io::Result<()>> + Unpin,
{
    tokio::select! {
        biased;
        _ = &mut *shutdown => BuildOutcome::Stopped,
        result = host.build(kind) => {
            if let Err(err) = result {
                ui::error(&err.to_string());
            }
            BuildOutcome::Finished
        }
    }
}

/// Discard changes already queued so one rebuild covers them all.
fn drain_pending(changes: &mut mpsc::Receiver<FileChange>) -> usize {
    let mut drained = 0;
    while changes.try_recv().is_ok() {
        drained += 1;
    }
    drained
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_drain_pending_counts_queued_changes() {
        let (tx, mut rx) = mpsc::channel(8);
        for name in ["a.ts", "b.ts", "c.ts"] {
            tx.send(FileChange::Modified(PathBuf::from(name))).await.unwrap();
        }

        assert_eq!(drain_pending(&mut rx), 3);
        assert_eq!(drain_pending(&mut rx), 0);
    }

    #[cfg(unix)]
    mod host {
        use super::*;
        use crate::config::VigilConfig;
        use std::time::{Duration, Instant};
        use tempfile::TempDir;
        use vigil_hooks::MemoryReporter;

        fn host(temp: &TempDir, script: &str) -> (BuildHost, Arc<MemoryReporter>) {
            let config = VigilConfig {
                command: vec!["sh".to_string(), "-c".to_string(), script.to_string()],
                ..VigilConfig::default()
            };
            let reporter = Arc::new(MemoryReporter::new());
            let host = BuildHost::new(&config, temp.path(), reporter.clone()).unwrap();
            (host, reporter)
        }

        fn texts(reporter: &MemoryReporter) -> Vec<String> {
            reporter.messages().into_iter().map(|m| m.text).collect()
        }

        #[tokio::test]
        async fn test_queued_changes_trigger_one_watch_rebuild() {
            let temp = TempDir::new().unwrap();
            let (mut host, reporter) = host(&temp, "mkdir -p dist && printf 'x' > dist/app.js");

            let (tx, mut rx) = mpsc::channel(8);
            for name in ["src/a.ts", "src/b.ts", "src/a.ts"] {
                tx.send(FileChange::Modified(PathBuf::from(name))).await.unwrap();
            }
            drop(tx);

            let mut never = std::future::pending::<std::io::Result<()>>();
            watch_loop(&mut host, &mut rx, &mut never).await;

            let texts = texts(&reporter);
            let starts = texts.iter().filter(|t| *t == "[Watch] build started...").count();
            assert_eq!(starts, 1);
            assert!(texts.iter().any(|t| t.starts_with("[Watch] build finished in")));
            assert!(texts.iter().any(|t| t.starts_with("app.js size OK")));
        }

        #[tokio::test]
        async fn test_failed_rebuild_keeps_watching() {
            let temp = TempDir::new().unwrap();
            let (mut host, reporter) = host(&temp, "exit 1");

            let (tx, mut rx) = mpsc::channel(8);
            let mut never = std::future::pending::<std::io::Result<()>>();

            tx.send(FileChange::Modified(PathBuf::from("src/a.ts"))).await.unwrap();
            let seen = reporter.clone();
            let pending = tokio::spawn(async move {
                // second change only once the first rebuild has started
                while seen.messages().is_empty() {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                tx.send(FileChange::Modified(PathBuf::from("src/b.ts"))).await.unwrap();
            });

            watch_loop(&mut host, &mut rx, &mut never).await;
            pending.await.unwrap();

            let starts = texts(&reporter)
                .iter()
                .filter(|t| *t == "[Watch] build started...")
                .count();
            assert_eq!(starts, 2);
        }

        #[tokio::test]
        async fn test_shutdown_interrupts_running_build() {
            let temp = TempDir::new().unwrap();
            let (mut host, reporter) = host(&temp, "sleep 30");

            let mut shutdown = Box::pin(async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok::<(), std::io::Error>(())
            });

            let began = Instant::now();
            let outcome = build_until_shutdown(&mut host, RunKind::Watch, &mut shutdown).await;

            assert_eq!(outcome, BuildOutcome::Stopped);
            assert!(began.elapsed() < Duration::from_secs(10));
            assert!(!texts(&reporter).iter().any(|t| t.contains("build finished")));
        }

        #[tokio::test]
        async fn test_shutdown_stops_loop_before_next_rebuild() {
            let temp = TempDir::new().unwrap();
            let (mut host, reporter) = host(&temp, "mkdir -p dist");

            let (tx, mut rx) = mpsc::channel(8);
            tx.send(FileChange::Modified(PathBuf::from("src/a.ts"))).await.unwrap();

            let mut fired = std::future::ready(Ok::<(), std::io::Error>(()));
            watch_loop(&mut host, &mut rx, &mut fired).await;

            assert!(reporter.messages().is_empty());
            drop(tx);
        }
    }
}
