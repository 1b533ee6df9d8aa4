//! Source watcher with debouncing for watch mode.
//!
//! Watches a directory recursively and filters out ignored paths, hidden
//! files and anything under the build output directory.

use crate::error::{CliError, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// File change event type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    /// File was modified
    Modified(PathBuf),
    /// File was created
    Created(PathBuf),
    /// File was removed
    Removed(PathBuf),
}

impl FileChange {
    /// Get the path affected by this change.
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Modified(p) | FileChange::Created(p) | FileChange::Removed(p) => p,
        }
    }
}

/// Paths the watcher never reports.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    /// Patterns relative to the watch root ("node_modules", "*.log")
    pub patterns: Vec<String>,
    /// Absolute directories excluded entirely (the build output)
    pub excluded_dirs: Vec<PathBuf>,
}

/// File watcher with debouncing and filtering.
///
/// Dropping the watcher stops event delivery and closes the channel.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    root: PathBuf,
}

impl FileWatcher {
    /// Start watching `root` recursively.
    ///
    /// Returns the watcher and a receiver of change events.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist or the platform watcher
    /// cannot be created.
    pub fn new(
        root: PathBuf,
        rules: IgnoreRules,
        debounce_ms: u64,
    ) -> Result<(Self, mpsc::Receiver<FileChange>)> {
        if !root.exists() {
            return Err(CliError::FileNotFound(root));
        }
        // notify reports absolute paths
        let root = root.canonicalize()?;
        let rules = IgnoreRules {
            excluded_dirs: rules
                .excluded_dirs
                .iter()
                .map(|dir| canonicalize_existing(dir))
                .collect(),
            ..rules
        };

        let (tx, rx) = mpsc::channel(100);

        let debounce_duration = Duration::from_millis(debounce_ms);
        let mut last_event: Option<(PathBuf, Instant)> = None;
        let root_clone = root.clone();

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(err) => {
                    tracing::warn!(error = %err, "file watcher error");
                    return;
                }
            };

            for path in &event.paths {
                if Self::should_ignore(path, &root_clone, &rules) {
                    continue;
                }

                // Same file changed within the debounce window
                let now = Instant::now();
                if let Some((last_path, last_time)) = &last_event {
                    if last_path == path && now.duration_since(*last_time) < debounce_duration {
                        continue;
                    }
                }

                let change = match event.kind {
                    notify::EventKind::Create(_) => FileChange::Created(path.clone()),
                    notify::EventKind::Modify(_) => FileChange::Modified(path.clone()),
                    notify::EventKind::Remove(_) => FileChange::Removed(path.clone()),
                    _ => continue,
                };

                last_event = Some((path.clone(), now));

                // Receiver gone: watch loop has shut down
                if tx.blocking_send(change).is_err() {
                    return;
                }
            }
        })?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        tracing::debug!(root = %root.display(), "watching for changes");

        Ok((
            Self {
                _watcher: watcher,
                root,
            },
            rx,
        ))
    }

    /// Check if a path should be ignored.
    fn should_ignore(path: &Path, root: &Path, rules: &IgnoreRules) -> bool {
        // Only watch files within root
        let rel_path = match path.strip_prefix(root) {
            Ok(p) => p,
            Err(_) => return true,
        };

        // Build output would retrigger the build that produced it
        if rules.excluded_dirs.iter().any(|dir| path.starts_with(dir)) {
            return true;
        }

        let path_str = rel_path.to_string_lossy();

        for pattern in &rules.patterns {
            if let Some(ext) = pattern.strip_prefix('*') {
                if path_str.ends_with(ext) {
                    return true;
                }
            } else if path_str.starts_with(pattern.as_str())
                || path_str.contains(&format!("/{}", pattern))
            {
                return true;
            }
        }

        // Hidden files and directories (.git, editor swap files)
        rel_path.components().any(|component| {
            component
                .as_os_str()
                .to_str()
                .is_some_and(|name| name.starts_with('.') && name != "." && name != "..")
        })
    }

    /// Get the root directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Canonicalize the deepest existing ancestor of `path` and re-join the rest.
///
/// The output directory may not exist yet when watching starts; its events
/// still arrive under the canonical root.
fn canonicalize_existing(path: &Path) -> PathBuf {
    for ancestor in path.ancestors() {
        let Ok(canonical) = ancestor.canonicalize() else {
            continue;
        };
        return match path.strip_prefix(ancestor) {
            Ok(rest) => canonical.join(rest),
            Err(_) => canonical,
        };
    }
    path.to_path_buf()
}
