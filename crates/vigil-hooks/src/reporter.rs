//! Message sinks for observer output.
//!
//! Observers never write to stdout themselves. They hand a [`Message`] to a
//! [`Reporter`], and the host decides where it ends up: tracing events for
//! library users, colored terminal lines for the CLI, or an in-memory buffer
//! for tests.

use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Severity of an observer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Neutral progress information (build started, size within budget)
    Info,
    /// A build finished within its time budget
    Success,
    /// A slow build or an oversized artifact
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warning => "warning",
        };
        f.write_str(s)
    }
}

/// A single human-readable status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    pub fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Level::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Level::Success, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Level::Warning, text)
    }
}

/// Destination for observer messages.
pub trait Reporter: Send + Sync {
    fn report(&self, message: Message);
}

/// Shared handle to a reporter, cloned into every observer.
pub type SharedReporter = Arc<dyn Reporter>;

/// Forwards messages as `tracing` events.
///
/// This is the default sink: the library emits events and leaves
/// formatting to whatever subscriber the host installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, message: Message) {
        match message.level {
            Level::Info => tracing::info!(target: "vigil", "{}", message.text),
            Level::Success => tracing::info!(target: "vigil", status = "ok", "{}", message.text),
            Level::Warning => tracing::warn!(target: "vigil", "{}", message.text),
        }
    }
}

/// Buffers messages in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    messages: Mutex<Vec<Message>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every message received so far.
    pub fn messages(&self) -> Vec<Message> {
        self.messages.lock().clone()
    }

    /// Remove and return the buffered messages.
    pub fn take(&self) -> Vec<Message> {
        std::mem::take(&mut *self.messages.lock())
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, message: Message) {
        self.messages.lock().push(message);
    }
}
