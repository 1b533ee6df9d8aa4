//! Terminal sink for observer messages.

use vigil_hooks::{Level, Message, Reporter};

/// Prints observer messages as status lines on stderr.
///
/// In quiet mode info and success lines are dropped; warnings always
/// come through.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Whether a message of `level` is printed.
    pub fn shows(&self, level: Level) -> bool {
        !self.quiet || level == Level::Warning
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, message: Message) {
        if !self.shows(message.level) {
            return;
        }

        match message.level {
            Level::Info => super::info(&message.text),
            Level::Success => super::success(&message.text),
            Level::Warning => super::warning(&message.text),
        }
    }
}
