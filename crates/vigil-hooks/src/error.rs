//! Error types raised by build observers.

use thiserror::Error;

/// Errors produced while dispatching lifecycle notifications.
#[derive(Debug, Error, PartialEq)]
pub enum HookError {
    /// A done notification arrived while no build was being timed
    #[error("Build finished without a recorded start\n\nHint: the host must fire run-start or watch-run-start before build-done")]
    TimerNotStarted,

    /// Monitor configuration value is out of range
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidConfig {
        /// Name of the offending field
        field: String,
        /// The rejected value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// Failure raised by a host-provided observer
    #[error("Observer '{name}' failed: {message}")]
    Observer {
        /// Observer name as returned by `BuildHooks::name`
        name: String,
        /// Failure description
        message: String,
    },
}

/// Result alias for observer operations.
pub type Result<T, E = HookError> = std::result::Result<T, E>;
