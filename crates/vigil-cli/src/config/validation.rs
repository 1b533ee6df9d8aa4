use crate::config::VigilConfig;
use crate::error::{ConfigError, Result};
use vigil_hooks::HookError;

/// Upper bound for the watcher debounce window.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

impl VigilConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        self.monitor.validate().map_err(|err| match err {
            HookError::InvalidConfig { field, value, hint } => {
                ConfigError::InvalidValue { field, value, hint }
            }
            other => ConfigError::Extract(other.to_string()),
        })?;

        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::InvalidValue {
                field: "debounceMs".to_string(),
                value: self.debounce_ms.to_string(),
                hint: format!("Use at most {}ms", MAX_DEBOUNCE_MS),
            }
            .into());
        }

        if self.command.iter().any(|part| part.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "command".to_string(),
                value: format!("{:?}", self.command),
                hint: "Command parts cannot be empty strings".to_string(),
            }
            .into());
        }

        if self.ignore.iter().any(|pattern| pattern.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "ignore".to_string(),
                value: format!("{:?}", self.ignore),
                hint: "Remove empty ignore patterns".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Ensure a build command is available.
    pub fn require_command(&self) -> Result<&[String]> {
        if self.command.is_empty() {
            return Err(crate::error::BuildError::EmptyCommand.into());
        }
        Ok(&self.command)
    }
}
