//! Thresholds shared by the built-in observers.

use crate::error::{HookError, Result};
use serde::{Deserialize, Serialize};

/// Builds slower than this many seconds are flagged.
pub const DEFAULT_SLOW_BUILD_SECS: f64 = 5.0;

/// Script artifacts above this many bytes are flagged (500 KB).
pub const DEFAULT_SIZE_LIMIT_BYTES: u64 = 500 * 1024;

/// Only artifacts ending with this suffix are size-checked.
pub const DEFAULT_SCRIPT_SUFFIX: &str = ".js";

/// Thresholds for [`BuildTimer`](crate::BuildTimer) and
/// [`SizeGuard`](crate::SizeGuard).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorConfig {
    /// Builds taking longer than this are reported as warnings
    #[serde(default = "default_slow_build_secs")]
    pub slow_build_secs: f64,

    /// Size budget for a single script artifact
    #[serde(default = "default_size_limit_bytes")]
    pub size_limit_bytes: u64,

    /// File-name suffix selecting the artifacts to size-check
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            slow_build_secs: DEFAULT_SLOW_BUILD_SECS,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
            script_suffix: DEFAULT_SCRIPT_SUFFIX.to_string(),
        }
    }
}

impl MonitorConfig {
    /// Reject thresholds the observers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.slow_build_secs.is_finite() || self.slow_build_secs < 0.0 {
            return Err(HookError::InvalidConfig {
                field: "slowBuildSecs".to_string(),
                value: self.slow_build_secs.to_string(),
                hint: "Use a finite number of seconds, zero or greater".to_string(),
            });
        }

        if self.size_limit_bytes == 0 {
            return Err(HookError::InvalidConfig {
                field: "sizeLimitBytes".to_string(),
                value: "0".to_string(),
                hint: "Use a positive byte count, e.g. 512000 for 500KB".to_string(),
            });
        }

        if self.script_suffix.is_empty() {
            return Err(HookError::InvalidConfig {
                field: "scriptSuffix".to_string(),
                value: "\"\"".to_string(),
                hint: "Use a file suffix such as \".js\"".to_string(),
            });
        }

        Ok(())
    }
}

pub fn default_slow_build_secs() -> f64 {
    DEFAULT_SLOW_BUILD_SECS
}

pub fn default_size_limit_bytes() -> u64 {
    DEFAULT_SIZE_LIMIT_BYTES
}

pub fn default_script_suffix() -> String {
    DEFAULT_SCRIPT_SUFFIX.to_string()
}
