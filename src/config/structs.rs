//! Configuration struct definitions.

use serde::Deserialize;

/// Settings that apply to the logger as a whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Threshold name, parsed exactly like `with_level`.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "DEBUG".to_string(),
        }
    }
}

/// Where lines are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `stdout`, `stderr` or `file`.
    pub target: String,
    /// Log file for `target = "file"`; `~` is expanded. Falls back to the
    /// platform state directory when unset.
    pub path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            target: "stdout".to_string(),
            path: None,
        }
    }
}
