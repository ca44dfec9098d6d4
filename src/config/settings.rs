//! User settings for Flowva
//!
//! Manages preferences for the terminal loop, logging, and the summary
//! printed when the wizard exits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::paths::FlowvaPaths;
use crate::error::FlowvaError;

/// Output format for the onboarding summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Json,
    Yaml,
}

impl fmt::Display for SummaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for SummaryFormat {
    type Err = FlowvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(FlowvaError::Config(format!(
                "Unknown summary format '{}' (expected json or yaml)",
                other
            ))),
        }
    }
}

/// User settings for Flowva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Interval between tick events in the terminal loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log filter used when `FLOWVA_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Format of the summary printed on exit
    #[serde(default)]
    pub summary_format: SummaryFormat,

    /// Whether to print the summary on exit at all
    #[serde(default = "default_true")]
    pub print_summary: bool,

    /// Whether the status bar shows key hints
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            summary_format: SummaryFormat::default(),
            print_summary: true,
            show_key_hints: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FlowvaPaths) -> Result<Self, FlowvaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FlowvaError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FlowvaError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FlowvaPaths) -> Result<(), FlowvaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FlowvaError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            FlowvaError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Tick interval as a Duration
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
