//! Custom error types for Flowva onboarding
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Form validation problems are not errors
//! at this level; they stay inside the step that raised them.

use thiserror::Error;

/// The main error type for Flowva operations
#[derive(Error, Debug)]
pub enum FlowvaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A replay key script could not be parsed
    #[error("Invalid key script token '{token}': {reason}")]
    Script { token: String, reason: String },

    /// Advance was requested while the final step is already active
    #[error("Onboarding is already on its final step ({step})")]
    FlowComplete { step: &'static str },

    /// An answer was submitted while a different step is active
    #[error("Answer for step {answered} submitted while {current} is active")]
    StepMismatch {
        current: &'static str,
        answered: &'static str,
    },

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FlowvaError {
    /// Create a script error for an unrecognized token
    pub fn unknown_key(token: impl Into<String>) -> Self {
        Self::Script {
            token: token.into(),
            reason: "unknown key name".into(),
        }
    }

    /// Check if this error means the flow cannot advance any further
    pub fn is_flow_complete(&self) -> bool {
        matches!(self, Self::FlowComplete { .. })
    }
}

impl From<std::io::Error> for FlowvaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FlowvaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for FlowvaError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for Flowva operations
pub type FlowvaResult<T> = Result<T, FlowvaError>;
