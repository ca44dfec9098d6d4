//! File logging for Flowva
//!
//! The wizard owns the terminal, so tracing output goes to
//! `logs/flowva.log` under the base directory instead of stderr.

use tracing_subscriber::EnvFilter;

use crate::config::{FlowvaPaths, Settings};
use crate::error::{FlowvaError, FlowvaResult};

/// Environment variable holding a filter directive that overrides the settings
pub const LOG_ENV_VAR: &str = "FLOWVA_LOG";

/// Build the filter: `FLOWVA_LOG` first, then the configured level, then `info`
fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file
///
/// # Errors
///
/// Fails if the log directory cannot be created or a subscriber is
/// already installed.
pub fn init_logging(paths: &FlowvaPaths, settings: &Settings) -> FlowvaResult<()> {
    paths.ensure_directories()?;

    let appender = tracing_appender::rolling::never(paths.log_dir(), paths.log_file_name());

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| FlowvaError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(dir = %paths.log_dir().display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        let settings = Settings {
            log_level: "not a [valid filter".into(),
            ..Settings::default()
        };
        // Must not panic on a bad directive
        let filter = build_filter(&settings);
        assert!(!filter.to_string().is_empty());
    }
}
