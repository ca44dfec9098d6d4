//! Path management for Flowva
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `FLOWVA_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/flowva` or `~/.config/flowva`
//! 3. Windows: `%APPDATA%\flowva`

use std::path::PathBuf;

use crate::error::FlowvaError;

/// Name of the environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "FLOWVA_HOME";

/// Manages all paths used by Flowva
#[derive(Debug, Clone)]
pub struct FlowvaPaths {
    /// Base directory for all Flowva files
    base_dir: PathBuf,
}

impl FlowvaPaths {
    /// Create a new FlowvaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlowvaError> {
        let base_dir = if let Ok(custom) = std::env::var(HOME_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FlowvaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/flowva/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the log directory (~/.config/flowva/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Name of the log file inside the log directory
    pub fn log_file_name(&self) -> &'static str {
        "flowva.log"
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), FlowvaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FlowvaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| FlowvaError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FlowvaError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FlowvaError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("flowva"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FlowvaError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FlowvaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("flowva"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowvaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.log_dir(), temp_dir.path().join("logs"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(HOME_ENV_VAR, custom_path);
        let paths = FlowvaPaths::new().unwrap();
        env::remove_var(HOME_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FlowvaPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.log_dir().exists());
    }
}
