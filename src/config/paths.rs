//! Path management for SmartSave
//!
//! Provides XDG-compliant path resolution for configuration, the saved ledger
//! and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `SMARTSAVE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/smartsave` or `~/.config/smartsave`
//! 3. Windows: `%APPDATA%\smartsave`

use std::path::PathBuf;

use crate::error::SmartSaveError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "SMARTSAVE_DATA_DIR";

/// Manages all paths used by SmartSave
#[derive(Debug, Clone)]
pub struct SmartSavePaths {
    /// Base directory for all SmartSave data
    base_dir: PathBuf,
}

impl SmartSavePaths {
    /// Create a new SmartSavePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SmartSaveError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SmartSavePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/smartsave/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/smartsave/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to ledger.json (the whole saved ledger)
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SmartSaveError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SmartSaveError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SmartSaveError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Whether a ledger has ever been saved here
    pub fn has_saved_ledger(&self) -> bool {
        self.ledger_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SmartSaveError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SmartSaveError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("smartsave"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SmartSaveError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SmartSaveError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("smartsave"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.has_saved_ledger());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSavePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("ledger.json")
        );
    }
}
