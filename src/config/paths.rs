//! Path management for crime-report
//!
//! Provides XDG-compliant path resolution for configuration and exports.
//!
//! ## Path Resolution Order
//!
//! 1. `CRIME_REPORT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/crime-report` or `~/.config/crime-report`
//! 3. Windows: `%APPDATA%\crime-report`

use std::path::PathBuf;

use crate::error::ReportError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CRIME_REPORT_DATA_DIR";

/// Manages all paths used by crime-report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for all crime-report files
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/crime-report/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default directory for saved reports (~/.config/crime-report/exports/)
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure the base and export directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("crime-report"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| ReportError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("crime-report"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReportError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("crime-report"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.export_dir(), temp_dir.path().join("exports"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var(DATA_DIR_ENV, custom_path);
        let paths = ReportPaths::new().unwrap();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.export_dir().exists());
    }
}
