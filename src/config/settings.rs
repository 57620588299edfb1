//! User settings for crime-report
//!
//! Manages user preferences: the report time zone, the category a blank
//! report starts in, and where and how reports are saved.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::models::ReportCategory;

/// Snapshot file written next to a saved report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SidecarFormat {
    /// Only the text report
    None,
    /// `<name>.json` next to the text file (default)
    #[default]
    Json,
    /// `<name>.yaml` next to the text file
    Yaml,
}

impl SidecarFormat {
    /// File extension of the sidecar, if any
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Json => Some("json"),
            Self::Yaml => Some("yaml"),
        }
    }
}

/// User settings for crime-report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// IANA zone used for report dates and times
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Category a blank report starts in
    #[serde(default)]
    pub default_category: ReportCategory,

    /// Directory for saved reports (defaults to the exports directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Snapshot written alongside saved reports
    #[serde(default)]
    pub sidecar_format: SidecarFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_timezone() -> String {
    crate::clock::DEFAULT_TIMEZONE.name().to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            timezone: default_timezone(),
            default_category: ReportCategory::default(),
            export_dir: None,
            sidecar_format: SidecarFormat::default(),
        }
    }
}

impl Settings {
    /// Parse the configured time zone
    pub fn tz(&self) -> Result<Tz, ReportError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ReportError::Config(format!("Invalid timezone '{}': {}", self.timezone, e)))
    }

    /// Directory reports are saved to
    pub fn resolve_export_dir(&self, paths: &ReportPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReportError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            ReportError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
