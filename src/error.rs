//! Custom error types for crime-report
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// Message shown when a report is generated without a subject name
pub const NAME_REQUIRED: &str = "Please enter a Name";

/// Message shown when a copy or export is attempted before generating
pub const NO_REPORT: &str = "Please generate a report first";

/// The main error type for crime-report operations
#[derive(Error, Debug)]
pub enum ReportError {
    /// Missing or invalid form input. The message is shown to the user as-is.
    #[error("{0}")]
    Input(String),

    /// Copy or export requested before a report was generated
    #[error("{0}")]
    NoReport(String),

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

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Clipboard errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ReportError {
    /// The error raised when generating without a subject name
    pub fn name_required() -> Self {
        Self::Input(NAME_REQUIRED.to_string())
    }

    /// The error raised when copying or exporting before generating
    pub fn no_report() -> Self {
        Self::NoReport(NO_REPORT.to_string())
    }

    /// Check if this is an input error the user can correct and retry
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    /// Check if this error means there is nothing generated yet
    pub fn is_no_report(&self) -> bool {
        matches!(self, Self::NoReport(_))
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for crime-report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_message() {
        let err = ReportError::name_required();
        assert_eq!(err.to_string(), "Please enter a Name");
        assert!(err.is_input());
    }

    #[test]
    fn test_no_report_message() {
        let err = ReportError::no_report();
        assert_eq!(err.to_string(), "Please generate a report first");
        assert!(err.is_no_report());
        assert!(!err.is_input());
    }

    #[test]
    fn test_config_error_display() {
        let err = ReportError::Config("bad zone".into());
        assert_eq!(err.to_string(), "Configuration error: bad zone");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let report_err: ReportError = io_err.into();
        assert!(matches!(report_err, ReportError::Io(_)));
    }
}
