//! Export module for crime-report
//!
//! Saves generated reports to disk:
//! - Text: the full report, named `{name}_{date}_report.txt`
//! - JSON: machine-readable snapshot of the report inputs
//! - YAML: the same snapshot, human-readable

pub mod json;
pub mod text;
pub mod yaml;

pub use json::{export_snapshot_json, ReportSnapshot, SNAPSHOT_SCHEMA_VERSION};
pub use text::{report_filename, save_report, SavedReport, TEXT_MIME};
pub use yaml::export_snapshot_yaml;
