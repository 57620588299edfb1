//! JSON snapshot export
//!
//! Writes a machine-readable copy of a report's inputs next to the text file:
//! category, identity, crime type, date and time, charges and evidence. The
//! values are the ones captured when the report was generated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::models::{GeneratedReport, ReportInputs};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: &str = "1.0.0";

/// Inputs of one report, as saved alongside the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Form values the report was rendered from
    #[serde(flatten)]
    pub inputs: ReportInputs,
}

impl ReportSnapshot {
    /// Describe a generated report
    pub fn from_report(report: &GeneratedReport) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs: report.inputs.clone(),
        }
    }
}

/// Write a report snapshot as JSON
pub fn export_snapshot_json<W: Write>(
    report: &GeneratedReport,
    writer: &mut W,
    pretty: bool,
) -> ReportResult<()> {
    let snapshot = ReportSnapshot::from_report(report);

    if pretty {
        serde_json::to_writer_pretty(writer, &snapshot)
    } else {
        serde_json::to_writer(writer, &snapshot)
    }
    .map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}
