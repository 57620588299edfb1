//! YAML snapshot export
//!
//! Same content as the JSON snapshot, for people who read the files by hand.

use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::export::json::ReportSnapshot;
use crate::models::GeneratedReport;

/// Write a report snapshot as YAML with a short header comment
pub fn export_snapshot_yaml<W: Write>(report: &GeneratedReport, writer: &mut W) -> ReportResult<()> {
    let snapshot = ReportSnapshot::from_report(report);

    let header = format!(
        "# Crime report snapshot\n# Generated: {}\n# App Version: {}\n\n",
        snapshot.exported_at, snapshot.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ReportError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::ReportState;

    #[test]
    fn test_yaml_snapshot() {
        let mut state = ReportState::new(&FixedClock::london(2024, 3, 9, 21, 5).unwrap());
        state.set_subject_name("Ballas");
        state.set_notice_of_violation(true);
        state.toggle_charge("PC 2.13.3 Vandalism");
        let report = state.generate().unwrap().clone();

        let mut output = Vec::new();
        export_snapshot_yaml(&report, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Crime report snapshot"));
        assert!(yaml.contains("type: Gang"));
        assert!(yaml.contains("name: Ballas"));
        assert!(yaml.contains("nov: true"));
        assert!(yaml.contains("- PC 2.13.3 Vandalism"));

        let body: String = yaml
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: ReportSnapshot = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.inputs.date, "09.03.2024");
        assert_eq!(parsed.inputs.time, "21:05");
    }
}
