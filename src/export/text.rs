//! Plain-text report export
//!
//! Saves the full generated report under the conventional file name, plus an
//! optional snapshot file with the same stem.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::SidecarFormat;
use crate::error::{ReportError, ReportResult};
use crate::models::{GeneratedReport, ReportState};

use super::json::export_snapshot_json;
use super::yaml::export_snapshot_yaml;

/// MIME type of the text export
pub const TEXT_MIME: &str = "text/plain";

/// Paths written by a save
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedReport {
    /// The `.txt` report
    pub text_path: PathBuf,
    /// Snapshot file, when one was requested
    pub sidecar_path: Option<PathBuf>,
}

/// Characters no file name may contain on any platform we save to
const RESERVED_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Make free text safe to use as one path component.
///
/// Separators and reserved characters become `_`, so the result never
/// leaves the directory it is joined onto.
fn sanitize_component(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() || RESERVED_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// File name for a report: `{name}_{DD-MM-YYYY}_report.txt`.
///
/// Built from the values the report was generated from.
pub fn report_filename(report: &GeneratedReport) -> String {
    format!(
        "{}_{}_report.txt",
        sanitize_component(&report.inputs.name),
        sanitize_component(&report.inputs.date.replace('.', "-"))
    )
}

/// Save the generated report into `dir`.
///
/// Fails with `NoReport` if nothing has been generated yet.
pub fn save_report(
    state: &ReportState,
    dir: &Path,
    sidecar: SidecarFormat,
) -> ReportResult<SavedReport> {
    let report = state.generated.as_ref().ok_or_else(ReportError::no_report)?;

    std::fs::create_dir_all(dir).map_err(|e| {
        ReportError::Export(format!("Failed to create {}: {}", dir.display(), e))
    })?;

    let text_path = dir.join(report_filename(report));
    std::fs::write(&text_path, &report.full_report).map_err(|e| {
        ReportError::Export(format!("Failed to write {}: {}", text_path.display(), e))
    })?;

    let sidecar_path = match sidecar.extension() {
        Some(ext) => {
            let path = text_path.with_extension(ext);
            write_sidecar(report, &path, sidecar)?;
            Some(path)
        }
        None => None,
    };

    tracing::info!(path = %text_path.display(), "saved report");

    Ok(SavedReport {
        text_path,
        sidecar_path,
    })
}

fn write_sidecar(report: &GeneratedReport, path: &Path, format: SidecarFormat) -> ReportResult<()> {
    let file = File::create(path).map_err(|e| {
        ReportError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        SidecarFormat::Json => export_snapshot_json(report, &mut writer, true)?,
        SidecarFormat::Yaml => export_snapshot_yaml(report, &mut writer)?,
        SidecarFormat::None => {}
    }

    writer.flush().map_err(|e| ReportError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use tempfile::TempDir;

    fn generated_state() -> ReportState {
        let mut state = ReportState::new(&FixedClock::london(2024, 1, 1, 13, 45).unwrap());
        state.set_subject_name("John Smith");
        state.set_offense_label("Robbery");
        state.generate().unwrap();
        state
    }

    #[test]
    fn test_report_filename() {
        let state = generated_state();
        assert_eq!(
            report_filename(state.generated.as_ref().unwrap()),
            "John Smith_01-01-2024_report.txt"
        );
    }

    fn generated_named(name: &str) -> ReportState {
        let mut state = ReportState::new(&FixedClock::london(2024, 1, 1, 13, 45).unwrap());
        state.set_subject_name(name);
        state.generate().unwrap();
        state
    }

    #[test]
    fn test_filename_replaces_reserved_characters() {
        let state = generated_named("Ballas/Vagos \\ \"A|B\"?\tX");
        assert_eq!(
            report_filename(state.generated.as_ref().unwrap()),
            "Ballas_Vagos _ _A_B___X_01-01-2024_report.txt"
        );
    }

    #[test]
    fn test_save_name_with_slash_stays_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let state = generated_named("Ballas/Vagos");

        let saved = save_report(&state, temp_dir.path(), SidecarFormat::None).unwrap();
        assert_eq!(saved.text_path.parent(), Some(temp_dir.path()));
        assert_eq!(
            saved.text_path.file_name().unwrap(),
            "Ballas_Vagos_01-01-2024_report.txt"
        );
        assert!(saved.text_path.exists());
    }

    #[test]
    fn test_save_parent_segments_stay_in_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("out");
        let state = generated_named("../escape");

        let saved = save_report(&state, &out, SidecarFormat::Json).unwrap();
        assert_eq!(saved.text_path.parent(), Some(out.as_path()));
        assert!(out.join(".._escape_01-01-2024_report.txt").exists());
        assert!(out.join(".._escape_01-01-2024_report.json").exists());
        assert!(!temp_dir.path().join("escape_01-01-2024_report.txt").exists());
    }

    #[test]
    fn test_save_after_edit_uses_generated_values() {
        let temp_dir = TempDir::new().unwrap();
        let mut state = generated_named("Ballas");
        state.set_subject_name("Vagos");
        state.set_occurred_date("02.02.2024");

        let saved = save_report(&state, temp_dir.path(), SidecarFormat::Json).unwrap();
        assert_eq!(
            saved.text_path.file_name().unwrap(),
            "Ballas_01-01-2024_report.txt"
        );
        let text = std::fs::read_to_string(&saved.text_path).unwrap();
        assert!(text.starts_with("Ballas |  | 01.01.2024 13:45"));

        let sidecar = std::fs::read_to_string(saved.sidecar_path.unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&sidecar).unwrap();
        assert_eq!(value["name"], "Ballas");
        assert_eq!(value["date"], "01.01.2024");
        assert!(!sidecar.contains("Vagos"));
    }

    #[test]
    fn test_save_requires_generated_report() {
        let temp_dir = TempDir::new().unwrap();
        let state = ReportState::new(&FixedClock::london(2024, 1, 1, 13, 45).unwrap());
        let err = save_report(&state, temp_dir.path(), SidecarFormat::None).unwrap_err();
        assert!(err.is_no_report());
    }

    #[test]
    fn test_save_text_only() {
        let temp_dir = TempDir::new().unwrap();
        let state = generated_state();

        let saved = save_report(&state, temp_dir.path(), SidecarFormat::None).unwrap();
        assert!(saved.sidecar_path.is_none());

        let content = std::fs::read_to_string(&saved.text_path).unwrap();
        assert_eq!(content, state.generated.as_ref().unwrap().full_report);
    }

    #[test]
    fn test_save_with_json_sidecar() {
        let temp_dir = TempDir::new().unwrap();
        let state = generated_state();

        let saved = save_report(&state, &temp_dir.path().join("out"), SidecarFormat::Json).unwrap();
        let sidecar = saved.sidecar_path.unwrap();
        assert_eq!(
            sidecar.file_name().unwrap().to_str().unwrap(),
            "John Smith_01-01-2024_report.json"
        );

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(sidecar).unwrap()).unwrap();
        assert_eq!(value["name"], "John Smith");
    }

    #[test]
    fn test_save_with_yaml_sidecar() {
        let temp_dir = TempDir::new().unwrap();
        let state = generated_state();

        let saved = save_report(&state, temp_dir.path(), SidecarFormat::Yaml).unwrap();
        let sidecar = saved.sidecar_path.unwrap();
        assert_eq!(sidecar.extension().unwrap(), "yaml");
        assert!(std::fs::read_to_string(sidecar).unwrap().contains("crime: Robbery"));
    }
}
