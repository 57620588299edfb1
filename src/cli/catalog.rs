//! Catalog CLI commands
//!
//! Lists the charges and evidence keys accepted by `generate`.

use crate::display::{format_charge_catalog, format_evidence_fields};
use crate::error::ReportResult;
use crate::models::ReportCategory;

/// Handle `crime-report charges`
pub fn handle_charges_command() -> ReportResult<()> {
    print!("{}", format_charge_catalog(None));
    Ok(())
}

/// Handle `crime-report fields`
pub fn handle_fields_command(category: Option<&str>) -> ReportResult<()> {
    let category = match category {
        Some(s) => Some(ReportCategory::parse(s).ok_or_else(|| {
            crate::error::ReportError::Input(format!(
                "Unknown category '{}'. Use gang or family.",
                s
            ))
        })?),
        None => None,
    };

    print!("{}", format_evidence_fields(category));
    Ok(())
}
