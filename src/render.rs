//! Report text rendering
//!
//! Turns a [`ReportState`] into the two paste-ready text blocks. The output
//! format is a fixed contract with the ticketing side, including the trailing
//! space in the header when NOV is unchecked and the space before the colon in
//! the Family crimes heading.

use crate::error::{ReportError, ReportResult};
use crate::models::{GeneratedReport, ReportCategory, ReportInputs, ReportState};

/// Width of the `=` separator lines
pub const SEPARATOR_WIDTH: usize = 50;

/// Suffix appended to the header when the NOV flag is set
pub const NOV_SUFFIX: &str = "Nov";

/// Placeholder for empty evidence fields and an empty charge list
pub const NOT_AVAILABLE: &str = "N/A";

/// A full separator line, newline included
pub fn separator() -> String {
    format!("{}\n", "=".repeat(SEPARATOR_WIDTH))
}

/// Render a report.
///
/// Fails with an input error when the subject name is empty.
pub fn render(state: &ReportState) -> ReportResult<GeneratedReport> {
    if state.subject_name.is_empty() {
        return Err(ReportError::name_required());
    }

    Ok(GeneratedReport::new(render_part1(state), render_part2(state))
        .with_inputs(ReportInputs::from_state(state)))
}

/// Header line: `name | crime | date time nov` plus a blank line
pub fn render_part1(state: &ReportState) -> String {
    let nov = if state.notice_of_violation {
        NOV_SUFFIX
    } else {
        ""
    };
    format!(
        "{} | {} | {} {} {}\n\n",
        state.subject_name, state.offense_label, state.occurred_date, state.occurred_time, nov
    )
}

/// Body: name line, evidence blocks and the crimes section
pub fn render_part2(state: &ReportState) -> String {
    let sep = separator();
    let mut out = format!("{} Name: {}\n\n", state.category, state.subject_name);
    out.push_str(&sep);

    for (key, raw) in state.active_fields() {
        let value = raw.trim();
        if value.is_empty() {
            out.push_str(&format!("{} {}\n", key.label(), NOT_AVAILABLE));
        } else {
            out.push_str(&format!("{}\n{}\n", key.label(), value));
        }
        out.push_str(&sep);
    }

    out.push_str(&render_crimes(state.category, &state.charges_in_order()));
    out.push_str(&sep);
    out
}

/// Crimes heading followed by one `- charge` line per charge, or `N/A`
fn render_crimes(category: ReportCategory, charges: &[&str]) -> String {
    let mut out = format!("{}\n", category.crimes_heading());
    if charges.is_empty() {
        out.push_str(NOT_AVAILABLE);
        out.push('\n');
    } else {
        for charge in charges {
            out.push_str(&format!("- {}\n", charge));
        }
    }
    out
}
