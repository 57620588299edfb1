//! Report state model
//!
//! `ReportState` is the in-progress report behind the form. Every edit is a
//! plain, infallible mutation; only generation can fail, and it lives in
//! [`crate::render`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::ReportCategory;
use super::charges::ChargeSelection;
use super::evidence::EvidenceKey;
use crate::clock::Clock;

/// The two text blocks of a generated report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// One-line header followed by a blank line
    pub part1: String,

    /// Structured body
    pub part2: String,

    /// `part1` followed by `part2`
    pub full_report: String,

    /// Form values the text was rendered from
    #[serde(default)]
    pub inputs: ReportInputs,
}

impl GeneratedReport {
    /// Assemble a report from its two parts
    pub fn new(part1: String, part2: String) -> Self {
        let full_report = format!("{}{}", part1, part2);
        Self {
            part1,
            part2,
            full_report,
            inputs: ReportInputs::default(),
        }
    }

    /// Attach the form values the report was rendered from
    pub fn with_inputs(mut self, inputs: ReportInputs) -> Self {
        self.inputs = inputs;
        self
    }

    /// Text to paste for part 1 (surrounding whitespace removed)
    pub fn part1_for_clipboard(&self) -> &str {
        self.part1.trim()
    }

    /// Text to paste for part 2 (surrounding whitespace removed)
    pub fn part2_for_clipboard(&self) -> &str {
        self.part2.trim()
    }
}

/// Form values captured when a report is generated.
///
/// Saved files are named and described from these, so later edits to the
/// form never disagree with the text that was rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInputs {
    /// Gang or Family
    #[serde(rename = "type")]
    pub category: ReportCategory,

    /// Subject name, trimmed
    pub name: String,

    /// Crime type, trimmed
    pub crime: String,

    /// `DD.MM.YYYY`
    pub date: String,

    /// `HH:MM`
    pub time: String,

    /// Notice of Violation flag
    #[serde(default)]
    pub nov: bool,

    /// Selected charges in catalog order
    pub crimes: Vec<String>,

    /// Evidence of the active category by field key, values trimmed
    pub fields: BTreeMap<String, String>,
}

impl ReportInputs {
    /// Capture the current values of a report
    pub fn from_state(state: &ReportState) -> Self {
        Self {
            category: state.category,
            name: state.subject_name.trim().to_string(),
            crime: state.offense_label.trim().to_string(),
            date: state.occurred_date.trim().to_string(),
            time: state.occurred_time.trim().to_string(),
            nov: state.notice_of_violation,
            crimes: state
                .charges_in_order()
                .into_iter()
                .map(String::from)
                .collect(),
            fields: state
                .active_fields()
                .map(|(key, value)| (key.to_string(), value.trim().to_string()))
                .collect(),
        }
    }
}

/// One in-progress report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportState {
    /// Gang or Family
    pub category: ReportCategory,

    /// Name of the gang or family; required to generate
    pub subject_name: String,

    /// Free-text crime type
    pub offense_label: String,

    /// `DD.MM.YYYY`, user-editable
    pub occurred_date: String,

    /// `HH:MM`, user-editable
    pub occurred_time: String,

    /// Notice of Violation flag
    pub notice_of_violation: bool,

    /// Selected charges
    pub selected_charges: ChargeSelection,

    /// Raw evidence values, untrimmed
    #[serde(default)]
    pub evidence: BTreeMap<EvidenceKey, String>,

    /// Last successful generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<GeneratedReport>,
}

impl ReportState {
    /// Create a blank Gang report stamped with the current date and time
    pub fn new(clock: &impl Clock) -> Self {
        Self::with_category(ReportCategory::default(), clock)
    }

    /// Create a blank report of the given category
    pub fn with_category(category: ReportCategory, clock: &impl Clock) -> Self {
        let now = clock.now();
        Self {
            category,
            subject_name: String::new(),
            offense_label: String::new(),
            occurred_date: crate::clock::format_date(&now),
            occurred_time: crate::clock::format_time(&now),
            notice_of_violation: false,
            selected_charges: ChargeSelection::new(),
            evidence: BTreeMap::new(),
            generated: None,
        }
    }

    /// Switch category. Evidence values are emptied so nothing leaks between
    /// schemas; identity, timestamps, NOV and charges are kept.
    pub fn set_category(&mut self, category: ReportCategory) {
        self.category = category;
        self.evidence.clear();
    }

    /// Set the subject (gang/family) name
    pub fn set_subject_name(&mut self, name: impl Into<String>) {
        self.subject_name = name.into();
    }

    /// Set the crime type
    pub fn set_offense_label(&mut self, label: impl Into<String>) {
        self.offense_label = label.into();
    }

    /// Set the date text as typed
    pub fn set_occurred_date(&mut self, date: impl Into<String>) {
        self.occurred_date = date.into();
    }

    /// Set the time text as typed
    pub fn set_occurred_time(&mut self, time: impl Into<String>) {
        self.occurred_time = time.into();
    }

    /// Re-stamp the date from the clock
    pub fn set_date_now(&mut self, clock: &impl Clock) {
        self.occurred_date = clock.today();
    }

    /// Re-stamp the time from the clock
    pub fn set_time_now(&mut self, clock: &impl Clock) {
        self.occurred_time = clock.time_of_day();
    }

    /// Set the Notice of Violation flag
    pub fn set_notice_of_violation(&mut self, checked: bool) {
        self.notice_of_violation = checked;
    }

    /// Store an evidence value verbatim
    pub fn set_field(&mut self, key: EvidenceKey, value: impl Into<String>) {
        self.evidence.insert(key, value.into());
    }

    /// Raw evidence value, empty if never set
    pub fn field(&self, key: EvidenceKey) -> &str {
        self.evidence.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Evidence keys of the active category with their raw values, in render order
    pub fn active_fields(&self) -> impl Iterator<Item = (EvidenceKey, &str)> + '_ {
        EvidenceKey::for_category(self.category).map(move |key| (key, self.field(key)))
    }

    /// Flip one charge; unknown codes are ignored
    pub fn toggle_charge(&mut self, code: &str) -> bool {
        self.selected_charges.toggle(code)
    }

    /// Replace the selection with the catalog codes among `codes`
    pub fn set_selected_charges<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected_charges = ChargeSelection::from_codes(codes);
    }

    /// Selected charges in catalog order
    pub fn charges_in_order(&self) -> Vec<&'static str> {
        self.selected_charges.ordered()
    }

    /// Restore a blank Gang report with a fresh date and time.
    /// Drops any generated output.
    pub fn reset(&mut self, clock: &impl Clock) {
        *self = Self::new(clock);
    }

    /// Restore a blank report of `category` with a fresh date and time
    pub fn reset_to(&mut self, category: ReportCategory, clock: &impl Clock) {
        *self = Self::with_category(category, clock);
    }

    /// Render the current state and keep the result.
    ///
    /// On failure the previous output is left untouched.
    pub fn generate(&mut self) -> crate::error::ReportResult<&GeneratedReport> {
        let report = crate::render::render(self)?;
        Ok(self.generated.insert(report))
    }

    /// Whether a report has been generated since the last clear
    pub fn has_report(&self) -> bool {
        self.generated.is_some()
    }
}
