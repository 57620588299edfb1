//! Form session
//!
//! A [`ReportSession`] owns the report being edited together with the clock
//! used for "now" stamps. Front ends translate their input into
//! [`FormEvent`]s and show the returned [`SessionOutcome`].

use crate::clock::Clock;
use crate::models::{EvidenceKey, GeneratedReport, ReportCategory, ReportState};

/// One user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Report type switched; evidence is emptied
    CategoryChanged(ReportCategory),
    /// An evidence input was edited
    FieldChanged(EvidenceKey, String),
    /// The whole charge selection was replaced
    ChargeSelectionChanged(Vec<String>),
    /// One charge was ticked or unticked
    ChargeToggled(String),
    SubjectNameChanged(String),
    OffenseLabelChanged(String),
    DateChanged(String),
    TimeChanged(String),
    /// Notice of Violation checkbox
    NoticeToggled(bool),
    /// Re-stamp the date from the clock
    SetDateNow,
    /// Re-stamp the time from the clock
    SetTimeNow,
    Generate,
    Clear,
}

impl FormEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::CategoryChanged(_) => "category_changed",
            Self::FieldChanged(..) => "field_changed",
            Self::ChargeSelectionChanged(_) => "charge_selection_changed",
            Self::ChargeToggled(_) => "charge_toggled",
            Self::SubjectNameChanged(_) => "subject_name_changed",
            Self::OffenseLabelChanged(_) => "offense_label_changed",
            Self::DateChanged(_) => "date_changed",
            Self::TimeChanged(_) => "time_changed",
            Self::NoticeToggled(_) => "notice_toggled",
            Self::SetDateNow => "set_date_now",
            Self::SetTimeNow => "set_time_now",
            Self::Generate => "generate",
            Self::Clear => "clear",
        }
    }
}

/// Result of applying a [`FormEvent`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// State changed; nothing to show
    Updated,
    /// A report was rendered and stored
    Generated(GeneratedReport),
    /// The action was refused; the message is meant for the user
    Rejected(String),
}

impl SessionOutcome {
    /// Whether the action was refused
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// The report being edited plus its clock
pub struct ReportSession<C: Clock> {
    state: ReportState,
    clock: C,
    default_category: ReportCategory,
}

impl<C: Clock> ReportSession<C> {
    /// Start a blank Gang report
    pub fn new(clock: C) -> Self {
        Self::with_default_category(clock, ReportCategory::default())
    }

    /// Start a blank report whose category, and the category restored by
    /// Clear, is `category`
    pub fn with_default_category(clock: C, category: ReportCategory) -> Self {
        let state = ReportState::with_category(category, &clock);
        Self {
            state,
            clock,
            default_category: category,
        }
    }

    /// Current report
    pub fn state(&self) -> &ReportState {
        &self.state
    }

    /// Last generated report, if any
    pub fn report(&self) -> Option<&GeneratedReport> {
        self.state.generated.as_ref()
    }

    /// The session's clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Category restored by Clear
    pub fn default_category(&self) -> ReportCategory {
        self.default_category
    }

    /// Apply one event
    pub fn handle(&mut self, event: FormEvent) -> SessionOutcome {
        tracing::debug!(event = event.name(), "form event");

        match event {
            FormEvent::CategoryChanged(category) => self.state.set_category(category),
            FormEvent::FieldChanged(key, value) => self.state.set_field(key, value),
            FormEvent::ChargeSelectionChanged(codes) => self.state.set_selected_charges(codes),
            FormEvent::ChargeToggled(code) => {
                self.state.toggle_charge(&code);
            }
            FormEvent::SubjectNameChanged(name) => self.state.set_subject_name(name),
            FormEvent::OffenseLabelChanged(label) => self.state.set_offense_label(label),
            FormEvent::DateChanged(date) => self.state.set_occurred_date(date),
            FormEvent::TimeChanged(time) => self.state.set_occurred_time(time),
            FormEvent::NoticeToggled(checked) => self.state.set_notice_of_violation(checked),
            FormEvent::SetDateNow => self.state.set_date_now(&self.clock),
            FormEvent::SetTimeNow => self.state.set_time_now(&self.clock),
            FormEvent::Generate => return self.generate(),
            FormEvent::Clear => self.state.reset_to(self.default_category, &self.clock),
        }

        SessionOutcome::Updated
    }

    fn generate(&mut self) -> SessionOutcome {
        match self.state.generate().cloned() {
            Ok(report) => {
                tracing::info!(
                    category = %self.state.category,
                    charges = self.state.selected_charges.len(),
                    "report generated"
                );
                SessionOutcome::Generated(report)
            }
            Err(e) if e.is_input() => SessionOutcome::Rejected(e.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "report generation failed");
                SessionOutcome::Rejected(e.to_string())
            }
        }
    }
}
