//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Report data itself lives in the [`ReportSession`]; the App only tracks
//! focus, dialogs and the line being edited.

use crate::clipboard::{copy_part, ClipboardSink, ReportPart};
use crate::clock::Clock;
use crate::config::{ReportPaths, Settings};
use crate::export::save_report;
use crate::models::{ChargeTier, EvidenceField, EvidenceKey, ReportCategory};
use crate::session::{FormEvent, ReportSession, SessionOutcome};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Form,
    Output,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Action waiting for a yes/no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Reset the whole form
    ClearForm,
}

impl ConfirmAction {
    /// Question shown in the dialog
    pub fn message(&self) -> &'static str {
        match self {
            Self::ClearForm => "Clear all fields and the generated report?",
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Confirm(ConfirmAction),
    Charges,
}

/// One row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Category,
    Name,
    Crime,
    Date,
    Time,
    Notice,
    Evidence(EvidenceField),
    Charges,
}

impl FormField {
    /// Rows of the form for a category, top to bottom
    pub fn rows(category: ReportCategory) -> Vec<FormField> {
        let mut rows = vec![
            Self::Category,
            Self::Name,
            Self::Crime,
            Self::Date,
            Self::Time,
            Self::Notice,
        ];
        rows.extend(category.schema().iter().map(|f| Self::Evidence(*f)));
        rows.push(Self::Charges);
        rows
    }

    /// Label shown in front of the row
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Report Type",
            Self::Name => "Name",
            Self::Crime => "Crime Type",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Notice => "Notice of Violation",
            Self::Evidence(field) => field.label(),
            Self::Charges => "Crimes Committed",
        }
    }

    /// Whether Enter opens a text editor on this row
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Crime | Self::Date | Self::Time | Self::Evidence(_)
        )
    }
}

/// Cursor state of the charge picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChargePickerState {
    /// Tab on display
    pub tier: ChargeTier,
    /// Highlighted row within the tab
    pub selected_index: usize,
}

impl ChargePickerState {
    /// Charge under the cursor
    pub fn current(&self) -> Option<&'static str> {
        self.tier.charges().get(self.selected_index).copied()
    }

    /// Switch tabs, keeping the cursor in range
    pub fn switch_tier(&mut self) {
        self.tier = self.tier.toggled();
        self.selected_index = self
            .selected_index
            .min(self.tier.charges().len().saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.tier.charges().len() {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }
}

/// Main application state
pub struct App<'a> {
    /// The report being edited
    pub session: ReportSession<Box<dyn Clock>>,

    /// Application settings
    pub settings: &'a Settings,

    /// Paths configuration
    pub paths: &'a ReportPaths,

    /// Where copies go
    pub clipboard: Box<dyn ClipboardSink>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected form row
    pub selected_row: usize,

    /// Line being edited
    pub input: TextInput,

    /// Output tab on display
    pub output_part: ReportPart,

    /// Charge picker cursor
    pub charge_picker: ChargePickerState,

    /// Toasts
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(
        session: ReportSession<Box<dyn Clock>>,
        settings: &'a Settings,
        paths: &'a ReportPaths,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        Self {
            session,
            settings,
            paths,
            clipboard,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_row: 0,
            input: TextInput::new(),
            output_part: ReportPart::default(),
            charge_picker: ChargePickerState::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Rows of the form for the current category
    pub fn rows(&self) -> Vec<FormField> {
        FormField::rows(self.session.state().category)
    }

    /// Row under the cursor
    pub fn current_row(&self) -> FormField {
        let rows = self.rows();
        rows.get(self.selected_row)
            .copied()
            .unwrap_or(FormField::Category)
    }

    pub fn move_down(&mut self) {
        if self.selected_row + 1 < self.rows().len() {
            self.selected_row += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Current text of a row, as shown on the form
    pub fn row_value(&self, row: FormField) -> String {
        let state = self.session.state();
        match row {
            FormField::Category => state.category.to_string(),
            FormField::Name => state.subject_name.clone(),
            FormField::Crime => state.offense_label.clone(),
            FormField::Date => state.occurred_date.clone(),
            FormField::Time => state.occurred_time.clone(),
            FormField::Notice => {
                if state.notice_of_violation {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
            FormField::Evidence(field) => EvidenceKey::new(state.category, field)
                .map(|key| state.field(key).to_string())
                .unwrap_or_default(),
            FormField::Charges => match state.selected_charges.len() {
                0 => "None selected".to_string(),
                n => format!("{} selected", n),
            },
        }
    }

    /// Open the line editor on the current row
    pub fn start_editing(&mut self) {
        let row = self.current_row();
        if !row.is_text() {
            return;
        }
        self.input = TextInput::new()
            .content(self.row_value(row))
            .focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Store the edited line and leave editing mode
    pub fn commit_edit(&mut self) {
        let value = self.input.value().to_string();
        let event = match self.current_row() {
            FormField::Name => Some(FormEvent::SubjectNameChanged(value)),
            FormField::Crime => Some(FormEvent::OffenseLabelChanged(value)),
            FormField::Date => Some(FormEvent::DateChanged(value)),
            FormField::Time => Some(FormEvent::TimeChanged(value)),
            FormField::Evidence(field) => EvidenceKey::new(self.session.state().category, field)
                .map(|key| FormEvent::FieldChanged(key, value)),
            _ => None,
        };
        if let Some(event) = event {
            self.session.handle(event);
        }
        self.cancel_edit();
    }

    /// Start a new line in the value being edited; only evidence holds
    /// several lines
    pub fn insert_newline(&mut self) {
        if matches!(self.current_row(), FormField::Evidence(_)) {
            self.input.insert('\n');
        }
    }

    /// Leave editing mode without storing
    pub fn cancel_edit(&mut self) {
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Switch to the other category; evidence is emptied
    pub fn toggle_category(&mut self) {
        let category = self.session.state().category.toggled();
        self.session.handle(FormEvent::CategoryChanged(category));
        self.selected_row = self.selected_row.min(self.rows().len().saturating_sub(1));
    }

    pub fn toggle_notice(&mut self) {
        let checked = !self.session.state().notice_of_violation;
        self.session.handle(FormEvent::NoticeToggled(checked));
    }

    /// Render the report and show it on success
    pub fn generate(&mut self) {
        match self.session.handle(FormEvent::Generate) {
            SessionOutcome::Generated(_) => {
                self.active_view = ActiveView::Output;
                self.notify(Notification::success("Report generated successfully!"));
            }
            SessionOutcome::Rejected(message) => self.notify(Notification::error(message)),
            SessionOutcome::Updated => {}
        }
    }

    /// Reset the form to a blank report
    pub fn clear_form(&mut self) {
        self.session.handle(FormEvent::Clear);
        self.selected_row = 0;
        self.active_view = ActiveView::Form;
        self.output_part = ReportPart::default();
        self.notify(Notification::info("Form cleared"));
    }

    /// Copy one part of the generated report
    pub fn copy(&mut self, part: ReportPart) {
        match copy_part(self.session.report(), part, self.clipboard.as_mut()) {
            Ok(()) => self.notify(Notification::success(format!("{} copied to clipboard!", part))),
            Err(e) if e.is_no_report() => self.notify(Notification::warning(e.to_string())),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Save the generated report to the export directory
    pub fn save(&mut self) {
        let dir = self.settings.resolve_export_dir(self.paths);
        match save_report(self.session.state(), &dir, self.settings.sidecar_format) {
            Ok(saved) => self.notify(Notification::success(format!(
                "Report saved to {}",
                saved.text_path.display()
            ))),
            Err(e) if e.is_no_report() => self.notify(Notification::warning(e.to_string())),
            Err(e) => {
                tracing::error!(error = %e, "saving report failed");
                self.notify(Notification::error(e.to_string()));
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::Charges {
            self.charge_picker = ChargePickerState::default();
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Flip the charge under the picker cursor
    pub fn toggle_current_charge(&mut self) {
        if let Some(code) = self.charge_picker.current() {
            self.session.handle(FormEvent::ChargeToggled(code.to_string()));
        }
    }

    /// Select every charge in both tabs
    pub fn select_all_charges(&mut self) {
        let all = crate::models::ChargeCatalog::iter().map(String::from).collect();
        self.session.handle(FormEvent::ChargeSelectionChanged(all));
    }

    /// Drop every selected charge
    pub fn clear_charges(&mut self) {
        self.session.handle(FormEvent::ChargeSelectionChanged(Vec::new()));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::tests::RecordingClipboard;
    use crate::clock::FixedClock;

    pub(crate) fn test_app<'a>(settings: &'a Settings, paths: &'a ReportPaths) -> App<'a> {
        let clock: Box<dyn Clock> = Box::new(FixedClock::london(2024, 1, 1, 13, 45).unwrap());
        App::new(
            ReportSession::new(clock),
            settings,
            paths,
            Box::new(RecordingClipboard::default()),
        )
    }

    fn fixtures() -> (Settings, ReportPaths, tempfile::TempDir) {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(dir.path().to_path_buf());
        (Settings::default(), paths, dir)
    }

    #[test]
    fn test_rows_follow_category() {
        assert_eq!(FormField::rows(ReportCategory::Gang).len(), 12);
        assert_eq!(FormField::rows(ReportCategory::Family).len(), 14);
        assert_eq!(
            FormField::rows(ReportCategory::Family).last(),
            Some(&FormField::Charges)
        );
    }

    #[test]
    fn test_edit_commits_to_session() {
        let (settings, paths, _dir) = fixtures();
        let mut app = test_app(&settings, &paths);

        app.selected_row = 1;
        app.start_editing();
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "Ballas".chars() {
            app.input.insert(c);
        }
        app.commit_edit();

        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.session.state().subject_name, "Ballas");
    }

    #[test]
    fn test_cancel_edit_discards() {
        let (settings, paths, _dir) = fixtures();
        let mut app = test_app(&settings, &paths);

        app.selected_row = 2;
        app.start_editing();
        app.input.insert('x');
        app.cancel_edit();
        assert_eq!(app.session.state().offense_label, "");
    }

    #[test]
    fn test_toggle_category_clamps_row() {
        let (settings, paths, _dir) = fixtures();
        let mut app = test_app(&settings, &paths);
        app.toggle_category();
        app.selected_row = app.rows().len() - 1;

        app.toggle_category();
        assert_eq!(app.session.state().category, ReportCategory::Gang);
        assert_eq!(app.current_row(), FormField::Charges);
    }

    #[test]
    fn test_generate_without_name_notifies() {
        let (settings, paths, _dir) = fixtures();
        let mut app = test_app(&settings, &paths);
        app.generate();

        assert_eq!(app.active_view, ActiveView::Form);
        let toast = app.notifications.current().unwrap();
        assert_eq!(toast.message, "Please enter a Name");
    }

    #[test]
    fn test_copy_before_generate_warns() {
        let (settings, paths, _dir) = fixtures();
        let mut app = test_app(&settings, &paths);
        app.copy(ReportPart::Part1);
        assert_eq!(
            app.notifications.current().unwrap().message,
            "Please generate a report first"
        );
    }

    #[test]
    fn test_charge_picker_cursor() {
        let mut picker = ChargePickerState::default();
        for _ in 0..20 {
            picker.move_down();
        }
        assert_eq!(picker.selected_index, 5);
        picker.switch_tier();
        assert_eq!(picker.tier, ChargeTier::General);
        assert_eq!(picker.current(), Some("PC 2.8.2 Kidnapping"));
    }
}
