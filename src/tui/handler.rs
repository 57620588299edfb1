//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers
//! based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clipboard::ReportPart;
use crate::session::FormEvent;

use super::app::{ActiveDialog, ActiveView, App, ConfirmAction, FormField, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work in both views)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('g') => {
            app.generate();
            return Ok(());
        }
        KeyCode::Char('x') => {
            app.open_dialog(ActiveDialog::Confirm(ConfirmAction::ClearForm));
            return Ok(());
        }
        KeyCode::Char('s') => {
            app.save();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.copy(ReportPart::Full);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.copy(ReportPart::Part1);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.copy(ReportPart::Part2);
            return Ok(());
        }
        _ => {}
    }

    match app.active_view {
        ActiveView::Form => handle_form_key(app, key),
        ActiveView::Output => handle_output_key(app, key),
    }
}

/// Handle keys in the form view
fn handle_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.move_up(),

        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char(' ') => activate_row(app),

        KeyCode::Char('c') => app.open_dialog(ActiveDialog::Charges),
        KeyCode::Char('d') => {
            app.session.handle(FormEvent::SetDateNow);
        }
        KeyCode::Char('t') => {
            app.session.handle(FormEvent::SetTimeNow);
        }
        KeyCode::Char('o') => {
            app.active_view = ActiveView::Output;
        }
        _ => {}
    }

    Ok(())
}

/// Enter/Space on the selected row
fn activate_row(app: &mut App) {
    match app.current_row() {
        FormField::Category => app.toggle_category(),
        FormField::Notice => app.toggle_notice(),
        FormField::Charges => app.open_dialog(ActiveDialog::Charges),
        row if row.is_text() => app.start_editing(),
        _ => {}
    }
}

/// Handle keys in the output view
fn handle_output_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.output_part = app.output_part.next();
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.output_part = app.output_part.prev();
        }
        KeyCode::Char('y') | KeyCode::Enter => app.copy(app.output_part),
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('f') => {
            app.active_view = ActiveView::Form;
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while a form line is being edited
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => app.insert_newline(),
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Tab => {
            app.commit_edit();
            app.move_down();
        }
        KeyCode::BackTab => {
            app.commit_edit();
            app.move_up();
        }
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.move_start(),
        KeyCode::End => app.input.move_end(),
        KeyCode::Char(c) => app.input.insert(c),
        _ => {}
    }

    Ok(())
}

/// Handle keys when a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Close help on any key
            app.close_dialog();
        }
        ActiveDialog::Confirm(action) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                execute_confirmed_action(app, action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::Charges => handle_charges_key(app, key),
        ActiveDialog::None => {}
    }
    Ok(())
}

/// Keys of the charge picker; it stays open until Enter or Esc
fn handle_charges_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Char('h')
        | KeyCode::Char('l') => app.charge_picker.switch_tier(),
        KeyCode::Char('j') | KeyCode::Down => app.charge_picker.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.charge_picker.move_up(),
        KeyCode::Char(' ') => app.toggle_current_charge(),
        KeyCode::Char('a') => app.select_all_charges(),
        KeyCode::Char('c') => app.clear_charges(),
        KeyCode::Enter | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
}

/// Execute an action after user confirmation
fn execute_confirmed_action(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::ClearForm => app.clear_form(),
    }
}
