//! Status bar view
//!
//! Shows the report type, charge count, whether a report exists, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveDialog, ActiveView, App, FormField, InputMode};

/// Key hints for the current context
pub fn hints(app: &App) -> &'static str {
    match (app.active_dialog, app.input_mode, app.active_view) {
        (ActiveDialog::Charges, _, _) => " Tab:Tab  Space:Toggle  a:All  c:Clear  Enter:Done ",
        (ActiveDialog::Confirm(_), _, _) => " y:Yes  n:No ",
        (ActiveDialog::Help, _, _) => " any key:Close ",
        (_, InputMode::Editing, _) if matches!(app.current_row(), FormField::Evidence(_)) => {
            " Enter:Save  Alt+Enter:New line  Tab:Next  Esc:Cancel "
        }
        (_, InputMode::Editing, _) => " Enter:Save  Tab:Next  Esc:Cancel ",
        (_, _, ActiveView::Form) => " g:Generate  c:Charges  x:Clear  ?:Help  q:Quit ",
        (_, _, ActiveView::Output) => " Tab:Part  y:Copy  s:Save  Esc:Form  q:Quit ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.session.state();
    let mut spans = vec![];

    spans.push(Span::styled(" Type: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        state.category.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled(
        format!("Charges: {}", state.selected_charges.len()),
        Style::default().fg(Color::Cyan),
    ));

    spans.push(Span::raw(" │ "));
    let (report_text, report_color) = if app.session.report().is_some() {
        ("Report ready", Color::Green)
    } else {
        ("No report", Color::DarkGray)
    };
    spans.push(Span::styled(report_text, Style::default().fg(report_color)));

    let hints = hints(app);

    // Right-align the hints
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
