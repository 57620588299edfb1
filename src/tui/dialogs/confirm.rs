//! Confirmation dialog
//!
//! Asks before an action that throws away form contents, and lists what
//! would be lost.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, ConfirmAction};
use crate::tui::layout::centered_rect_fixed;

/// Render the confirmation for `action`
pub fn render(frame: &mut Frame, app: &App, action: ConfirmAction) {
    let details = match action {
        ConfirmAction::ClearForm => clear_summary(app),
    };

    let height = 6 + details.len() as u16;
    let area = centered_rect_fixed(54, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Clear Form ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let mut lines = vec![
        Line::from(Span::styled(
            action.message(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
    ];
    lines.extend(details);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Red)),
        Span::raw(" Clear  "),
        Span::styled("[n]", Style::default().fg(Color::Green)),
        Span::raw(" Keep editing"),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// What a clear would discard, one line each
fn clear_summary(app: &App) -> Vec<Line<'static>> {
    let state = app.session.state();
    let dim = Style::default().fg(Color::DarkGray);

    let name = if state.subject_name.is_empty() {
        "(no name)".to_string()
    } else {
        state.subject_name.clone()
    };
    let filled = state
        .active_fields()
        .filter(|(_, value)| !value.trim().is_empty())
        .count();

    let mut lines = vec![
        Line::from(Span::styled(format!("  {} report: {}", state.category, name), dim)),
        Line::from(Span::styled(
            format!(
                "  {} evidence field(s), {} charge(s)",
                filled,
                state.selected_charges.len()
            ),
            dim,
        )),
    ];
    if app.session.report().is_some() {
        lines.push(Line::from(Span::styled(
            "  The generated report will be discarded",
            Style::default().fg(Color::Yellow),
        )));
    }
    lines
}
