//! Help dialog
//!
//! Shows the keyboard shortcuts of the current view

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    ))
}

/// Help lines for a view
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show help"),
        key_line("g", "Generate report"),
        key_line("x", "Clear all fields"),
        key_line("s", "Save report to a file"),
        key_line("1/2/3", "Copy full report / part 1 / part 2"),
        Line::from(""),
    ];

    match view {
        ActiveView::Form => {
            lines.push(heading("Form"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move between fields"));
            lines.push(key_line("Enter", "Edit field / toggle / open charges"));
            lines.push(key_line("Alt+Enter", "New line in an evidence field"));
            lines.push(key_line("c", "Pick charges"));
            lines.push(key_line("d", "Set date to today"));
            lines.push(key_line("t", "Set time to now"));
            lines.push(key_line("o", "Show generated report"));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Switching report type empties the evidence fields.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        ActiveView::Output => {
            lines.push(heading("Output"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab/h/l", "Switch between full report and parts"));
            lines.push(key_line("y/Enter", "Copy the part on screen"));
            lines.push(key_line("Esc", "Back to the form"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
