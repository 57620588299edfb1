//! Generated report view
//!
//! Tabs for the full report and its two parts, exactly as they will be copied

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::clipboard::ReportPart;
use crate::tui::app::App;

/// Render the output view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let selected = ReportPart::ALL
        .iter()
        .position(|p| *p == app.output_part)
        .unwrap_or(0);
    let titles: Vec<Line> = ReportPart::ALL
        .iter()
        .map(|p| Line::from(p.to_string()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" Output "))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = match app.session.report() {
        Some(report) => Paragraph::new(app.output_part.text(report).to_string())
            .style(Style::default().fg(Color::White)),
        None => Paragraph::new("No report yet. Fill in a Name and press 'g' to generate.")
            .style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), chunks[1]);
}
