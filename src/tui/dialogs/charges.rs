//! Charge picker dialog
//!
//! Two tabs over the catalog. Toggles apply to the report immediately and
//! the dialog stays open until Enter or Esc.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use crate::models::ChargeTier;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the charge picker
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);

    let selection = &app.session.state().selected_charges;
    let block = Block::default()
        .title(format!(" Select Crimes ({} selected) ", selection.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Charges
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let tiers = [ChargeTier::Top, ChargeTier::General];
    let picker = app.charge_picker;
    let tabs = Tabs::new(tiers.iter().map(|t| Line::from(t.to_string())))
        .select(if picker.tier == ChargeTier::Top { 0 } else { 1 })
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    let items: Vec<ListItem> = picker
        .tier
        .charges()
        .iter()
        .map(|charge| {
            let (mark, style) = if selection.contains(charge) {
                ("[x] ", Style::default().fg(Color::Green))
            } else {
                ("[ ] ", Style::default().fg(Color::White))
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(*charge, style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(picker.selected_index));
    frame.render_stateful_widget(list, chunks[2], &mut state);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[Space]", Style::default().fg(Color::Green)),
        Span::raw(" Toggle  "),
        Span::styled("[Tab]", Style::default().fg(Color::Cyan)),
        Span::raw(" Switch list  "),
        Span::styled("[a]", Style::default().fg(Color::Cyan)),
        Span::raw(" Select all  "),
        Span::styled("[c]", Style::default().fg(Color::Cyan)),
        Span::raw(" Clear all  "),
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::raw(" Done"),
    ]));
    frame.render_widget(hints, chunks[3]);
}
