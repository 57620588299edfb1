//! Report form view
//!
//! One row per field of the active category, plus the selected charges

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FormField, InputMode};
use crate::tui::layout::FormLayout;
use crate::tui::widgets::input::NEWLINE_MARKER;

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = FormLayout::new(area);

    render_fields(frame, app, layout.fields);
    render_charges(frame, app, layout.charges);
}

fn render_fields(frame: &mut Frame, app: &mut App, area: Rect) {
    let category = app.session.state().category;
    let block = Block::default()
        .title(format!(" {} Report ", category))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let editing = app.input_mode == InputMode::Editing;
    let label_width = app
        .rows()
        .iter()
        .map(|r| r.label().chars().count())
        .max()
        .unwrap_or(10) as u16;

    let rows: Vec<Row> = app
        .rows()
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let value = if editing && i == app.selected_row {
                // Drawn by the input widget below
                String::new()
            } else {
                app.row_value(row)
                    .replace('\n', &format!(" {} ", NEWLINE_MARKER))
            };
            let value_style = match row {
                FormField::Name if value.is_empty() => Style::default().fg(Color::Red),
                FormField::Category => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                _ if value.is_empty() => Style::default().fg(Color::DarkGray),
                _ => Style::default().fg(Color::White),
            };
            let value = if value.is_empty() && !(editing && i == app.selected_row) {
                "N/A".to_string()
            } else {
                value
            };

            Row::new(vec![
                Cell::from(row.label()).style(Style::default().fg(Color::Cyan)),
                Cell::from(value).style(value_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [Constraint::Length(label_width), Constraint::Min(10)],
    )
    .block(block)
    .column_spacing(2)
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);

    if editing {
        // Inner area, after the highlight symbol and label column
        let offset = state.offset();
        let row_y = area.y + 1 + (app.selected_row.saturating_sub(offset)) as u16;
        let x = area.x + 1 + 2 + label_width + 2;
        if row_y < area.y + area.height.saturating_sub(1) && x < area.x + area.width {
            let input_area = Rect::new(x, row_y, area.x + area.width - 1 - x, 1);
            frame.render_widget(&app.input, input_area);
        }
    }
}

fn render_charges(frame: &mut Frame, app: &mut App, area: Rect) {
    let state = app.session.state();
    let block = Block::default()
        .title(format!(" {} ", state.category.crimes_heading()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let charges = state.charges_in_order();
    if charges.is_empty() {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                "No charges selected.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Press 'c' to pick charges.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block);
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = charges
        .iter()
        .map(|c| ListItem::new(format!("- {}", c)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}
