//! TUI Views module
//!
//! Contains the form and output views, the header, and the status bar.

pub mod form;
pub mod output;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.active_view {
        ActiveView::Form => form::render(frame, app, layout.main),
        ActiveView::Output => output::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = NotificationWidget::area(frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the title line with the view switcher
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);
    let (form_style, output_style) = match app.active_view {
        ActiveView::Form => (active, inactive),
        ActiveView::Output => (inactive, active),
    };

    let line = Line::from(vec![
        Span::styled(" Form ", form_style),
        Span::raw("│"),
        Span::styled(" Output ", output_style),
        Span::styled("  (o to switch)", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(" Crime Report Generator ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, app, action),
        ActiveDialog::Charges => dialogs::charges::render(frame, app),
        ActiveDialog::None => {}
    }
}
