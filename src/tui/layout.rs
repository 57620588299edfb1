//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: header, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title and view tabs
    pub header: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the form view
pub struct FormLayout {
    /// Field rows
    pub fields: Rect,
    /// Selected charges list
    pub charges: Rect,
}

impl FormLayout {
    /// Calculate form layout; charges get the right-hand column on wide screens
    pub fn new(area: Rect) -> Self {
        let direction = if area.width >= 100 {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let chunks = Layout::default()
            .direction(direction)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        Self {
            fields: chunks[0],
            charges: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
