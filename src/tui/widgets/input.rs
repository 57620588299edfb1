//! Text input widget
//!
//! A one-row input with a character-indexed cursor, drawn in the value
//! column of the form row being edited. Line breaks in evidence values are
//! drawn as a marker so the cursor math stays one column per character.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// Shown in place of a line break
pub const NEWLINE_MARKER: char = '⏎';

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position, in characters
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set content, cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Cursor position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Line breaks are shown as a single marker cell
fn display_char(c: char) -> char {
    if c == '\n' {
        NEWLINE_MARKER
    } else {
        c
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let input_start = area.x;
        let input_width = area.width as usize;
        if input_width == 0 {
            return;
        }

        // Scroll so the cursor stays visible on long links
        let offset = (self.cursor + 1).saturating_sub(input_width);
        let visible: String = self
            .content
            .chars()
            .skip(offset)
            .take(input_width)
            .map(display_char)
            .collect();
        buf.set_string(input_start, area.y, &visible, Style::default().fg(Color::White));

        if self.focused {
            let cursor_x = input_start + (self.cursor - offset) as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self
                    .content
                    .chars()
                    .nth(self.cursor)
                    .map(display_char)
                    .unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
