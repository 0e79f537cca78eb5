//! Text input widget
//!
//! A single-line text field with cursor editing. Rendering produces a
//! `Line` so the surrounding dialog controls labels and layout.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// A simple single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII form text)
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder (builder style)
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set initial content (builder style)
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Insert a character at the cursor; non-ASCII input is ignored so
    /// cursor arithmetic stays one byte per character
    pub fn insert(&mut self, c: char) {
        if !c.is_ascii() || c.is_control() {
            return;
        }
        self.content.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Clear content and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Render the value (with cursor when focused) as a styled line
    pub fn line(&self) -> Line<'_> {
        if self.content.is_empty() && !self.focused {
            return Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if !self.focused {
            return Line::from(Span::raw(self.content.clone()));
        }

        let (before, rest) = self.content.split_at(self.cursor.min(self.content.len()));
        let (at, after) = if rest.is_empty() {
            (" ", "")
        } else {
            rest.split_at(1)
        };

        Line::from(vec![
            Span::raw(before.to_string()),
            Span::styled(at.to_string(), Style::default().fg(Color::Black).bg(Color::Cyan)),
            Span::raw(after.to_string()),
        ])
    }
}
