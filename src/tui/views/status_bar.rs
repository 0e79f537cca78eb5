//! Status bar
//!
//! Shows the latest transient status message, falling back to key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str =
    "a add · ←/→ select category · Enter toggle filter · Esc clear · ↑/↓ scroll · q quit";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.status_message {
        Some(message) => (message.as_str(), Style::default().fg(Color::Cyan)),
        None => (HINTS, Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
