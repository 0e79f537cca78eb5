//! TUI views
//!
//! The dashboard (header and category cards), the expense history table,
//! and the status bar.

pub mod dashboard;
pub mod history;
pub mod status_bar;

use ratatui::style::Color;
use ratatui::Frame;

use super::app::App;
use super::dialogs;
use super::layout::DashboardLayout;
use crate::models::Category;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::new(frame.area());

    dashboard::render_header(frame, app, layout.header);
    dashboard::render_categories(frame, app, layout.categories);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        dialogs::expense::render(frame, app);
    }
}

/// Terminal color for a category's color name
pub fn category_color(category: Category) -> Color {
    match category.color() {
        "green" => Color::Green,
        "blue" => Color::Blue,
        "yellow" => Color::Yellow,
        "magenta" => Color::Magenta,
        _ => Color::DarkGray,
    }
}
