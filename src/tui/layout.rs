//! Layout definitions for the dashboard
//!
//! Header, category card bar, expense history, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the dashboard
pub struct DashboardLayout {
    /// Title and grand total
    pub header: Rect,
    /// Category summary cards
    pub categories: Rect,
    /// Expense history table
    pub history: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Category cards
                Constraint::Min(5),    // History
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            categories: chunks[1],
            history: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Split the category bar into one cell per category
pub fn category_cells(area: Rect, count: usize) -> Vec<Rect> {
    let constraints: Vec<Constraint> =
        (0..count).map(|_| Constraint::Ratio(1, count as u32)).collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
