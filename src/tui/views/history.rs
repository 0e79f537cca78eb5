//! Expense history table
//!
//! Shows the ledger's visible expenses (all, or the active filter's
//! category), newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::tui::app::App;

use super::category_color;

/// Render the history table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut expenses = app.ledger.visible();
    expenses.sort_by(|a, b| b.date.cmp(&a.date));

    let title = match app.ledger.selected_category() {
        Some(category) => format!(" {} Expenses ({}) ", category, expenses.len()),
        None => format!(" Expenses ({}) ", expenses.len()),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if expenses.is_empty() {
        let empty = ratatui::widgets::Paragraph::new("No expenses yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Date", "Description", "Category", "Amount"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = expenses.iter().skip(app.scroll_offset).map(|expense| {
        Row::new(vec![
            Cell::from(expense.date.format(&app.settings.date_format).to_string()),
            Cell::from(expense.description.clone()),
            Cell::from(Span::styled(
                format!("{} {}", expense.category.icon(), expense.category.name()),
                Style::default().fg(category_color(expense.category)),
            )),
            Cell::from(format!(
                "{:>10}",
                expense
                    .amount
                    .format_with_symbol(&app.settings.currency_symbol)
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Min(20),
            Constraint::Length(16),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
