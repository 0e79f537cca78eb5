//! Dashboard header and category summary cards

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::tui::app::App;
use crate::tui::layout::category_cells;

use super::category_color;

/// Render the title bar with the grand total
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let total = app
        .ledger
        .total_all()
        .format_with_symbol(&app.settings.currency_symbol);

    let mut summary = format!("{} expenses · Total {}", app.ledger.len(), total);
    if let Some(category) = app.ledger.selected_category() {
        summary.push_str(&format!(" · Filter: {}", category));
    }

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "spendlog — expense dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(summary, Style::default().fg(Color::Gray))),
    ])
    .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(header, area);
}

/// Render one summary card per category
pub fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let cells = category_cells(area, Category::ALL.len());

    for (index, (&category, cell)) in Category::ALL.iter().zip(cells.iter()).enumerate() {
        let is_cursor = index == app.category_cursor;
        let is_active = app.ledger.selected_category() == Some(category);

        let mut border_style = Style::default().fg(category_color(category));
        if is_cursor {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let mut title_style = Style::default().fg(category_color(category));
        if is_active {
            title_style = title_style.add_modifier(Modifier::REVERSED);
        }

        let total = app
            .ledger
            .total_for(category)
            .format_with_symbol(&app.settings.currency_symbol);
        let count = app.ledger.expenses_for(category).len();

        let card = Paragraph::new(vec![
            Line::from(Span::styled(total, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(
                format!("{} item{}", count, if count == 1 { "" } else { "s" }),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} {} ", category.icon(), category.name()),
                    title_style,
                ))
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        frame.render_widget(card, *cell);
    }
}
