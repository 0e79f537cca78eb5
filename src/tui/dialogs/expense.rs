//! Add-expense dialog
//!
//! Modal form with amount, description, category, and date fields. Tab
//! moves between fields, left/right cycles the category, Enter saves
//! through the form boundary, Esc cancels. Validation errors are shown
//! inline and block the save.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::ExpenseForm;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::views::category_color;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the add-expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Amount,
    Description,
    Category,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Amount => Self::Description,
            Self::Description => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Amount,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Amount => Self::Date,
            Self::Description => Self::Amount,
            Self::Category => Self::Description,
            Self::Date => Self::Category,
        }
    }
}

/// State for the add-expense dialog
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Amount input
    pub amount_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Selected category (cycled with left/right)
    pub category: Category,

    /// Date input, prefilled with today
    pub date_input: TextInput,

    /// Error message blocking the save, if any
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Create a fresh form with today's date prefilled
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let mut state = Self {
            focused_field: ExpenseField::Amount,
            amount_input: TextInput::new().placeholder("12.50"),
            description_input: TextInput::new().placeholder("What was it for?"),
            category: Category::Food,
            date_input: TextInput::new().content(today.format("%Y-%m-%d").to_string()),
            error_message: None,
        };
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.amount_input.focused = self.focused_field == ExpenseField::Amount;
        self.description_input.focused = self.focused_field == ExpenseField::Description;
        self.date_input.focused = self.focused_field == ExpenseField::Date;
    }

    /// The currently focused text input, if the focused field is one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Amount => Some(&mut self.amount_input),
            ExpenseField::Description => Some(&mut self.description_input),
            ExpenseField::Category => None,
            ExpenseField::Date => Some(&mut self.date_input),
        }
    }

    /// Cycle the category selection forward
    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    /// Cycle the category selection backward
    pub fn prev_category(&mut self) {
        self.category = self.category.prev();
    }

    /// Build the form boundary input from the current field text
    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.amount_input.value(),
            self.description_input.value(),
            self.category.name(),
        )
        .with_date(self.date_input.value())
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Description
            Constraint::Length(1), // Category
            Constraint::Length(1), // Date
            Constraint::Length(1), // blank
            Constraint::Length(1), // error
            Constraint::Min(1),    // hints
        ])
        .split(inner);

    let form = &app.expense_form;

    render_field(frame, rows[0], "Amount", form.amount_input.line());
    render_field(frame, rows[1], "Description", form.description_input.line());

    let category_line = Line::from(vec![
        Span::raw("◂ "),
        Span::styled(
            format!("{} {}", form.category.icon(), form.category.name()),
            Style::default()
                .fg(category_color(form.category))
                .add_modifier(if form.focused_field == ExpenseField::Category {
                    Modifier::BOLD | Modifier::UNDERLINED
                } else {
                    Modifier::empty()
                }),
        ),
        Span::raw(" ▸"),
    ]);
    render_field(frame, rows[2], "Category", category_line);

    render_field(frame, rows[3], "Date", form.date_input.line());

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[5],
        );
    }

    frame.render_widget(
        Paragraph::new("Enter save · Esc cancel · Tab next field")
            .style(Style::default().fg(Color::DarkGray)),
        rows[6],
    );
}

fn render_field(frame: &mut Frame, area: ratatui::layout::Rect, label: &str, value: Line) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(13), Constraint::Min(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!("{}:", label)).style(Style::default().fg(Color::Cyan)),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(value), chunks[1]);
}
