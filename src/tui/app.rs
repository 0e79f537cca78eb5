//! Application state for the TUI
//!
//! The App struct owns the ledger for the session and holds everything
//! needed for rendering and handling events. It learns about ledger
//! mutations the same way any presentation layer does: by draining its
//! change subscription.

use crate::config::Settings;
use crate::ledger::{Ledger, LedgerChange, Subscription};
use crate::models::Category;

use super::dialogs::expense::ExpenseFormState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
}

/// Main application state
pub struct App {
    /// The session ledger
    pub ledger: Ledger,

    /// Display settings
    pub settings: Settings,

    /// Ledger change events, drained once per loop iteration
    pub changes: Subscription,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor position in the category bar
    pub category_cursor: usize,

    /// Scroll offset for the history table
    pub scroll_offset: usize,

    /// Transient status message
    pub status_message: Option<String>,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,
}

impl App {
    /// Create a new App owning the given ledger
    pub fn new(mut ledger: Ledger, settings: Settings) -> Self {
        let changes = ledger.subscribe();
        Self {
            ledger,
            settings,
            changes,
            should_quit: false,
            active_dialog: ActiveDialog::None,
            category_cursor: 0,
            scroll_offset: 0,
            status_message: None,
            expense_form: ExpenseFormState::new(),
        }
    }

    /// Check whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// The category under the cursor in the category bar
    pub fn highlighted_category(&self) -> Category {
        Category::ALL[self.category_cursor % Category::ALL.len()]
    }

    /// Move the category cursor left, wrapping
    pub fn highlight_prev_category(&mut self) {
        self.category_cursor =
            (self.category_cursor + Category::ALL.len() - 1) % Category::ALL.len();
    }

    /// Move the category cursor right, wrapping
    pub fn highlight_next_category(&mut self) {
        self.category_cursor = (self.category_cursor + 1) % Category::ALL.len();
    }

    /// Drain pending ledger changes into a status message
    ///
    /// Called once per loop iteration, before rendering; this is the
    /// change-notification consumption that drives re-render.
    pub fn sync(&mut self) {
        for change in self.changes.drain() {
            self.scroll_offset = 0;
            self.status_message = Some(match change {
                LedgerChange::ExpenseAdded(id) => {
                    match self.ledger.expenses().iter().find(|e| e.id == id) {
                        Some(expense) => format!(
                            "Added {} ({})",
                            expense.description,
                            expense
                                .amount
                                .format_with_symbol(&self.settings.currency_symbol)
                        ),
                        None => "Expense added".to_string(),
                    }
                }
                LedgerChange::FilterChanged(Some(category)) => {
                    format!("Filter: {}", category)
                }
                LedgerChange::FilterChanged(None) => "Filter cleared".to_string(),
            });
        }
    }
}
