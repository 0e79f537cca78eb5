//! Expense display formatting
//!
//! Formats expenses for terminal display as single rows or a register.

use crate::config::Settings;
use crate::models::{Expense, Money};

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{} {:24} {:13} {:>10}",
        expense.date.format(&settings.date_format),
        truncate(&expense.description, 24),
        expense.category.name(),
        expense.amount.format_with_symbol(&settings.currency_symbol),
    )
}

/// Format a list of expenses as a register, newest entry as given
pub fn format_expense_register(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:13} {:>10}\n",
        "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    let total: Money = expenses.iter().map(|e| e.amount).sum();
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{:>49} {:>10}\n",
        "Total:",
        total.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

/// Truncate a string to a maximum length, padding short ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
