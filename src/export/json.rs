//! JSON export functionality

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SpendlogResult;
use crate::models::{Expense, Money};

/// Top-level JSON export document
#[derive(Debug, Serialize)]
struct ExpenseExport<'a> {
    exported_at: DateTime<Utc>,
    total: Money,
    expenses: &'a [Expense],
}

/// Export expenses to pretty-printed JSON
pub fn export_expenses_json<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let export = ExpenseExport {
        exported_at: Utc::now(),
        total: expenses.iter().map(|e| e.amount).sum(),
        expenses,
    };

    serde_json::to_writer_pretty(writer, &export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_export_document_shape() {
        let expenses = vec![
            Expense::new(Money::from_cents(1250), "Coffee", Category::Food),
            Expense::new(Money::from_cents(4000), "Gas", Category::Transport),
        ];

        let mut buffer = Vec::new();
        export_expenses_json(&expenses, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total"], 5250);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 2);
        assert_eq!(value["expenses"][0]["description"], "Coffee");
        assert_eq!(value["expenses"][0]["category"], "food");
        assert!(value["exported_at"].is_string());
    }

    #[test]
    fn test_export_empty_ledger() {
        let mut buffer = Vec::new();
        export_expenses_json(&[], &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["total"], 0);
        assert!(value["expenses"].as_array().unwrap().is_empty());
    }
}
