//! CSV export functionality

use std::io::Write;

use crate::error::SpendlogResult;
use crate::models::Expense;

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> SpendlogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["ID", "Date", "Description", "Category", "Amount"])?;

    for expense in expenses {
        csv_writer.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.to_rfc3339(),
            expense.description.clone(),
            expense.category.name().to_string(),
            format!("{:.2}", expense.amount.cents() as f64 / 100.0),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
