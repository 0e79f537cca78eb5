//! Export CLI command

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::error::{SpendlogError, SpendlogResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::ledger::Ledger;

/// Arguments for the export command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format: csv or json
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export(ledger: &Ledger, args: ExportArgs) -> SpendlogResult<()> {
    let expenses = ledger.expenses();

    match args.format.trim().to_lowercase().as_str() {
        "csv" => match &args.output {
            Some(path) => export_expenses_csv(expenses, File::create(path)?)?,
            None => export_expenses_csv(expenses, io::stdout().lock())?,
        },
        "json" => match &args.output {
            Some(path) => export_expenses_json(expenses, File::create(path)?)?,
            None => export_expenses_json(expenses, io::stdout().lock())?,
        },
        other => {
            return Err(SpendlogError::Export(format!(
                "Unsupported format: {} (expected csv or json)",
                other
            )))
        }
    }

    if let Some(path) = &args.output {
        println!("Exported {} expenses to {}", expenses.len(), path.display());
    }
    Ok(())
}
