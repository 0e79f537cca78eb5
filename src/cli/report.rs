//! Report CLI commands
//!
//! Implements the summary and categories commands.

use clap::Args;

use crate::config::Settings;
use crate::display::format_spending_report;
use crate::error::SpendlogResult;
use crate::ledger::Ledger;
use crate::models::Category;
use crate::reports::SpendingReport;

use super::{parse_day_end, parse_day_start};

/// Arguments for the summary command
#[derive(Args)]
pub struct SummaryArgs {
    /// Start of the report range (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the report range (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle the summary command
pub fn handle_summary(ledger: &Ledger, settings: &Settings, args: SummaryArgs) -> SpendlogResult<()> {
    let report = match (&args.from, &args.to) {
        (None, None) => SpendingReport::generate(ledger),
        (from, to) => {
            let start = match from {
                Some(raw) => parse_day_start(raw)?,
                None => chrono::DateTime::<chrono::Utc>::MIN_UTC,
            };
            let end = match to {
                Some(raw) => parse_day_end(raw)?,
                None => chrono::DateTime::<chrono::Utc>::MAX_UTC,
            };
            SpendingReport::generate_between(ledger, start, end)
        }
    };

    print!("{}", format_spending_report(&report, settings));
    Ok(())
}

/// Handle the categories command
pub fn handle_categories() -> SpendlogResult<()> {
    for category in Category::ALL {
        println!("{:2} {:15} ({})", category.icon(), category.name(), category.color());
    }
    Ok(())
}
