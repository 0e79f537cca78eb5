//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger, services, and display
//! layers. Every command operates on the session ledger built in `main`
//! and exits; nothing is written back anywhere.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{
    handle_add, handle_list, handle_recent, handle_total, AddArgs, ListArgs, RecentArgs, TotalArgs,
};
pub use export::{handle_export, ExportArgs};
pub use report::{handle_categories, handle_summary, SummaryArgs};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{SpendlogError, SpendlogResult};

/// Parse a YYYY-MM-DD argument as the start of that day (UTC)
pub(crate) fn parse_day_start(input: &str) -> SpendlogResult<DateTime<Utc>> {
    Ok(parse_day(input)?.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
}

/// Parse a YYYY-MM-DD argument as the end of that day (UTC), so ranges
/// built from day arguments stay inclusive
pub(crate) fn parse_day_end(input: &str) -> SpendlogResult<DateTime<Utc>> {
    Ok(parse_day(input)?
        .and_hms_opt(23, 59, 59)
        .unwrap_or_default()
        .and_utc())
}

fn parse_day(input: &str) -> SpendlogResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| SpendlogError::InvalidDate(input.trim().to_string()))
}
