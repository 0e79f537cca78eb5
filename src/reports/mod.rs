//! Reports over the ledger
//!
//! Aggregated views used by the `summary` command and the dashboard.

pub mod spending;

pub use spending::{CategorySpending, SpendingReport};
