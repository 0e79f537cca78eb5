//! Export functionality
//!
//! Write-only snapshots of the session ledger in CSV or JSON form.
//! Nothing written here is ever read back; the ledger has no durable
//! state.

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::export_expenses_json;
