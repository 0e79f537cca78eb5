//! User settings for spendlog
//!
//! Display and startup preferences. There is no settings file — the
//! ledger is process-local with no durable state — so values come from
//! CLI flags and environment variables, with the defaults below.

use serde::{Deserialize, Serialize};

/// User settings for a spendlog session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format (strftime) used when formatting expense dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses the recent list shows by default
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Whether to seed the ledger with the demo dataset at startup
    #[serde(default = "default_demo_data")]
    pub demo_data: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_recent_limit() -> usize {
    10
}

fn default_demo_data() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recent_limit: default_recent_limit(),
            demo_data: default_demo_data(),
        }
    }
}
