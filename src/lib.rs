//! spendlog - Terminal-based personal expense tracking dashboard
//!
//! This library provides the core functionality for the spendlog
//! application: an in-memory expense ledger with derived views (category
//! filters, totals, recency sort) observed by a terminal dashboard and a
//! set of one-shot CLI commands.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Display and startup settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money)
//! - `ledger`: The in-memory expense ledger and its change notifications
//! - `services`: The add-expense form boundary
//! - `display`: Terminal text formatting
//! - `reports`: Spending breakdowns
//! - `export`: CSV/JSON snapshots of the session
//! - `cli`: Subcommand handlers
//! - `tui`: The interactive dashboard
//!
//! # Example
//!
//! ```rust
//! use spendlog::ledger::Ledger;
//! use spendlog::models::{Category, Expense, Money};
//!
//! let mut ledger = Ledger::new();
//! ledger.add(Expense::new(Money::from_cents(1250), "Coffee", Category::Food))?;
//! assert_eq!(ledger.total_for(Category::Food), Money::from_cents(1250));
//! # Ok::<(), spendlog::SpendlogError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod services;
pub mod tui;

pub use error::{SpendlogError, SpendlogResult};
