//! Business logic layer
//!
//! Bridges raw user input (CLI arguments, TUI form fields) and the ledger.

pub mod expense;

pub use expense::ExpenseForm;
