//! Core data models for spendlog
//!
//! This module contains the data structures that represent the expense
//! tracking domain: expenses, categories, and money amounts.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, ParseCategoryError};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
