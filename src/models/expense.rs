//! Expense model
//!
//! An immutable expense record. Once constructed it is never mutated; the
//! ledger only appends and (outside the current scope) deletes whole records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (must be positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// When the expense occurred
    pub date: DateTime<Utc>,

    /// Classification tag
    pub category: Category,
}

impl Expense {
    /// Create a new expense dated now
    pub fn new(amount: Money, description: impl Into<String>, category: Category) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            date: Utc::now(),
            category,
        }
    }

    /// Set an explicit date (builder style)
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Validate the ledger invariant: positive amount, non-empty description
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
