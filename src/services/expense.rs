//! Add-expense form boundary
//!
//! Accepts the raw field text a user typed and turns it into a validated
//! [`Expense`]. Invalid input blocks the save action here; nothing
//! unparseable ever reaches the ledger. The ledger's `add` re-checks the
//! record invariant itself, so even hand-constructed expenses cannot
//! bypass it.

use chrono::NaiveDate;

use crate::error::{SpendlogError, SpendlogResult};
use crate::ledger::Ledger;
use crate::models::{Category, Expense, ExpenseId, Money};

/// Raw field values from an add-expense form
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    /// Amount text, e.g. "12.50" or "$12.50"
    pub amount: String,

    /// Description text
    pub description: String,

    /// Category text, matched case-insensitively against the closed set
    pub category: String,

    /// Optional date text (YYYY-MM-DD); empty means now
    pub date: String,
}

impl ExpenseForm {
    /// Create a form from the three required fields
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: category.into(),
            date: String::new(),
        }
    }

    /// Set an explicit date field (builder style)
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Validate every field and construct the expense
    pub fn build(&self) -> SpendlogResult<Expense> {
        let amount = Money::parse(&self.amount)
            .map_err(|_| SpendlogError::invalid_amount(self.amount.trim()))?;
        if !amount.is_positive() {
            return Err(SpendlogError::invalid_amount(self.amount.trim()));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(SpendlogError::EmptyDescription);
        }

        let category: Category = self
            .category
            .parse()
            .map_err(|_| SpendlogError::unknown_category(self.category.trim()))?;

        let mut expense = Expense::new(amount, description, category);
        if !self.date.trim().is_empty() {
            let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
                .map_err(|_| SpendlogError::InvalidDate(self.date.trim().to_string()))?;
            // Form input carries no time of day; records land at noon UTC.
            let datetime = date.and_hms_opt(12, 0, 0).unwrap_or_default().and_utc();
            expense = expense.with_date(datetime);
        }

        Ok(expense)
    }

    /// Validate, construct, and append to the ledger in one step
    pub fn submit(&self, ledger: &mut Ledger) -> SpendlogResult<ExpenseId> {
        ledger.add(self.build()?)
    }
}
