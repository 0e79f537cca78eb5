//! Demo dataset
//!
//! Generates the synthetic expenses the ledger is seeded with at startup.
//! The dataset cycles through every category, spreads one expense per day
//! going backwards from today, and randomizes amounts between $5.00 and
//! $500.00 using each record's own v4 id as the entropy source.

use chrono::{Duration, Utc};

use crate::models::{Category, Expense, ExpenseId, Money};

/// Sample descriptions, one per generated record
const DESCRIPTIONS: [&str; 15] = [
    "Grocery shopping",
    "Gas station",
    "Electricity bill",
    "Movie tickets",
    "Restaurant dinner",
    "Bus fare",
    "Water bill",
    "Concert tickets",
    "Coffee shop",
    "Taxi ride",
    "Internet bill",
    "Netflix subscription",
    "Lunch at work",
    "Train ticket",
    "Phone bill",
];

const MIN_CENTS: i64 = 500;
const MAX_CENTS: i64 = 50_000;

/// Generate the demo expenses, newest first
pub fn demo_expenses() -> Vec<Expense> {
    let now = Utc::now();

    DESCRIPTIONS
        .iter()
        .enumerate()
        .map(|(index, description)| {
            let id = ExpenseId::new();
            Expense {
                id,
                amount: amount_from_id(&id),
                description: (*description).to_string(),
                date: now - Duration::days(index as i64),
                category: Category::ALL[index % Category::ALL.len()],
            }
        })
        .collect()
}

// Derive a pseudo-random amount in [MIN_CENTS, MAX_CENTS] from the
// record's v4 id, so each run gets different amounts without an RNG.
fn amount_from_id(id: &ExpenseId) -> Money {
    let span = (MAX_CENTS - MIN_CENTS + 1) as u128;
    let cents = MIN_CENTS + (id.as_uuid().as_u128() % span) as i64;
    Money::from_cents(cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    #[test]
    fn test_demo_dataset_has_fifteen_records() {
        assert_eq!(demo_expenses().len(), 15);
    }

    #[test]
    fn test_demo_dataset_cycles_all_categories() {
        let expenses = demo_expenses();
        for category in Category::ALL {
            assert!(expenses.iter().any(|e| e.category == category));
        }
        assert_eq!(expenses[0].category, Category::Food);
        assert_eq!(expenses[5].category, Category::Food);
    }

    #[test]
    fn test_demo_dates_strictly_descend() {
        let expenses = demo_expenses();
        for pair in expenses.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }

    #[test]
    fn test_demo_amounts_within_range() {
        for expense in demo_expenses() {
            let cents = expense.amount.cents();
            assert!((MIN_CENTS..=MAX_CENTS).contains(&cents), "got {}", cents);
        }
    }

    #[test]
    fn test_demo_records_satisfy_ledger_invariant() {
        let mut ledger = Ledger::new();
        for expense in demo_expenses() {
            ledger.add(expense).unwrap();
        }
        assert_eq!(ledger.len(), 15);
    }
}
