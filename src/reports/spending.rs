//! Spending report
//!
//! Per-category spending breakdown over the whole ledger or a date range.

use chrono::{DateTime, Utc};

use crate::ledger::Ledger;
use crate::models::{Category, Expense, Money};

/// Spending breakdown for one category
#[derive(Debug, Clone)]
pub struct CategorySpending {
    /// The category
    pub category: Category,
    /// Total spending in the category
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending report across categories
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories with spending, most spending first
    pub categories: Vec<CategorySpending>,
    /// Total spending across all categories
    pub total: Money,
    /// Total expense count
    pub count: usize,
}

impl SpendingReport {
    /// Generate a report over the whole ledger
    pub fn generate(ledger: &Ledger) -> Self {
        Self::from_expenses(ledger.expenses())
    }

    /// Generate a report over an inclusive date range
    pub fn generate_between(
        ledger: &Ledger,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::from_expenses(&ledger.expenses_between(start, end))
    }

    fn from_expenses(expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let count = expenses.len();

        let mut categories: Vec<CategorySpending> = Category::ALL
            .iter()
            .filter_map(|&category| {
                let matching: Vec<&Expense> =
                    expenses.iter().filter(|e| e.category == category).collect();
                if matching.is_empty() {
                    return None;
                }

                let category_total: Money = matching.iter().map(|e| e.amount).sum();
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (category_total.cents() as f64 / total.cents() as f64) * 100.0
                };

                Some(CategorySpending {
                    category,
                    total: category_total,
                    count: matching.len(),
                    percentage,
                })
            })
            .collect();

        // Most spending first; equal totals keep category display order.
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            categories,
            total,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        let records = [
            (1250, "Coffee", Category::Food, 0),
            (4000, "Gas", Category::Transport, 1),
            (1550, "Lunch", Category::Food, 2),
        ];
        for (cents, description, category, days) in records {
            ledger
                .add(
                    Expense::new(Money::from_cents(cents), description, category)
                        .with_date(base - Duration::days(days)),
                )
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_generate_totals_and_counts() {
        let report = SpendingReport::generate(&sample_ledger());
        assert_eq!(report.total, Money::from_cents(6800));
        assert_eq!(report.count, 3);
        assert_eq!(report.categories.len(), 2);
    }

    #[test]
    fn test_categories_sorted_by_spend_descending() {
        let report = SpendingReport::generate(&sample_ledger());
        assert_eq!(report.categories[0].category, Category::Transport);
        assert_eq!(report.categories[0].total, Money::from_cents(4000));
        assert_eq!(report.categories[1].category, Category::Food);
        assert_eq!(report.categories[1].total, Money::from_cents(2800));
        assert_eq!(report.categories[1].count, 2);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let report = SpendingReport::generate(&sample_ledger());
        let sum: f64 = report.categories.iter().map(|c| c.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_ledger_yields_empty_report() {
        let report = SpendingReport::generate(&Ledger::new());
        assert!(report.categories.is_empty());
        assert!(report.total.is_zero());
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_generate_between_restricts_range() {
        let ledger = sample_ledger();
        let start = Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 1, 23, 59, 59).unwrap();

        let report = SpendingReport::generate_between(&ledger, start, end);
        assert_eq!(report.count, 2);
        assert_eq!(report.total, Money::from_cents(5250));
    }
}
