//! The expense ledger
//!
//! An in-memory, insertion-ordered collection of expense records with
//! derived read operations (filter, aggregate, recency sort) and an
//! active category filter. The ledger is the sole mutator of its
//! collection; presentation layers read through the accessors here and
//! learn about mutations through [`Subscription`] change events.
//!
//! There is no durability: the ledger lives for one process run. Callers
//! construct it explicitly and pass it where it is needed; there is no
//! process-wide instance.

pub mod seed;

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use chrono::{DateTime, Utc};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, Expense, ExpenseId, ExpenseValidationError, Money};

/// A change published by the ledger after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    /// An expense was appended to the ledger
    ExpenseAdded(ExpenseId),
    /// The active category filter changed
    FilterChanged(Option<Category>),
}

/// Receiver handle for ledger change events
///
/// Every live subscription receives a copy of each change, in mutation
/// order. Consumers drain at their own pace; a dropped subscription is
/// pruned from the ledger on the next publish.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<LedgerChange>,
}

impl Subscription {
    /// Try to receive the next change without blocking
    pub fn try_recv(&self) -> Result<LedgerChange, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Drain every change published since the last call
    pub fn drain(&self) -> Vec<LedgerChange> {
        let mut changes = Vec::new();
        while let Ok(change) = self.receiver.try_recv() {
            changes.push(change);
        }
        changes
    }
}

/// In-memory collection of expense records plus derived queries
#[derive(Debug, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    selected_category: Option<Category>,
    subscribers: Vec<Sender<LedgerChange>>,
}

impl Ledger {
    /// Create an empty ledger with no active filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to change events
    pub fn subscribe(&mut self) -> Subscription {
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push(sender);
        Subscription { receiver }
    }

    /// Append an expense to the ledger
    ///
    /// The invariant (positive amount, non-empty description) is enforced
    /// here rather than trusted to callers. On success the expense is
    /// appended in insertion order and an [`LedgerChange::ExpenseAdded`]
    /// event is published; on error the ledger is unchanged and nothing
    /// is published.
    pub fn add(&mut self, expense: Expense) -> SpendlogResult<ExpenseId> {
        expense.validate().map_err(|e| match e {
            ExpenseValidationError::NonPositiveAmount(amount) => {
                SpendlogError::InvalidAmount(amount.to_string())
            }
            ExpenseValidationError::EmptyDescription => SpendlogError::EmptyDescription,
        })?;

        let id = expense.id;
        self.expenses.push(expense);
        self.publish(LedgerChange::ExpenseAdded(id));
        Ok(id)
    }

    /// All expenses, in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses with the given category, preserving insertion order
    pub fn expenses_for(&self, category: Category) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Expenses whose timestamp falls within the inclusive range
    pub fn expenses_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect()
    }

    /// Sum of amounts for the given category; zero if none match
    pub fn total_for(&self, category: Category) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of all amounts
    pub fn total_all(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Up to `limit` expenses, newest first
    ///
    /// Stable sort, so records sharing a timestamp keep their insertion
    /// order relative to each other.
    pub fn recent(&self, limit: usize) -> Vec<Expense> {
        let mut sorted = self.expenses.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(limit);
        sorted
    }

    /// The active category filter, if any
    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    /// Toggle the active filter: none → category → none
    ///
    /// Toggling the currently-selected category clears the filter;
    /// toggling a different one replaces it. Publishes a
    /// [`LedgerChange::FilterChanged`] event either way.
    pub fn toggle_filter(&mut self, category: Category) {
        self.selected_category = if self.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
        self.publish(LedgerChange::FilterChanged(self.selected_category));
    }

    /// Clear the active filter; publishes only if a filter was set
    pub fn clear_filter(&mut self) {
        if self.selected_category.take().is_some() {
            self.publish(LedgerChange::FilterChanged(None));
        }
    }

    /// The expenses a presentation surface should render: all of them,
    /// or only the active filter's category
    pub fn visible(&self) -> Vec<Expense> {
        match self.selected_category {
            Some(category) => self.expenses_for(category),
            None => self.expenses.clone(),
        }
    }

    /// Number of expenses in the ledger
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Check if the ledger holds no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    // Fan a change out to every live subscriber, pruning dead ones.
    fn publish(&mut self, change: LedgerChange) {
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn coffee() -> Expense {
        Expense::new(Money::from_cents(1250), "Coffee", Category::Food)
    }

    fn gas() -> Expense {
        Expense::new(Money::from_cents(4000), "Gas", Category::Transport)
    }

    #[test]
    fn test_add_appends_in_insertion_order() {
        let mut ledger = Ledger::new();
        let first = ledger.add(coffee()).unwrap();
        let second = ledger.add(gas()).unwrap();

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.expenses()[0].id, first);
        assert_eq!(ledger.expenses()[1].id, second);
    }

    #[test]
    fn test_add_rejects_invalid_and_leaves_ledger_unchanged() {
        let mut ledger = Ledger::new();
        let sub = ledger.subscribe();

        let err = ledger
            .add(Expense::new(Money::zero(), "Coffee", Category::Food))
            .unwrap_err();
        assert!(matches!(err, SpendlogError::InvalidAmount(_)));

        let err = ledger
            .add(Expense::new(Money::from_cents(100), "  ", Category::Food))
            .unwrap_err();
        assert!(matches!(err, SpendlogError::EmptyDescription));

        assert!(ledger.is_empty());
        assert!(sub.try_recv().is_err());
    }

    #[test]
    fn test_total_all_equals_sum_of_added_amounts() {
        let mut ledger = Ledger::new();
        ledger.add(coffee()).unwrap();
        ledger.add(gas()).unwrap();

        assert_eq!(ledger.total_all(), Money::from_cents(5250));
    }

    #[test]
    fn test_total_for_category() {
        let mut ledger = Ledger::new();
        ledger.add(coffee()).unwrap();
        ledger.add(gas()).unwrap();

        assert_eq!(ledger.total_for(Category::Food), Money::from_cents(1250));
        assert_eq!(
            ledger.total_for(Category::Transport),
            Money::from_cents(4000)
        );
        assert_eq!(ledger.total_for(Category::Utilities), Money::zero());
    }

    #[test]
    fn test_expenses_for_preserves_relative_order() {
        let mut ledger = Ledger::new();
        ledger
            .add(Expense::new(Money::from_cents(100), "Lunch", Category::Food))
            .unwrap();
        ledger.add(gas()).unwrap();
        ledger
            .add(Expense::new(Money::from_cents(200), "Dinner", Category::Food))
            .unwrap();

        let food = ledger.expenses_for(Category::Food);
        assert_eq!(food.len(), 2);
        assert_eq!(food[0].description, "Lunch");
        assert_eq!(food[1].description, "Dinner");
    }

    #[test]
    fn test_expenses_between_is_inclusive() {
        let mut ledger = Ledger::new();
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 3, 0, 0, 0).unwrap();

        ledger.add(coffee().with_date(start)).unwrap();
        ledger.add(gas().with_date(end)).unwrap();
        ledger
            .add(
                Expense::new(Money::from_cents(300), "Movie", Category::Entertainment)
                    .with_date(end + Duration::seconds(1)),
            )
            .unwrap();

        let in_range = ledger.expenses_between(start, end);
        assert_eq!(in_range.len(), 2);
        assert!(in_range.iter().all(|e| e.description != "Movie"));
    }

    #[test]
    fn test_recent_sorts_newest_first() {
        let mut ledger = Ledger::new();
        let base = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        ledger.add(coffee().with_date(base)).unwrap();
        ledger
            .add(gas().with_date(base + Duration::days(1)))
            .unwrap();

        let recent = ledger.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].description, "Gas");

        let recent = ledger.recent(10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].description, "Gas");
        assert_eq!(recent[1].description, "Coffee");
    }

    #[test]
    fn test_recent_breaks_ties_by_insertion_order() {
        let mut ledger = Ledger::new();
        let when = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

        for name in ["First", "Second", "Third"] {
            ledger
                .add(Expense::new(Money::from_cents(100), name, Category::Other).with_date(when))
                .unwrap();
        }

        let recent = ledger.recent(3);
        assert_eq!(recent[0].description, "First");
        assert_eq!(recent[1].description, "Second");
        assert_eq!(recent[2].description, "Third");
    }

    #[test]
    fn test_toggle_filter_tristate() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.selected_category(), None);

        ledger.toggle_filter(Category::Food);
        assert_eq!(ledger.selected_category(), Some(Category::Food));

        ledger.toggle_filter(Category::Food);
        assert_eq!(ledger.selected_category(), None);

        ledger.toggle_filter(Category::Food);
        ledger.toggle_filter(Category::Transport);
        assert_eq!(ledger.selected_category(), Some(Category::Transport));
    }

    #[test]
    fn test_visible_respects_active_filter() {
        let mut ledger = Ledger::new();
        ledger.add(coffee()).unwrap();
        ledger.add(gas()).unwrap();

        assert_eq!(ledger.visible().len(), 2);

        ledger.toggle_filter(Category::Food);
        let visible = ledger.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].description, "Coffee");
    }

    #[test]
    fn test_clear_filter_publishes_only_when_set() {
        let mut ledger = Ledger::new();
        let sub = ledger.subscribe();

        ledger.clear_filter();
        assert!(sub.try_recv().is_err());

        ledger.toggle_filter(Category::Food);
        ledger.clear_filter();
        assert_eq!(
            sub.drain(),
            vec![
                LedgerChange::FilterChanged(Some(Category::Food)),
                LedgerChange::FilterChanged(None),
            ]
        );
    }

    #[test]
    fn test_each_mutation_delivers_one_event_per_subscriber() {
        let mut ledger = Ledger::new();
        let sub_a = ledger.subscribe();
        let sub_b = ledger.subscribe();

        let id = ledger.add(coffee()).unwrap();
        ledger.toggle_filter(Category::Food);

        for sub in [&sub_a, &sub_b] {
            assert_eq!(
                sub.drain(),
                vec![
                    LedgerChange::ExpenseAdded(id),
                    LedgerChange::FilterChanged(Some(Category::Food)),
                ]
            );
        }
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let mut ledger = Ledger::new();
        let sub = ledger.subscribe();
        drop(sub);

        ledger.add(coffee()).unwrap();
        assert!(ledger.subscribers.is_empty());
    }

    #[test]
    fn test_worked_example() {
        let mut ledger = Ledger::new();
        let earlier = Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 8, 1, 17, 0, 0).unwrap();

        ledger.add(coffee().with_date(earlier)).unwrap();
        ledger.add(gas().with_date(later)).unwrap();

        assert_eq!(ledger.total_all(), Money::from_cents(5250));
        assert_eq!(ledger.total_for(Category::Food), Money::from_cents(1250));

        let food = ledger.expenses_for(Category::Food);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].description, "Coffee");

        let recent = ledger.recent(1);
        assert_eq!(recent[0].description, "Gas");
    }
}
