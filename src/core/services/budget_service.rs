//! Budget upsert with change detection, plus lookups.

use crate::errors::Result;
use crate::ledger::{Budget, ExpenseCategory, TimeFrame};
use crate::storage::{budgets, Store};

/// Outcome of a `set` call, derived from the previous amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetChange {
    Created,
    Unchanged(f64),
    Updated { from: f64 },
}

pub struct BudgetService;

impl BudgetService {
    /// Upserts the budget for `category` and reports what changed.
    pub fn set(
        store: &mut Store,
        category: ExpenseCategory,
        amount: f64,
        time_frame: TimeFrame,
    ) -> Result<BudgetChange> {
        let previous = budgets::set(store.conn(), category, amount, time_frame)?;
        let change = match previous {
            None => BudgetChange::Created,
            Some(old) if old == amount => BudgetChange::Unchanged(old),
            Some(old) => BudgetChange::Updated { from: old },
        };
        tracing::info!(category = %category, amount, frame = %time_frame, ?change, "set budget");
        Ok(change)
    }

    pub fn get(store: &Store, category: ExpenseCategory) -> Result<Option<Budget>> {
        budgets::by_category(store.conn(), category)
    }

    /// All budget rows ordered by category name.
    pub fn list(store: &Store) -> Result<Vec<Budget>> {
        budgets::list(store.conn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_amount_is_a_no_op() {
        let mut store = Store::open_in_memory().unwrap();
        // Seeded rows exist, so the first set is an update from the default 0.
        let change =
            BudgetService::set(&mut store, ExpenseCategory::Food, 50.0, TimeFrame::Month).unwrap();
        assert_eq!(change, BudgetChange::Updated { from: 0.0 });

        let change =
            BudgetService::set(&mut store, ExpenseCategory::Food, 50.0, TimeFrame::Month).unwrap();
        assert_eq!(change, BudgetChange::Unchanged(50.0));

        let change =
            BudgetService::set(&mut store, ExpenseCategory::Food, 75.0, TimeFrame::Month).unwrap();
        assert_eq!(change, BudgetChange::Updated { from: 50.0 });

        let budget = BudgetService::get(&store, ExpenseCategory::Food)
            .unwrap()
            .unwrap();
        assert_eq!(budget.amount, 75.0);
    }

    #[test]
    fn set_reports_created_after_category_clear() {
        let mut store = Store::open_in_memory().unwrap();
        store.clear_category(ExpenseCategory::Treat).unwrap();
        assert!(BudgetService::get(&store, ExpenseCategory::Treat)
            .unwrap()
            .is_none());
        let change =
            BudgetService::set(&mut store, ExpenseCategory::Treat, 10.0, TimeFrame::Week).unwrap();
        assert_eq!(change, BudgetChange::Created);
    }

    #[test]
    fn list_is_ordered_by_category_name() {
        let store = Store::open_in_memory().unwrap();
        let listed: Vec<_> = BudgetService::list(&store)
            .unwrap()
            .into_iter()
            .map(|b| b.category.as_str())
            .collect();
        let mut sorted = listed.clone();
        sorted.sort();
        assert_eq!(listed, sorted);
        assert_eq!(listed.len(), ExpenseCategory::ALL.len());
    }
}
