//! Spend-versus-budget aggregation over each category's rolling window.

use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::ledger::{CategoryOverview, ExpenseCategory};
use crate::storage::{budgets, expenses, Store};

pub struct OverviewService;

impl OverviewService {
    /// In-window spend paired with the configured ceiling for one category.
    ///
    /// The window comes from the category's budget row, defaulting to a month
    /// when none exists. Spend is the net outflow (positive = money out), so
    /// deposits recorded under the category reduce it. Returns `None` iff no
    /// expense rows fall inside the window.
    pub fn category_overview(
        store: &Store,
        category: ExpenseCategory,
        now: DateTime<Utc>,
    ) -> Result<Option<CategoryOverview>> {
        let frame = budgets::time_frame_for(store.conn(), category)?;
        let window_start = frame.window_start(now);
        let sum = expenses::sum_in_window(store.conn(), category, window_start)?;
        let Some(sum) = sum else {
            return Ok(None);
        };
        let ceiling = budgets::by_category(store.conn(), category)?
            .map(|b| b.amount)
            .unwrap_or(0.0);
        Ok(Some(CategoryOverview {
            category,
            spent: -sum,
            budget: ceiling,
        }))
    }

    /// Overviews for every category that has in-window activity, in category
    /// declaration order. Categories with no matching rows are skipped, not
    /// synthesized.
    pub fn full_overview(store: &Store, now: DateTime<Utc>) -> Result<Vec<CategoryOverview>> {
        let mut overviews = Vec::new();
        for category in ExpenseCategory::ALL {
            if let Some(overview) = Self::category_overview(store, category, now)? {
                overviews.push(overview);
            }
        }
        Ok(overviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{AccountService, BudgetService, ExpenseService};
    use crate::ledger::{BudgetLevel, TimeFrame};
    use chrono::Duration;

    fn store_with_account() -> Store {
        let mut store = Store::open_in_memory().unwrap();
        AccountService::open(&mut store, "Checking", 0.0).unwrap();
        store
    }

    #[test]
    fn overview_is_none_without_matching_rows() {
        let store = store_with_account();
        let overview =
            OverviewService::category_overview(&store, ExpenseCategory::Food, Utc::now()).unwrap();
        assert_eq!(overview, None);
    }

    #[test]
    fn window_excludes_older_expenses() {
        let mut store = store_with_account();
        let now = Utc::now();
        BudgetService::set(&mut store, ExpenseCategory::Food, 25.0, TimeFrame::Week).unwrap();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            10.0,
            ExpenseCategory::Food,
            "recent",
            now - Duration::days(2),
        )
        .unwrap();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            99.0,
            ExpenseCategory::Food,
            "stale",
            now - Duration::days(30),
        )
        .unwrap();

        let overview = OverviewService::category_overview(&store, ExpenseCategory::Food, now)
            .unwrap()
            .unwrap();
        assert_eq!(overview.spent, 10.0);
        assert_eq!(overview.budget, 25.0);
    }

    #[test]
    fn worked_scenario_spends_19_50_of_25_over_a_week() {
        let mut store = store_with_account();
        let now = Utc::now();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            15.50,
            ExpenseCategory::Food,
            "groceries",
            now - Duration::days(2),
        )
        .unwrap();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            4.00,
            ExpenseCategory::Food,
            "snacks",
            now,
        )
        .unwrap();
        BudgetService::set(&mut store, ExpenseCategory::Food, 25.0, TimeFrame::Week).unwrap();

        let overview = OverviewService::category_overview(&store, ExpenseCategory::Food, now)
            .unwrap()
            .unwrap();
        assert_eq!(overview.spent, 19.50);
        assert_eq!(overview.budget, 25.0);
        // 19.5 / 25 = 0.78, which sits in the >= 0.7 band.
        assert_eq!(overview.level(), BudgetLevel::High);
    }

    #[test]
    fn sum_is_insertion_order_invariant() {
        let now = Utc::now();
        let amounts = [3.25, 7.75, 1.00];

        let mut forward = store_with_account();
        for amount in amounts {
            ExpenseService::record_spend(
                &mut forward,
                "Checking",
                amount,
                ExpenseCategory::Treat,
                "t",
                now,
            )
            .unwrap();
        }
        let mut backward = store_with_account();
        for amount in amounts.iter().rev() {
            ExpenseService::record_spend(
                &mut backward,
                "Checking",
                *amount,
                ExpenseCategory::Treat,
                "t",
                now,
            )
            .unwrap();
        }

        let a = OverviewService::category_overview(&forward, ExpenseCategory::Treat, now)
            .unwrap()
            .unwrap();
        let b = OverviewService::category_overview(&backward, ExpenseCategory::Treat, now)
            .unwrap()
            .unwrap();
        assert_eq!(a.spent, b.spent);
        assert_eq!(a.spent, 12.0);
    }

    #[test]
    fn unconfigured_category_defaults_to_month_window() {
        let mut store = store_with_account();
        let now = Utc::now();
        store.clear_category(ExpenseCategory::Hazard).unwrap();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            8.0,
            ExpenseCategory::Hazard,
            "repair",
            now - Duration::days(10),
        )
        .unwrap();

        // No budget row: the month default applies, ceiling reads 0.
        let overview = OverviewService::category_overview(&store, ExpenseCategory::Hazard, now)
            .unwrap()
            .unwrap();
        assert_eq!(overview.spent, 8.0);
        assert_eq!(overview.budget, 0.0);
        assert_eq!(overview.level(), BudgetLevel::Over);
    }
}
