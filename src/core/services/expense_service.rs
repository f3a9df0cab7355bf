//! Recording cash flows: the expense row and the balance mutation commit
//! together or not at all.

use chrono::{DateTime, Utc};

use crate::errors::{LedgerError, Result};
use crate::ledger::{ExpenseCategory, ExpenseWithAccount, NewExpense};
use crate::storage::{accounts, expenses, Store};

/// Result of recording a spend or deposit.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCashFlow {
    pub expense_id: i64,
    pub new_balance: f64,
}

pub struct ExpenseService;

impl ExpenseService {
    /// Records money leaving `account_name`. The stored amount is the signed
    /// cash-flow effect, so a spend of 20 stores -20 and debits 20.
    pub fn record_spend(
        store: &mut Store,
        account_name: &str,
        amount: f64,
        category: ExpenseCategory,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<RecordedCashFlow> {
        Self::record_flow(store, account_name, -amount.abs(), category, reason, now)
    }

    /// Records money entering `account_name`; stores +amount and credits it.
    pub fn record_deposit(
        store: &mut Store,
        account_name: &str,
        amount: f64,
        category: ExpenseCategory,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<RecordedCashFlow> {
        Self::record_flow(store, account_name, amount.abs(), category, reason, now)
    }

    pub(crate) fn record_flow(
        store: &mut Store,
        account_name: &str,
        signed_amount: f64,
        category: ExpenseCategory,
        reason: &str,
        now: DateTime<Utc>,
    ) -> Result<RecordedCashFlow> {
        let account = accounts::by_name(store.conn(), account_name)?
            .ok_or_else(|| LedgerError::NotFound(format!("account `{}`", account_name)))?;

        let tx = store.transaction()?;
        let expense_id = expenses::insert(
            &tx,
            &NewExpense {
                amount: signed_amount,
                category,
                reason: reason.to_string(),
                created_at: now,
                account_id: account.id,
            },
        )?;
        let new_balance = accounts::apply_delta(&tx, account.id, signed_amount)?;
        tx.commit()?;

        tracing::info!(
            account = %account.name,
            amount = signed_amount,
            category = %category,
            "recorded cash flow"
        );
        Ok(RecordedCashFlow {
            expense_id,
            new_balance,
        })
    }

    /// Newest-first listing across all categories.
    pub fn list_recent(
        store: &Store,
        limit: u32,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ExpenseWithAccount>> {
        expenses::recent(store.conn(), limit, since)
    }

    /// Newest-first listing for one category.
    pub fn list_by_category(
        store: &Store,
        category: ExpenseCategory,
        limit: u32,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<ExpenseWithAccount>> {
        expenses::by_category(store.conn(), category, limit, since)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::AccountService;

    #[test]
    fn spend_debits_and_deposit_credits() {
        let mut store = Store::open_in_memory().unwrap();
        AccountService::open(&mut store, "Checking", 100.0).unwrap();
        let now = Utc::now();

        let spent = ExpenseService::record_spend(
            &mut store,
            "Checking",
            20.0,
            ExpenseCategory::Food,
            "lunch",
            now,
        )
        .unwrap();
        assert_eq!(spent.new_balance, 80.0);

        let deposited = ExpenseService::record_deposit(
            &mut store,
            "Checking",
            20.0,
            ExpenseCategory::Wage,
            "refund",
            now,
        )
        .unwrap();
        assert_eq!(deposited.new_balance, 100.0);
    }

    #[test]
    fn stored_amount_is_the_signed_cash_flow() {
        let mut store = Store::open_in_memory().unwrap();
        AccountService::open(&mut store, "Checking", 0.0).unwrap();
        let now = Utc::now();
        ExpenseService::record_spend(
            &mut store,
            "Checking",
            12.5,
            ExpenseCategory::Food,
            "out",
            now,
        )
        .unwrap();
        ExpenseService::record_deposit(
            &mut store,
            "Checking",
            3.0,
            ExpenseCategory::Gift,
            "in",
            now,
        )
        .unwrap();

        let rows = ExpenseService::list_recent(&store, 10, None).unwrap();
        let amounts: Vec<f64> = rows.iter().map(|r| r.expense.amount).collect();
        assert!(amounts.contains(&-12.5));
        assert!(amounts.contains(&3.0));
    }

    #[test]
    fn unknown_account_fails_before_any_write() {
        let mut store = Store::open_in_memory().unwrap();
        let err = ExpenseService::record_spend(
            &mut store,
            "Nowhere",
            5.0,
            ExpenseCategory::Food,
            "x",
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
        assert!(ExpenseService::list_recent(&store, 10, None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn identical_spends_produce_distinct_rows() {
        let mut store = Store::open_in_memory().unwrap();
        AccountService::open(&mut store, "Checking", 50.0).unwrap();
        let now = Utc::now();
        let first = ExpenseService::record_spend(
            &mut store,
            "Checking",
            5.0,
            ExpenseCategory::Treat,
            "coffee",
            now,
        )
        .unwrap();
        let second = ExpenseService::record_spend(
            &mut store,
            "Checking",
            5.0,
            ExpenseCategory::Treat,
            "coffee",
            now,
        )
        .unwrap();
        assert_ne!(first.expense_id, second.expense_id);
        assert_eq!(second.new_balance, 40.0);
    }
}
