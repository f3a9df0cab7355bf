//! Recurring payments: record the template payment and register the repeat
//! interval in one transaction.

use chrono::{DateTime, Utc};

use crate::errors::{LedgerError, Result};
use crate::ledger::{ExpenseCategory, NewExpense, RecurringExpense, TimeFrame};
use crate::storage::{accounts, expenses, recurring, Store};

pub struct RecurringService;

impl RecurringService {
    /// Records the first occurrence as a normal spend, then registers a
    /// recurring payment referencing the fresh expense row. `last_paid` is
    /// set to `now` and never advanced by the ledger itself.
    pub fn record(
        store: &mut Store,
        account_name: &str,
        amount: f64,
        category: ExpenseCategory,
        reason: &str,
        time_frame: TimeFrame,
        now: DateTime<Utc>,
    ) -> Result<i64> {
        let account = accounts::by_name(store.conn(), account_name)?
            .ok_or_else(|| LedgerError::NotFound(format!("account `{}`", account_name)))?;
        let signed_amount = -amount.abs();

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
        accounts::apply_delta(&tx, account.id, signed_amount)?;
        let recurring_id = recurring::insert(&tx, expense_id, time_frame, now)?;
        tx.commit()?;

        tracing::info!(
            account = %account.name,
            amount = signed_amount,
            frame = %time_frame,
            "registered recurring payment"
        );
        Ok(recurring_id)
    }

    /// All recurring payments joined with their template expense and account.
    pub fn list(store: &Store) -> Result<Vec<RecurringExpense>> {
        recurring::list(store.conn())
    }
}
