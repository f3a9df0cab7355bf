use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::expense::Expense;
use super::time_frame::TimeFrame;

/// A recorded recurring obligation: a template payment plus an interval.
///
/// This is intent only. `last_paid` is set once when the recurring payment is
/// registered; nothing in the ledger advances time or re-fires the payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: i64,
    pub expense: Expense,
    pub account: Account,
    pub time_frame: TimeFrame,
    pub last_paid: DateTime<Utc>,
}
