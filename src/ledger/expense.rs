use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::category::ExpenseCategory;

/// A single recorded cash flow against an account.
///
/// `amount` is the true signed cash-flow effect: negative is money out,
/// positive is money in. The balance delta applied when the row is recorded
/// equals this amount exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub account_id: i64,
}

/// An expense awaiting insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub account_id: i64,
}

/// Listing read model: an expense joined with its owning account.
#[derive(Debug, Clone)]
pub struct ExpenseWithAccount {
    pub expense: Expense,
    pub account: Account,
}
