//! Recurring payment rows: a template expense plus a repeat interval.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::errors::Result;
use crate::ledger::{Account, Expense, ExpenseCategory, RecurringExpense, TimeFrame};

use super::{read_category, read_time_frame};

/// Registers a recurring payment referencing a previously-inserted expense.
pub fn insert(
    conn: &Connection,
    expense_id: i64,
    time_frame: TimeFrame,
    last_paid: DateTime<Utc>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO recurring_payments (expense_id, time_frame, last_paid)
         VALUES (?1, ?2, ?3)",
        params![expense_id, time_frame.as_str(), last_paid],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All recurring payments joined with the template expense and its account.
pub fn list(conn: &Connection) -> Result<Vec<RecurringExpense>> {
    let mut stmt = conn.prepare(
        "SELECT recurring_payments.id, recurring_payments.time_frame,
                recurring_payments.last_paid,
                expenses.id, expenses.amount, expenses.category, expenses.reason,
                expenses.created_at, expenses.account_id,
                accounts.id, accounts.name, accounts.balance
         FROM recurring_payments
         INNER JOIN expenses ON expenses.id = recurring_payments.expense_id
         INNER JOIN accounts ON accounts.id = expenses.account_id
         ORDER BY recurring_payments.id",
    )?;
    let rows = stmt.query_map([], |row| {
        let raw_frame: String = row.get(1)?;
        let raw_category: String = row.get(5)?;
        Ok(RecurringExpense {
            id: row.get(0)?,
            time_frame: read_time_frame(1, &raw_frame)?,
            last_paid: row.get(2)?,
            expense: Expense {
                id: row.get(3)?,
                amount: row.get(4)?,
                category: read_category(5, &raw_category)?,
                reason: row.get(6)?,
                created_at: row.get(7)?,
                account_id: row.get(8)?,
            },
            account: Account {
                id: row.get(9)?,
                name: row.get(10)?,
                balance: row.get(11)?,
            },
        })
    })?;
    let mut payments = Vec::new();
    for row in rows {
        payments.push(row?);
    }
    Ok(payments)
}

/// Removes recurring rows whose template expense belongs to `category`,
/// keeping foreign keys intact when that category's expenses are cleared.
pub fn delete_for_category(conn: &Connection, category: ExpenseCategory) -> Result<()> {
    conn.execute(
        "DELETE FROM recurring_payments WHERE expense_id IN
             (SELECT id FROM expenses WHERE category = ?1)",
        params![category.as_str()],
    )?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM recurring_payments", [])?;
    Ok(())
}
