//! Expense rows and their joined listings.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::errors::Result;
use crate::ledger::{Account, Expense, ExpenseCategory, ExpenseWithAccount, NewExpense};

use super::read_category;

const JOINED_COLUMNS: &str = "expenses.id, expenses.amount, expenses.category, \
     expenses.reason, expenses.created_at, expenses.account_id, \
     accounts.id, accounts.name, accounts.balance";

fn row_to_joined(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExpenseWithAccount> {
    let raw_category: String = row.get(2)?;
    Ok(ExpenseWithAccount {
        expense: Expense {
            id: row.get(0)?,
            amount: row.get(1)?,
            category: read_category(2, &raw_category)?,
            reason: row.get(3)?,
            created_at: row.get(4)?,
            account_id: row.get(5)?,
        },
        account: Account {
            id: row.get(6)?,
            name: row.get(7)?,
            balance: row.get(8)?,
        },
    })
}

/// Persists an expense row and returns the assigned id. Identical-looking
/// rows are never merged; every insert produces a distinct row.
pub fn insert(conn: &Connection, expense: &NewExpense) -> Result<i64> {
    conn.execute(
        "INSERT INTO expenses (reason, category, created_at, amount, account_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            expense.reason,
            expense.category.as_str(),
            expense.created_at,
            expense.amount,
            expense.account_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Newest-first expenses joined with their owning account, optionally bounded
/// below by `since`, capped at `limit` rows.
pub fn recent(
    conn: &Connection,
    limit: u32,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<ExpenseWithAccount>> {
    let mut results = Vec::new();
    match since {
        Some(since) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {JOINED_COLUMNS}
                 FROM expenses INNER JOIN accounts ON expenses.account_id = accounts.id
                 WHERE expenses.created_at > ?1
                 ORDER BY expenses.created_at DESC LIMIT ?2"
            ))?;
            let rows = stmt.query_map(params![since, limit], row_to_joined)?;
            for row in rows {
                results.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {JOINED_COLUMNS}
                 FROM expenses INNER JOIN accounts ON expenses.account_id = accounts.id
                 ORDER BY expenses.created_at DESC LIMIT ?1"
            ))?;
            let rows = stmt.query_map(params![limit], row_to_joined)?;
            for row in rows {
                results.push(row?);
            }
        }
    }
    Ok(results)
}

/// Same shape as [`recent`], filtered to a single category.
pub fn by_category(
    conn: &Connection,
    category: ExpenseCategory,
    limit: u32,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<ExpenseWithAccount>> {
    let mut results = Vec::new();
    match since {
        Some(since) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {JOINED_COLUMNS}
                 FROM expenses INNER JOIN accounts ON expenses.account_id = accounts.id
                 WHERE expenses.category = ?1 AND expenses.created_at > ?2
                 ORDER BY expenses.created_at DESC LIMIT ?3"
            ))?;
            let rows = stmt.query_map(params![category.as_str(), since, limit], row_to_joined)?;
            for row in rows {
                results.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {JOINED_COLUMNS}
                 FROM expenses INNER JOIN accounts ON expenses.account_id = accounts.id
                 WHERE expenses.category = ?1
                 ORDER BY expenses.created_at DESC LIMIT ?2"
            ))?;
            let rows = stmt.query_map(params![category.as_str(), limit], row_to_joined)?;
            for row in rows {
                results.push(row?);
            }
        }
    }
    Ok(results)
}

/// Sum of signed amounts for a category, bounded below by `window_start` when
/// present. `None` means zero matching rows (as opposed to a zero sum).
pub fn sum_in_window(
    conn: &Connection,
    category: ExpenseCategory,
    window_start: Option<DateTime<Utc>>,
) -> Result<Option<f64>> {
    let sum: Option<f64> = match window_start {
        Some(start) => conn.query_row(
            "SELECT SUM(amount) FROM expenses
             WHERE category = ?1 AND created_at > ?2",
            params![category.as_str(), start],
            |row| row.get(0),
        )?,
        None => conn.query_row(
            "SELECT SUM(amount) FROM expenses WHERE category = ?1",
            params![category.as_str()],
            |row| row.get(0),
        )?,
    };
    Ok(sum)
}

pub fn delete_category(conn: &Connection, category: ExpenseCategory) -> Result<()> {
    conn.execute(
        "DELETE FROM expenses WHERE category = ?1",
        params![category.as_str()],
    )?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM expenses", [])?;
    Ok(())
}
