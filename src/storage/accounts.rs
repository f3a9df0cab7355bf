//! Account rows and the running-balance ledger.

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::{LedgerError, Result};
use crate::ledger::Account;

fn row_to_account(row: &rusqlite::Row<'_>) -> rusqlite::Result<Account> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        balance: row.get(2)?,
    })
}

/// Opens a new account. Name collisions are rejected so a caller's intended
/// starting balance is never silently discarded.
pub fn insert(conn: &Connection, name: &str, balance: f64) -> Result<Account> {
    if by_name(conn, name)?.is_some() {
        return Err(LedgerError::DuplicateName(name.to_string()));
    }
    conn.execute(
        "INSERT INTO accounts (name, balance) VALUES (?1, ?2)",
        params![name, balance],
    )?;
    Ok(Account {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        balance,
    })
}

pub fn by_name(conn: &Connection, name: &str) -> Result<Option<Account>> {
    let account = conn
        .query_row(
            "SELECT id, name, balance FROM accounts WHERE name = ?1",
            params![name],
            row_to_account,
        )
        .optional()?;
    Ok(account)
}

pub fn by_id(conn: &Connection, id: i64) -> Result<Option<Account>> {
    let account = conn
        .query_row(
            "SELECT id, name, balance FROM accounts WHERE id = ?1",
            params![id],
            row_to_account,
        )
        .optional()?;
    Ok(account)
}

/// All accounts in insertion order.
pub fn list(conn: &Connection) -> Result<Vec<Account>> {
    let mut stmt = conn.prepare("SELECT id, name, balance FROM accounts ORDER BY id")?;
    let rows = stmt.query_map([], row_to_account)?;
    let mut accounts = Vec::new();
    for row in rows {
        accounts.push(row?);
    }
    Ok(accounts)
}

/// Adds `delta` (signed, negative for outflow) to the account's balance and
/// returns the new balance. Read-modify-write; callers recording an expense
/// alongside must hold a transaction spanning both writes.
pub fn apply_delta(conn: &Connection, account_id: i64, delta: f64) -> Result<f64> {
    let account = by_id(conn, account_id)?
        .ok_or_else(|| LedgerError::NotFound(format!("account id {}", account_id)))?;
    let new_balance = account.balance + delta;
    conn.execute(
        "UPDATE accounts SET balance = ?1 WHERE id = ?2",
        params![new_balance, account_id],
    )?;
    Ok(new_balance)
}
