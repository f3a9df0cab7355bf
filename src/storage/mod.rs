//! SQLite persistence for the ledger.
//!
//! One `Store` wraps one `rusqlite::Connection`; multi-step mutations run
//! inside explicit transactions so a crash can never leave the balance and
//! the expense history disagreeing.

pub mod accounts;
pub mod budgets;
pub mod expenses;
pub mod recurring;

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs};

use rusqlite::types::Type;
use rusqlite::{Connection, Transaction};

use crate::errors::{LedgerError, Result};
use crate::ledger::{ExpenseCategory, TimeFrame};

const DEFAULT_DIR_NAME: &str = ".ledger_core";
const DB_FILE: &str = "finances.db";

/// Returns the application data directory, defaulting to `~/.ledger_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("LEDGER_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the ledger database file.
pub fn db_path() -> PathBuf {
    app_data_dir().join(DB_FILE)
}

/// Handle to the persisted ledger.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema and default budget rows exist.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens the database at the default application path.
    pub fn open_default() -> Result<Self> {
        Self::open(&db_path())
    }

    /// In-memory store, used by tests and throwaway sessions.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                balance REAL NOT NULL
            );

            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reason TEXT,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL,
                amount REAL NOT NULL,
                account_id INTEGER NOT NULL,
                FOREIGN KEY (account_id) REFERENCES accounts(id)
            );
            CREATE INDEX IF NOT EXISTS idx_expenses_created_at
                ON expenses(created_at);

            CREATE TABLE IF NOT EXISTS budgets (
                category TEXT PRIMARY KEY NOT NULL,
                amount REAL NOT NULL,
                time_frame TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS recurring_payments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                expense_id INTEGER NOT NULL,
                time_frame TEXT NOT NULL,
                last_paid TEXT NOT NULL,
                FOREIGN KEY (expense_id) REFERENCES expenses(id)
            );
            "#,
        )?;
        budgets::seed_defaults(&self.conn)?;
        Ok(())
    }

    /// Deletes all expense rows and the budget row for `category`; other
    /// categories are untouched.
    pub fn clear_category(&mut self, category: ExpenseCategory) -> Result<()> {
        let tx = self.transaction()?;
        recurring::delete_for_category(&tx, category)?;
        expenses::delete_category(&tx, category)?;
        budgets::delete_category(&tx, category)?;
        tx.commit()?;
        tracing::info!(category = %category, "cleared category");
        Ok(())
    }

    /// Empties every table, then reseeds the default budget rows.
    pub fn clear_all(&mut self) -> Result<()> {
        let tx = self.transaction()?;
        recurring::delete_all(&tx)?;
        expenses::delete_all(&tx)?;
        tx.execute("DELETE FROM budgets", [])?;
        tx.execute("DELETE FROM accounts", [])?;
        budgets::seed_defaults(&tx)?;
        tx.commit()?;
        tracing::info!("cleared all ledger data");
        Ok(())
    }
}

fn conversion_error(idx: usize, err: LedgerError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}

/// Decodes a stored category name, surfacing corruption as a store error.
pub(crate) fn read_category(idx: usize, raw: &str) -> rusqlite::Result<ExpenseCategory> {
    ExpenseCategory::from_str(raw).map_err(|e| conversion_error(idx, e))
}

pub(crate) fn read_time_frame(idx: usize, raw: &str) -> rusqlite::Result<TimeFrame> {
    TimeFrame::from_str(raw).map_err(|e| conversion_error(idx, e))
}
