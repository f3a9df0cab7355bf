//! Budget rows: one per category, keyed by the category name.

use rusqlite::{params, Connection, OptionalExtension};

use crate::errors::Result;
use crate::ledger::{Budget, ExpenseCategory, TimeFrame};

use super::{read_category, read_time_frame};

fn row_to_budget(row: &rusqlite::Row<'_>) -> rusqlite::Result<Budget> {
    let raw_category: String = row.get(0)?;
    let raw_frame: String = row.get(2)?;
    Ok(Budget {
        category: read_category(0, &raw_category)?,
        amount: row.get(1)?,
        time_frame: read_time_frame(2, &raw_frame)?,
    })
}

/// Ensures every category has a budget row, defaulting to 0 over a month.
/// Existing rows are left alone.
pub fn seed_defaults(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO budgets (category, amount, time_frame) VALUES (?1, 0, ?2)",
    )?;
    for category in ExpenseCategory::ALL {
        stmt.execute(params![category.as_str(), TimeFrame::Month.as_str()])?;
    }
    Ok(())
}

/// Upserts the budget for `category` and returns the previous amount.
///
/// `None` signals first-time creation. When the amount is unchanged the call
/// short-circuits without a write and returns the old amount, so callers can
/// tell created / unchanged / updated apart by comparing the returned value.
pub fn set(
    conn: &Connection,
    category: ExpenseCategory,
    amount: f64,
    time_frame: TimeFrame,
) -> Result<Option<f64>> {
    let old = by_category(conn, category)?;
    if let Some(existing) = &old {
        if existing.amount == amount {
            return Ok(Some(existing.amount));
        }
    }
    conn.execute(
        "INSERT INTO budgets (category, amount, time_frame) VALUES (?1, ?2, ?3)
         ON CONFLICT (category) DO UPDATE SET amount = ?2, time_frame = ?3",
        params![category.as_str(), amount, time_frame.as_str()],
    )?;
    Ok(old.map(|b| b.amount))
}

pub fn by_category(conn: &Connection, category: ExpenseCategory) -> Result<Option<Budget>> {
    let budget = conn
        .query_row(
            "SELECT category, amount, time_frame FROM budgets WHERE category = ?1",
            params![category.as_str()],
            row_to_budget,
        )
        .optional()?;
    Ok(budget)
}

/// All budget rows ordered by category name.
pub fn list(conn: &Connection) -> Result<Vec<Budget>> {
    let mut stmt =
        conn.prepare("SELECT category, amount, time_frame FROM budgets ORDER BY category")?;
    let rows = stmt.query_map([], row_to_budget)?;
    let mut budgets = Vec::new();
    for row in rows {
        budgets.push(row?);
    }
    Ok(budgets)
}

/// The configured time frame for a category, or the month default when no
/// budget row exists.
pub fn time_frame_for(conn: &Connection, category: ExpenseCategory) -> Result<TimeFrame> {
    Ok(by_category(conn, category)?
        .map(|b| b.time_frame)
        .unwrap_or(TimeFrame::Month))
}

pub fn delete_category(conn: &Connection, category: ExpenseCategory) -> Result<()> {
    conn.execute(
        "DELETE FROM budgets WHERE category = ?1",
        params![category.as_str()],
    )?;
    Ok(())
}
