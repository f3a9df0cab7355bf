//! Account lifecycle: opening and listing.

use crate::errors::{LedgerError, Result};
use crate::ledger::Account;
use crate::storage::{accounts, Store};

pub struct AccountService;

impl AccountService {
    /// Opens a new account with the given starting balance. Duplicate names
    /// are rejected.
    pub fn open(store: &mut Store, name: &str, initial_balance: f64) -> Result<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::InvalidArgument(
                "account name must not be empty".into(),
            ));
        }
        let account = accounts::insert(store.conn(), name, initial_balance)?;
        tracing::info!(name = %account.name, balance = account.balance, "opened account");
        Ok(account)
    }

    /// All accounts in insertion order.
    pub fn list(store: &Store) -> Result<Vec<Account>> {
        accounts::list(store.conn())
    }

    /// Resolves an account by its display name.
    pub fn by_name(store: &Store, name: &str) -> Result<Option<Account>> {
        accounts::by_name(store.conn(), name)
    }
}
