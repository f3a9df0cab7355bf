use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("account `{0}` already exists")]
    DuplicateName(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
