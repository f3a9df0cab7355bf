use serde::{Deserialize, Serialize};

/// A named account holding a running balance.
///
/// The balance is the authoritative total, mutated only through the balance
/// ledger alongside each recorded cash flow; it is never recomputed from the
/// expense history at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub balance: f64,
}
