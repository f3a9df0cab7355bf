#![doc(test(attr(deny(warnings))))]

//! Ledger Core records expenses and deposits against named accounts, tracks
//! per-category budgets over rolling time windows, and reports aggregated
//! spend versus budget.

pub mod cli;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("ledger_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Ledger Core tracing initialized.");
    });
}
