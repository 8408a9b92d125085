#![doc(test(attr(deny(warnings))))]

//! Showroom Ledger computes per-account running balances and cross-account
//! receivable/payable summaries for a dealership back office, and ships a
//! small CLI over JSON datasets.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Showroom Ledger tracing initialized.");
    });
}
