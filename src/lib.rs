#![doc(test(attr(deny(warnings))))]

//! FinPath Core keeps a session's income and expense transactions in an
//! append-only ledger and derives the dashboard reports (cash position, income
//! statement, running cash flow, formalization progress) from it on demand.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod labels;
pub mod ledger;
pub mod reports;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("FinPath Core tracing initialized.");
    });
}
