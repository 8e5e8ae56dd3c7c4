#![doc(test(attr(deny(warnings))))]

//! Rental Core keeps the books for a small shared rental property: tenants and
//! their payments, shared expenses, occupancy-based rent for shared units, and
//! each shareholder's cut of the month's net income.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Rental Core tracing initialized.");
    });
}
