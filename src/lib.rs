#![doc(test(attr(deny(warnings))))]

//! PennyKeeper turns a personal expense history into monthly totals, a
//! next-month spending forecast, and a short spending analysis.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("PennyKeeper tracing initialized.");
    });
}
