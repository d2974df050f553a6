//! penny-core
//!
//! Aggregation, forecasting, and spending analysis for PennyKeeper.
//! Depends on penny-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod aggregation_service;
pub mod error;
pub mod forecast_service;
pub mod public_api;
pub mod source;
pub mod summary_service;

pub use aggregation_service::*;
pub use error::CoreError;
pub use forecast_service::*;
pub use public_api::*;
pub use source::ExpenseSource;
pub use summary_service::*;
