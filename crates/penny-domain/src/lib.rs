//! penny-domain
//!
//! Pure domain models (Transaction, MonthKey, MonthlyTotal).
//! No I/O, no CLI, no storage. Only data types and shared traits.

pub mod common;
pub mod month;
pub mod transaction;

pub use common::*;
pub use month::*;
pub use transaction::*;
