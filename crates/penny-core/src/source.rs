use penny_domain::Transaction;

use crate::CoreError;

/// Abstraction over whatever hands the current transaction set to the core.
pub trait ExpenseSource: Send + Sync {
    /// Returns a snapshot of every known transaction, in no particular order.
    fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
}
