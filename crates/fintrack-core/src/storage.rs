//! Record-store contract.

use fintrack_domain::{Goal, Transaction};

use crate::CoreError;

/// Storage key for the transaction collection.
pub const TRANSACTIONS_KEY: &str = "financial-transactions";

/// Storage key for the goal collection.
pub const GOALS_KEY: &str = "financial-goals";

/// Abstraction over persistence backends holding the two record collections.
///
/// A missing collection loads as empty, never as an error. A collection that
/// exists but cannot be parsed is an error scoped to that collection; the
/// sibling collection is unaffected.
pub trait RecordStore: Send + Sync {
    fn load_transactions(&self) -> Result<Vec<Transaction>, CoreError>;
    fn save_transactions(&self, transactions: &[Transaction]) -> Result<(), CoreError>;
    fn load_goals(&self) -> Result<Vec<Goal>, CoreError>;
    fn save_goals(&self, goals: &[Goal]) -> Result<(), CoreError>;
}
