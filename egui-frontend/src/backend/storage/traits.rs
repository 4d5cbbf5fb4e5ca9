//! Storage trait seam so domain services stay storage-agnostic.
use anyhow::Result;

use crate::backend::domain::models::transaction::Transaction;

/// Storage backend for the transaction ledger.
pub trait TransactionStorage {
    /// All transactions in the ledger, ordered by date ascending.
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    /// Append transactions to the ledger.
    fn append_transactions(&self, transactions: &[Transaction]) -> Result<()>;
}
