/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// Provides RAII-based cleanup that guarantees test data is removed even if
/// tests panic or fail.
use anyhow::Result;
use chrono::NaiveDate;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::transaction_repository::TransactionRepository;
use crate::backend::domain::models::transaction::Transaction;

/// Test environment that provides a temporary directory and connection
/// that will be automatically cleaned up when the environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Repository over this environment's connection.
    pub fn transaction_repo(&self) -> TransactionRepository {
        TransactionRepository::new(self.connection.clone())
    }
}

/// Build a ledger transaction for tests. Dates are `YYYY-MM-DD`.
pub fn seed_transaction(id: &str, date: &str, category: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: format!("Test {}", category),
        category: category.to_string(),
        amount,
    }
}
