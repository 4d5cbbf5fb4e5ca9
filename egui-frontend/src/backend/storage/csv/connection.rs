//! CSV storage connection: owns the data directory and file layout.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Handle to the CSV data directory.
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_path: PathBuf,
}

impl CsvConnection {
    /// Create a connection, creating the data directory if needed.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path)
            .with_context(|| format!("creating data directory {}", base_path.display()))?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of the transaction ledger file.
    pub fn transactions_file_path(&self) -> PathBuf {
        self.base_path.join("transactions.csv")
    }

    /// Create the ledger file with a header row when it does not exist yet.
    pub fn ensure_transactions_file_exists(&self) -> Result<()> {
        let path = self.transactions_file_path();
        if !path.exists() {
            let mut writer = csv::Writer::from_path(&path)
                .with_context(|| format!("creating ledger file {}", path.display()))?;
            writer.write_record(["id", "date", "description", "category", "amount"])?;
            writer.flush()?;
        }
        Ok(())
    }
}
