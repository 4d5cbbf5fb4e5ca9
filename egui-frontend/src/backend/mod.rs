//! # Backend Module
//!
//! Direct, synchronous access to domain services and storage for the egui
//! frontend. There is no IO/REST layer: the UI calls domain services
//! in-process and every operation completes before the frame ends.

use anyhow::Result;
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

use storage::csv::TransactionRepository;

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub transaction_service: domain::TransactionService<TransactionRepository>,
    pub comparison_service: domain::ComparisonService,
}

impl Backend {
    /// Create a backend rooted at the platform data directory.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("spending-compare");
        Self::with_data_dir(data_dir)
    }

    /// Create a backend rooted at an explicit directory (used by tests).
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let csv_conn = CsvConnection::new(data_dir.into())?;
        info!("Backend storage rooted at {}", csv_conn.base_path().display());

        let repository = Arc::new(TransactionRepository::new(csv_conn));
        let transaction_service = domain::TransactionService::new(repository);
        let comparison_service = domain::ComparisonService::new();

        Ok(Backend {
            transaction_service,
            comparison_service,
        })
    }
}
