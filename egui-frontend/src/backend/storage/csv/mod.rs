//! # CSV Storage Module
//!
//! File-based ledger storage. The ledger is a single `transactions.csv`
//! in the app's data directory, maintained externally (or seeded by tests).
//!
//! ## File Format
//!
//! ```csv
//! id,date,description,category,amount
//! tx-0001,2024-05-03,"Weekly groceries",groceries,-62.10
//! tx-0002,2024-05-25,"Salary",salary,2400.00
//! ```
//!
//! Dates are plain calendar days (`YYYY-MM-DD`); amounts are positive for
//! income and negative for spending.

pub mod connection;
pub mod transaction_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use transaction_repository::TransactionRepository;
