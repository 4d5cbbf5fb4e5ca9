//! # Domain Module
//!
//! Business logic for the spending ledger: month-range queries and the
//! month-over-month comparison computation. Services are storage-agnostic
//! through the `TransactionStorage` trait.

pub mod commands;
pub mod comparison_service;
pub mod models;
pub mod transaction_service;

pub use comparison_service::ComparisonService;
pub use transaction_service::TransactionService;
