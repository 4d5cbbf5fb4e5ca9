//! # Storage Module
//!
//! Persistence for the transaction ledger. Domain services talk to the
//! `TransactionStorage` trait; the CSV implementation lives in `csv/`.

pub mod csv;
pub mod traits;

pub use traits::TransactionStorage;
