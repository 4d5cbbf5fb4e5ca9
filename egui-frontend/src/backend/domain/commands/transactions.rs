//! Command and query objects for the transaction service.
use shared::MonthPeriod;

use crate::backend::domain::models::transaction::Transaction;

/// Query for all transactions inside one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRangeQuery {
    pub period: MonthPeriod,
}

/// Result envelope for a month-range query.
#[derive(Debug, Clone)]
pub struct MonthTransactionsResult {
    pub period: MonthPeriod,
    /// Transactions ordered by date ascending
    pub transactions: Vec<Transaction>,
}
