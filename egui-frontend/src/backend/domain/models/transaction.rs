//! Domain model for a ledger transaction.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Calendar day the transaction happened on
    pub date: NaiveDate,
    pub description: String,
    /// Spending category label, e.g. "groceries"
    pub category: String,
    /// Positive for income, negative for spending
    pub amount: f64,
}

impl Transaction {
    /// Whether this transaction is spending.
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Spending magnitude; zero for income rows.
    pub fn expense_magnitude(&self) -> f64 {
        if self.amount < 0.0 {
            -self.amount
        } else {
            0.0
        }
    }
}
