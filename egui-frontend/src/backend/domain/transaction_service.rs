//! Transaction domain service: ledger queries for the UI and for the
//! comparison computation.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::domain::commands::transactions::{MonthRangeQuery, MonthTransactionsResult};
use crate::backend::domain::models::transaction::Transaction;
use crate::backend::storage::TransactionStorage;

/// Month-range and balance queries over the ledger.
#[derive(Clone)]
pub struct TransactionService<S: TransactionStorage> {
    storage: Arc<S>,
}

impl<S: TransactionStorage> TransactionService<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// All transactions inside the queried month, date ascending.
    pub fn list_for_month(&self, query: MonthRangeQuery) -> Result<MonthTransactionsResult> {
        let start = query.period.first_day();
        let end = query.period.last_day();

        let transactions: Vec<Transaction> = self
            .storage
            .list_transactions()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect();

        info!("📊 {} transactions in {}", transactions.len(), query.period);
        Ok(MonthTransactionsResult {
            period: query.period,
            transactions,
        })
    }

    /// Current balance: running sum of every ledger amount.
    pub fn latest_balance(&self) -> Result<f64> {
        Ok(self.storage.list_transactions()?.iter().map(|t| t.amount).sum())
    }

    /// Most recent transactions, newest first, capped at `limit`.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<Transaction>> {
        let mut transactions = self.storage.list_transactions()?;
        transactions.reverse(); // storage returns date ascending
        transactions.truncate(limit);
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::{seed_transaction, TestEnvironment};
    use shared::MonthPeriod;

    fn setup_service() -> Result<(TransactionService<crate::backend::storage::csv::TransactionRepository>, TestEnvironment)>
    {
        let env = TestEnvironment::new()?;
        let repo = env.transaction_repo();
        repo.append_transactions(&[
            seed_transaction("tx-001", "2024-05-31", "groceries", -40.00),
            seed_transaction("tx-002", "2024-06-01", "groceries", -62.50),
            seed_transaction("tx-003", "2024-06-30", "dining", -30.25),
            seed_transaction("tx-004", "2024-07-01", "transport", -12.75),
            seed_transaction("tx-005", "2024-06-25", "salary", 2400.00),
        ])?;
        let service = TransactionService::new(Arc::new(repo));
        Ok((service, env))
    }

    #[test]
    fn test_month_range_is_inclusive_of_both_bounds() -> Result<()> {
        let (service, _env) = setup_service()?;

        let result = service.list_for_month(MonthRangeQuery {
            period: MonthPeriod::new(2024, 6),
        })?;

        let ids: Vec<&str> = result.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["tx-002", "tx-005", "tx-003"]);

        Ok(())
    }

    #[test]
    fn test_adjacent_months_are_excluded() -> Result<()> {
        let (service, _env) = setup_service()?;

        let may = service.list_for_month(MonthRangeQuery {
            period: MonthPeriod::new(2024, 5),
        })?;
        assert_eq!(may.transactions.len(), 1);
        assert_eq!(may.transactions[0].id, "tx-001");

        let july = service.list_for_month(MonthRangeQuery {
            period: MonthPeriod::new(2024, 7),
        })?;
        assert_eq!(july.transactions.len(), 1);
        assert_eq!(july.transactions[0].id, "tx-004");

        Ok(())
    }

    #[test]
    fn test_latest_balance_sums_the_whole_ledger() -> Result<()> {
        let (service, _env) = setup_service()?;

        let balance = service.latest_balance()?;
        assert_eq!(balance, 2400.00 - 40.00 - 62.50 - 30.25 - 12.75);

        Ok(())
    }

    #[test]
    fn test_list_recent_is_newest_first_and_capped() -> Result<()> {
        let (service, _env) = setup_service()?;

        let recent = service.list_recent(2)?;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "tx-004");
        assert_eq!(recent[1].id, "tx-003");

        Ok(())
    }
}
