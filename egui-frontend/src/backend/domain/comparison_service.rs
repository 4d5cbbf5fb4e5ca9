//! Month-over-month comparison computation.
//!
//! Aggregates two calendar months of the ledger and reduces them to the
//! comparison result the UI renders: per-month totals plus a per-category
//! spending delta table.

use anyhow::Result;
use log::info;
use std::collections::HashMap;
use thiserror::Error;

use shared::{CategoryComparison, MonthPeriod, MonthSummary, MonthlyComparison};

use crate::backend::domain::commands::transactions::MonthRangeQuery;
use crate::backend::domain::models::transaction::Transaction;
use crate::backend::domain::transaction_service::TransactionService;
use crate::backend::storage::TransactionStorage;

/// Rejected comparison requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonRequestError {
    #[error("comparison month {previous} must precede current month {current}")]
    NonPrecedingComparison {
        current: MonthPeriod,
        previous: MonthPeriod,
    },
}

/// Comparison service over the transaction ledger.
#[derive(Clone, Default)]
pub struct ComparisonService;

impl ComparisonService {
    pub fn new() -> Self {
        Self
    }

    /// Compare two months of the ledger.
    ///
    /// `previous` must be strictly before `current`.
    pub fn compare<S: TransactionStorage>(
        &self,
        current: MonthPeriod,
        previous: MonthPeriod,
        transaction_service: &TransactionService<S>,
    ) -> Result<MonthlyComparison> {
        if previous >= current {
            return Err(ComparisonRequestError::NonPrecedingComparison { current, previous }.into());
        }

        let current_result = transaction_service.list_for_month(MonthRangeQuery { period: current })?;
        let previous_result =
            transaction_service.list_for_month(MonthRangeQuery { period: previous })?;

        let current_summary = summarize(current, &current_result.transactions);
        let previous_summary = summarize(previous, &previous_result.transactions);

        let spending_delta = current_summary.total_expenses - previous_summary.total_expenses;
        let spending_delta_percent = if previous_summary.total_expenses == 0.0 {
            None
        } else {
            Some(spending_delta / previous_summary.total_expenses * 100.0)
        };

        let categories = category_table(
            &current_result.transactions,
            &previous_result.transactions,
        );

        info!(
            "📊 Compared {} against {}: spending delta {:+.2}",
            current, previous, spending_delta
        );

        Ok(MonthlyComparison {
            current: current_summary,
            previous: previous_summary,
            spending_delta,
            spending_delta_percent,
            categories,
        })
    }
}

/// Totals for one month of transactions.
fn summarize(period: MonthPeriod, transactions: &[Transaction]) -> MonthSummary {
    let total_income: f64 = transactions
        .iter()
        .filter(|t| t.amount > 0.0)
        .map(|t| t.amount)
        .sum();
    let total_expenses: f64 = transactions.iter().map(|t| t.expense_magnitude()).sum();

    MonthSummary {
        period,
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}

/// Per-category spending table: union of both months' categories, missing
/// sides contributing zero, largest absolute change first.
fn category_table(current: &[Transaction], previous: &[Transaction]) -> Vec<CategoryComparison> {
    let current_by_category = expenses_by_category(current);
    let previous_by_category = expenses_by_category(previous);

    let mut names: Vec<String> = current_by_category
        .keys()
        .chain(previous_by_category.keys())
        .cloned()
        .collect();
    names.sort();
    names.dedup();

    let mut rows: Vec<CategoryComparison> = names
        .into_iter()
        .map(|category| {
            let current_amount = current_by_category.get(&category).copied().unwrap_or(0.0);
            let previous_amount = previous_by_category.get(&category).copied().unwrap_or(0.0);
            CategoryComparison {
                category,
                current_amount,
                previous_amount,
                delta: current_amount - previous_amount,
            }
        })
        .collect();

    // Stable sort on |delta| keeps the alphabetical order for ties
    rows.sort_by(|a, b| {
        b.delta
            .abs()
            .partial_cmp(&a.delta.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

fn expenses_by_category(transactions: &[Transaction]) -> HashMap<String, f64> {
    let mut totals = HashMap::new();
    for transaction in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(transaction.category.clone()).or_insert(0.0) +=
            transaction.expense_magnitude();
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::{seed_transaction, TestEnvironment};
    use crate::backend::storage::csv::TransactionRepository;
    use std::sync::Arc;

    fn setup_service() -> Result<(
        ComparisonService,
        TransactionService<TransactionRepository>,
        TestEnvironment,
    )> {
        let env = TestEnvironment::new()?;
        let repo = env.transaction_repo();
        repo.append_transactions(&[
            // June 2024: 75.00 spent, 2400.00 earned
            seed_transaction("tx-001", "2024-06-03", "groceries", -60.00),
            seed_transaction("tx-002", "2024-06-12", "dining", -15.00),
            seed_transaction("tx-003", "2024-06-25", "salary", 2400.00),
            // May 2024: 50.00 spent, 2400.00 earned
            seed_transaction("tx-004", "2024-05-07", "groceries", -40.00),
            seed_transaction("tx-005", "2024-05-14", "transport", -10.00),
            seed_transaction("tx-006", "2024-05-25", "salary", 2400.00),
        ])?;
        let transaction_service = TransactionService::new(Arc::new(repo));
        Ok((ComparisonService::new(), transaction_service, env))
    }

    #[test]
    fn test_month_summaries_and_spending_delta() -> Result<()> {
        let (service, transactions, _env) = setup_service()?;

        let comparison = service.compare(
            MonthPeriod::new(2024, 6),
            MonthPeriod::new(2024, 5),
            &transactions,
        )?;

        assert_eq!(comparison.current.total_income, 2400.00);
        assert_eq!(comparison.current.total_expenses, 75.00);
        assert_eq!(comparison.current.net, 2325.00);

        assert_eq!(comparison.previous.total_expenses, 50.00);
        assert_eq!(comparison.spending_delta, 25.00);
        assert_eq!(comparison.spending_delta_percent, Some(50.0));

        Ok(())
    }

    #[test]
    fn test_category_table_is_a_zero_filled_union_sorted_by_change() -> Result<()> {
        let (service, transactions, _env) = setup_service()?;

        let comparison = service.compare(
            MonthPeriod::new(2024, 6),
            MonthPeriod::new(2024, 5),
            &transactions,
        )?;

        let rows: Vec<(&str, f64, f64, f64)> = comparison
            .categories
            .iter()
            .map(|c| {
                (
                    c.category.as_str(),
                    c.current_amount,
                    c.previous_amount,
                    c.delta,
                )
            })
            .collect();

        // groceries changed most, dining only exists in June, transport only in May
        assert_eq!(
            rows,
            vec![
                ("groceries", 60.00, 40.00, 20.00),
                ("dining", 15.00, 0.00, 15.00),
                ("transport", 0.00, 10.00, -10.00),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_percent_is_none_when_comparison_month_had_no_spending() -> Result<()> {
        let (service, transactions, _env) = setup_service()?;

        // March 2024 has no transactions at all
        let comparison = service.compare(
            MonthPeriod::new(2024, 6),
            MonthPeriod::new(2024, 3),
            &transactions,
        )?;

        assert_eq!(comparison.previous.total_expenses, 0.0);
        assert_eq!(comparison.spending_delta, 75.00);
        assert_eq!(comparison.spending_delta_percent, None);

        Ok(())
    }

    #[test]
    fn test_non_preceding_comparison_month_is_rejected() -> Result<()> {
        let (service, transactions, _env) = setup_service()?;

        for previous in [MonthPeriod::new(2024, 6), MonthPeriod::new(2024, 7)] {
            let err = service
                .compare(MonthPeriod::new(2024, 6), previous, &transactions)
                .unwrap_err();
            assert_eq!(
                err.downcast::<ComparisonRequestError>()?,
                ComparisonRequestError::NonPrecedingComparison {
                    current: MonthPeriod::new(2024, 6),
                    previous,
                }
            );
        }

        Ok(())
    }
}
