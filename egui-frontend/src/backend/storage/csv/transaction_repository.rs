use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use csv::Reader;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::backend::domain::models::transaction::Transaction;
use crate::backend::storage::traits::TransactionStorage;

/// CSV-based transaction repository
#[derive(Clone)]
pub struct TransactionRepository {
    connection: CsvConnection,
}

impl TransactionRepository {
    /// Create a new CSV transaction repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the whole ledger, sorted by date ascending.
    ///
    /// A row that fails to parse aborts the read with the row number
    /// attached; rows are never silently dropped.
    fn read_all(&self) -> Result<Vec<Transaction>> {
        self.connection.ensure_transactions_file_exists()?;
        let file_path = self.connection.transactions_file_path();

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut transactions = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Row numbering is 1-based and counts the header line
            let transaction = Self::parse_record(&record)
                .with_context(|| format!("ledger row {} of {}", row + 2, file_path.display()))?;
            transactions.push(transaction);
        }

        transactions.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(transactions)
    }

    fn parse_record(record: &csv::StringRecord) -> Result<Transaction> {
        let field = |index: usize, name: &str| -> Result<&str> {
            record
                .get(index)
                .ok_or_else(|| anyhow!("missing '{}' column", name))
        };

        let date_str = field(1, "date")?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}'", date_str))?;

        let amount_str = field(4, "amount")?;
        let amount: f64 = amount_str
            .parse()
            .with_context(|| format!("invalid amount '{}'", amount_str))?;

        Ok(Transaction {
            id: field(0, "id")?.to_string(),
            date,
            description: field(2, "description")?.to_string(),
            category: field(3, "category")?.to_string(),
            amount,
        })
    }
}

impl TransactionStorage for TransactionRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        self.read_all()
    }

    fn append_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.connection.ensure_transactions_file_exists()?;
        let file_path = self.connection.transactions_file_path();

        let file = OpenOptions::new().append(true).open(&file_path)?;
        let writer = BufWriter::new(file);
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for transaction in transactions {
            csv_writer.write_record(&[
                transaction.id.clone(),
                transaction.date.format("%Y-%m-%d").to_string(),
                transaction.description.clone(),
                transaction.category.clone(),
                format!("{:.2}", transaction.amount),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
