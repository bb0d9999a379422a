//! Validation-then-aggregation pipeline.
//!
//! A call either returns a complete [`Summary`] or fails with the first
//! [`ValidationError`] it meets: batch problems are reported before threshold
//! problems, and nothing is aggregated once validation fails.

use crate::calculator;
use crate::error::ValidationError;
use crate::money::round_cents;
use crate::transaction::{Transaction, TransactionRecord, TxKind};
use crate::validator;
use chrono::{DateTime, Utc};
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_THRESHOLD: Decimal = Decimal::ONE_THOUSAND;

/// Summary figures for one processed batch.
///
/// Monetary figures are rounded to two decimal places. Serializes with
/// camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Income total minus expense total.
    pub balance: Decimal,

    pub transaction_count: usize,

    pub average_income: Decimal,

    pub average_expense: Decimal,

    /// Transactions with `amount >= threshold_used`, in batch order.
    pub large_transactions: Vec<Transaction>,

    pub large_transaction_count: usize,

    pub threshold_used: Decimal,

    pub processed_at: DateTime<Utc>,
}

/// Validates a batch and computes its summary.
///
/// `threshold` defaults to [`DEFAULT_THRESHOLD`].
pub fn process(
    batch: &[TransactionRecord],
    threshold: Option<Decimal>,
) -> Result<Summary, ValidationError> {
    debug!("Validating batch of {} records", batch.len());
    let transactions = validator::parse_batch(batch)?;
    summarize(&transactions, threshold)
}

/// Same as [`process`] for a JSON value that should be an array of records.
pub fn process_json(value: &Value, threshold: Option<Decimal>) -> Result<Summary, ValidationError> {
    debug!("Validating JSON batch");
    let transactions = validator::parse_json_batch(value)?;
    summarize(&transactions, threshold)
}

fn summarize(
    transactions: &[Transaction],
    threshold: Option<Decimal>,
) -> Result<Summary, ValidationError> {
    let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
    if !validator::is_valid_threshold(threshold) {
        return Err(ValidationError::InvalidThreshold);
    }

    let balance = calculator::balance(transactions).ok_or(ValidationError::Overflow)?;
    let transaction_count = calculator::count(transactions);
    let average_income = calculator::average_by_kind(transactions, TxKind::Income)
        .ok_or(ValidationError::Overflow)?;
    let average_expense = calculator::average_by_kind(transactions, TxKind::Expense)
        .ok_or(ValidationError::Overflow)?;
    let large_transactions = calculator::filter_above_threshold(transactions, threshold);

    debug!(
        "Processed {} transactions, balance {}, {} at or above {}",
        transaction_count,
        balance,
        large_transactions.len(),
        threshold
    );

    Ok(Summary {
        balance: rounded(balance)?,
        transaction_count,
        average_income: rounded(average_income)?,
        average_expense: rounded(average_expense)?,
        large_transaction_count: large_transactions.len(),
        large_transactions,
        threshold_used: threshold,
        processed_at: Utc::now(),
    })
}

fn rounded(value: Decimal) -> Result<Decimal, ValidationError> {
    round_cents(value).ok_or(ValidationError::Overflow)
}
