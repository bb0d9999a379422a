//! Batch and threshold validation.
//!
//! `parse_batch` and `parse_json_batch` do the work; the `validate_*`
//! functions report the same outcome as a [`ValidationResult`].

use crate::error::{InvalidRecords, ValidationError};
use crate::transaction::{Transaction, TransactionRecord};
use log::warn;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

/// Outcome of validating a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,

    /// Error messages in batch order.
    pub errors: Vec<String>,

    /// 0-based positions of invalid records.
    pub invalid_indices: Vec<usize>,
}

impl ValidationResult {
    fn ok() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
            invalid_indices: Vec::new(),
        }
    }
}

impl From<ValidationError> for ValidationResult {
    fn from(err: ValidationError) -> Self {
        ValidationResult {
            valid: false,
            errors: err.messages(),
            invalid_indices: err.indices().to_vec(),
        }
    }
}

impl<T> From<&Result<T, ValidationError>> for ValidationResult {
    fn from(result: &Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => ValidationResult::ok(),
            Err(e) => e.clone().into(),
        }
    }
}

/// Returns `true` if the record satisfies every transaction rule.
pub fn is_valid_transaction(record: &TransactionRecord) -> bool {
    record.parse().is_some()
}

/// Returns `true` if the JSON value is an object describing a valid transaction.
///
/// `null`, arrays, scalars and objects whose fields have the wrong JSON types
/// are all invalid.
pub fn is_valid_json_transaction(value: &Value) -> bool {
    parse_json_record(value).and_then(|r| r.parse()).is_some()
}

/// Validates every record of a batch.
pub fn validate_batch(records: &[TransactionRecord]) -> ValidationResult {
    ValidationResult::from(&parse_batch(records))
}

/// Validates a JSON value that should hold an array of transaction objects.
pub fn validate_json_batch(value: &Value) -> ValidationResult {
    ValidationResult::from(&parse_json_batch(value))
}

/// Returns `true` for thresholds greater than or equal to zero.
pub fn is_valid_threshold(value: Decimal) -> bool {
    value >= Decimal::ZERO
}

/// Parses a textual threshold.
///
/// Fails with [`ValidationError::InvalidThreshold`] only if the text is not
/// a number. The sign is checked by the processor, after the batch.
pub fn parse_threshold(text: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(text.trim()).map_err(|_| ValidationError::InvalidThreshold)
}

/// Parses a batch into transactions, collecting every invalid position.
///
/// An empty batch fails before any record is inspected.
pub fn parse_batch(records: &[TransactionRecord]) -> Result<Vec<Transaction>, ValidationError> {
    if records.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    collect_valid(records.iter().map(TransactionRecord::parse))
}

/// Parses a JSON array into transactions, collecting every invalid position.
pub fn parse_json_batch(value: &Value) -> Result<Vec<Transaction>, ValidationError> {
    let items = value.as_array().ok_or(ValidationError::NotASequence)?;
    if items.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }
    collect_valid(
        items
            .iter()
            .map(|item| parse_json_record(item).and_then(|r| r.parse())),
    )
}

fn parse_json_record(value: &Value) -> Option<TransactionRecord> {
    if !value.is_object() {
        return None;
    }
    // Decimal also deserializes from strings; JSON amounts must be numbers.
    if value.get("amount").is_some_and(|amount| !amount.is_number()) {
        return None;
    }
    TransactionRecord::deserialize(value).ok()
}

fn collect_valid<I>(parsed: I) -> Result<Vec<Transaction>, ValidationError>
where
    I: Iterator<Item = Option<Transaction>>,
{
    let mut transactions = Vec::new();
    let mut indices = Vec::new();

    for (index, tx) in parsed.enumerate() {
        match tx {
            Some(tx) => transactions.push(tx),
            None => {
                warn!("Transaction at index {} is invalid", index);
                indices.push(index);
            }
        }
    }

    if indices.is_empty() {
        Ok(transactions)
    } else {
        Err(InvalidRecords { indices }.into())
    }
}
