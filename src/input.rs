//! Loading batches from CSV and JSON files.

use crate::error::{Error, Result, ValidationError};
use crate::processor::{self, Summary};
use crate::transaction::TransactionRecord;
use csv::{ReaderBuilder, Trim};
use log::debug;
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A batch as loaded from its source, not yet validated.
#[derive(Debug, Clone)]
pub enum Batch {
    /// Rows of a CSV file with header `id,description,amount,type`.
    Records(Vec<TransactionRecord>),

    /// Any JSON document; only an array of objects is a valid batch.
    Json(Value),
}

impl Batch {
    /// Loads a batch, choosing the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let reader = BufReader::new(File::open(path)?);
        match extension.as_str() {
            "csv" => Ok(Batch::Records(read_csv(reader)?)),
            "json" => Ok(Batch::Json(read_json(reader)?)),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    /// Validates and summarizes the batch.
    pub fn process(&self, threshold: Option<Decimal>) -> std::result::Result<Summary, ValidationError> {
        match self {
            Batch::Records(records) => processor::process(records, threshold),
            Batch::Json(value) => processor::process_json(value, threshold),
        }
    }
}

/// Reads every CSV row into a record.
///
/// Empty cells become missing fields and are left for validation to reject.
/// A cell of the wrong type (for example a non-numeric amount) fails the
/// whole read with the offending row number.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<TransactionRecord>().enumerate() {
        let row = row_idx + 2; // 1-indexed, accounting for header row
        let record = result.map_err(|e| Error::InvalidRecord {
            row,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    debug!("Read {} CSV records", records.len());
    Ok(records)
}

/// Reads a JSON document without assuming its shape.
pub fn read_json<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}
