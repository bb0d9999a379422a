//! # Transaction Summary
//!
//! Validates batches of income/expense transactions and computes summary
//! figures: balance, per-kind averages and the transactions at or above a
//! threshold.
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: amounts are `rust_decimal` values; only the published
//!   balance and averages are rounded, half-up to 2 decimal places
//! - **Fail fast**: a batch is fully validated before anything is aggregated,
//!   and every invalid record position is reported at once
//! - **Stateless**: every call works only on its arguments
//!
//! ## Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use transaction_summary::{process, TransactionRecord, TxKind};
//!
//! let batch = vec![
//!     TransactionRecord::new(1, "Salary", Decimal::from(5000), TxKind::Income),
//!     TransactionRecord::new(2, "Rent", Decimal::from(1500), TxKind::Expense),
//! ];
//! let summary = process(&batch, None).unwrap();
//! assert_eq!(summary.balance, Decimal::from(3500));
//! assert_eq!(summary.large_transaction_count, 2);
//! ```

pub mod calculator;
pub mod cli;
pub mod error;
pub mod input;
pub mod money;
pub mod processor;
pub mod report;
pub mod sample;
pub mod transaction;
pub mod validator;

pub use error::{Error, ErrorKind, InvalidRecords, Result, ValidationError};
pub use input::Batch;
pub use processor::{process, process_json, Summary, DEFAULT_THRESHOLD};
pub use report::render;
pub use transaction::{Transaction, TransactionRecord, TxKind};
pub use validator::{is_valid_threshold, is_valid_transaction, validate_batch, ValidationResult};
