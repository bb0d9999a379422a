//! Error types for validation and the command-line front end.

use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a sequence, or it is empty.
    Shape,
    /// One or more records break the transaction invariant.
    Record,
    /// The threshold is not a non-negative number.
    Threshold,
    /// Totals fall outside the decimal range.
    Overflow,
}

/// Reasons a batch or threshold is rejected by the processor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Top-level input is not a sequence of records
    #[error("invalid data: input must be a sequence")]
    NotASequence,

    /// The batch has no records
    #[error("invalid data: batch must not be empty")]
    EmptyBatch,

    /// Records at the given 0-based positions are invalid
    #[error("invalid data: {}", .0.messages().join(", "))]
    InvalidRecords(InvalidRecords),

    /// Threshold is negative or not a number
    #[error("threshold must be a number greater than or equal to 0")]
    InvalidThreshold,

    /// A total or rounded figure does not fit in a decimal
    #[error("invalid data: totals exceed the supported numeric range")]
    Overflow,
}

/// Positions of every record that failed validation, in batch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRecords {
    pub indices: Vec<usize>,
}

impl InvalidRecords {
    /// One human-readable message per offending record.
    pub fn messages(&self) -> Vec<String> {
        self.indices
            .iter()
            .map(|i| format!("transaction at index {} is invalid", i))
            .collect()
    }
}

impl From<InvalidRecords> for ValidationError {
    fn from(records: InvalidRecords) -> Self {
        ValidationError::InvalidRecords(records)
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::NotASequence | ValidationError::EmptyBatch => ErrorKind::Shape,
            ValidationError::InvalidRecords(_) => ErrorKind::Record,
            ValidationError::InvalidThreshold => ErrorKind::Threshold,
            ValidationError::Overflow => ErrorKind::Overflow,
        }
    }

    /// Offending record positions; empty for shape and threshold errors.
    pub fn indices(&self) -> &[usize] {
        match self {
            ValidationError::InvalidRecords(records) => &records.indices,
            _ => &[],
        }
    }

    /// The individual error strings, without the `invalid data:` prefix.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ValidationError::NotASequence => vec!["input must be a sequence".to_string()],
            ValidationError::EmptyBatch => vec!["batch must not be empty".to_string()],
            ValidationError::InvalidRecords(records) => records.messages(),
            ValidationError::InvalidThreshold => vec![self.to_string()],
            ValidationError::Overflow => {
                vec!["totals exceed the supported numeric range".to_string()]
            }
        }
    }
}

/// Errors that can occur while loading input or running the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Batch or threshold rejected by validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unreadable CSV row
    #[error("Invalid transaction at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    /// Flag given without its value
    #[error("Missing value for {0}. Run with --help for usage")]
    MissingArgument(String),

    /// Unrecognized flag
    #[error("Unknown argument '{0}'. Run with --help for usage")]
    UnknownArgument(String),

    /// Input file or output format the tool cannot handle
    #[error("Unsupported format '{0}': expected csv or json input, text or json output")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_error_joins_messages() {
        let err = ValidationError::from(InvalidRecords {
            indices: vec![1, 3],
        });
        assert_eq!(
            err.to_string(),
            "invalid data: transaction at index 1 is invalid, transaction at index 3 is invalid"
        );
        assert_eq!(err.kind(), ErrorKind::Record);
        assert_eq!(err.indices(), &[1, 3]);
    }

    #[test]
    fn test_shape_errors() {
        assert_eq!(ValidationError::EmptyBatch.kind(), ErrorKind::Shape);
        assert_eq!(ValidationError::NotASequence.kind(), ErrorKind::Shape);
        assert!(ValidationError::EmptyBatch.to_string().contains("empty"));
        assert!(ValidationError::NotASequence.indices().is_empty());
    }

    #[test]
    fn test_threshold_error_is_distinct() {
        let err = ValidationError::InvalidThreshold;
        assert_eq!(err.kind(), ErrorKind::Threshold);
        assert!(!err.to_string().starts_with("invalid data"));
    }

    #[test]
    fn test_overflow_error() {
        let err = ValidationError::Overflow;
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert!(err.indices().is_empty());
        assert_eq!(err.messages(), vec!["totals exceed the supported numeric range"]);
    }
}
