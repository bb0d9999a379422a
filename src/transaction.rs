//! Transaction models for input records and validated transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest accepted amount, in whole currency units (one trillion).
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Raw transaction record as read from CSV or JSON.
///
/// Every field is optional and `kind` stays textual so that missing or
/// malformed values survive loading and can be reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Identifier, must be positive
    pub id: Option<i64>,

    /// Free text, must not be blank
    pub description: Option<String>,

    /// Amount, from 0 to [`MAX_AMOUNT`]
    pub amount: Option<Decimal>,

    /// Transaction type: income or expense
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl TransactionRecord {
    /// Builds a complete record.
    pub fn new(id: i64, description: &str, amount: Decimal, kind: TxKind) -> Self {
        TransactionRecord {
            id: Some(id),
            description: Some(description.to_string()),
            amount: Some(amount),
            kind: Some(kind.as_str().to_string()),
        }
    }

    /// Parses the raw record into a validated transaction.
    ///
    /// Returns `None` if any field is missing or breaks its rule.
    pub fn parse(&self) -> Option<Transaction> {
        let id = self.id.filter(|id| *id > 0)?;
        let description = self
            .description
            .as_ref()
            .filter(|d| !d.trim().is_empty())?;
        let amount = self
            .amount
            .filter(|a| *a >= Decimal::ZERO && *a <= Decimal::from(MAX_AMOUNT))?;
        let kind = self.kind.as_deref()?.parse::<TxKind>().ok()?;

        Some(Transaction {
            id: u64::try_from(id).ok()?,
            description: description.clone(),
            amount,
            kind,
        })
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(tx: &Transaction) -> Self {
        TransactionRecord {
            id: i64::try_from(tx.id).ok(),
            description: Some(tx.description.clone()),
            amount: Some(tx.amount),
            kind: Some(tx.kind.as_str().to_string()),
        }
    }
}

/// A validated transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: u64,

    pub description: String,

    pub amount: Decimal,

    #[serde(rename = "type")]
    pub kind: TxKind,
}

/// Income/expense classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    /// Money received.
    Income,

    /// Money spent.
    Expense,
}

impl TxKind {
    pub const ALL: [TxKind; 2] = [TxKind::Income, TxKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl FromStr for TxKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "income" => Ok(TxKind::Income),
            "expense" => Ok(TxKind::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction type outside {income, expense}.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction type '{0}'")]
pub struct UnknownKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_record() -> TransactionRecord {
        TransactionRecord::new(1, "Salary", dec!(5000), TxKind::Income)
    }

    #[test]
    fn test_parse_income() {
        let tx = valid_record().parse().unwrap();
        assert_eq!(tx.id, 1);
        assert_eq!(tx.description, "Salary");
        assert_eq!(tx.amount, dec!(5000));
        assert_eq!(tx.kind, TxKind::Income);
    }

    #[test]
    fn test_parse_accepts_zero_amount() {
        let mut record = valid_record();
        record.amount = Some(dec!(0));
        assert!(record.parse().is_some());
    }

    #[test]
    fn test_parse_rejects_non_positive_id() {
        let mut record = valid_record();
        record.id = Some(-1);
        assert!(record.parse().is_none());

        record.id = Some(0);
        assert!(record.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_blank_description() {
        let mut record = valid_record();
        record.description = Some("   ".to_string());
        assert!(record.parse().is_none());

        record.description = None;
        assert!(record.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_negative_amount() {
        let mut record = valid_record();
        record.amount = Some(dec!(-0.01));
        assert!(record.parse().is_none());
    }

    #[test]
    fn test_parse_bounds_amount() {
        let mut record = valid_record();
        record.amount = Some(Decimal::from(MAX_AMOUNT));
        assert!(record.parse().is_some());

        record.amount = Some(Decimal::from(MAX_AMOUNT) + dec!(0.01));
        assert!(record.parse().is_none());

        record.amount = Some(Decimal::MAX);
        assert!(record.parse().is_none());
    }

    #[test]
    fn test_parse_rejects_missing_or_unknown_kind() {
        let mut record = valid_record();
        record.kind = None;
        assert!(record.parse().is_none());

        record.kind = Some("transfer".to_string());
        assert!(record.parse().is_none());

        record.kind = Some("Income".to_string());
        assert!(record.parse().is_none());
    }

    #[test]
    fn test_record_round_trips_through_transaction() {
        let record = valid_record();
        let tx = record.parse().unwrap();
        assert_eq!(TransactionRecord::from(&tx), record);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("expense".parse::<TxKind>(), Ok(TxKind::Expense));
        assert_eq!(
            "refund".parse::<TxKind>(),
            Err(UnknownKind("refund".to_string()))
        );
    }
}
