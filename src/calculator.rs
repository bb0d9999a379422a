//! Aggregations over a batch of validated transactions.
//!
//! Every function is pure: it borrows the batch and never mutates it.
//! Monetary results are `None` when a sum leaves the `Decimal` range.

use crate::transaction::{Transaction, TxKind};
use rust_decimal::Decimal;

/// Sum of amounts for transactions of the given kind.
pub fn total_by_kind(batch: &[Transaction], kind: TxKind) -> Option<Decimal> {
    of_kind(batch, kind).try_fold(Decimal::ZERO, |total, tx| total.checked_add(tx.amount))
}

pub fn total_income(batch: &[Transaction]) -> Option<Decimal> {
    total_by_kind(batch, TxKind::Income)
}

pub fn total_expense(batch: &[Transaction]) -> Option<Decimal> {
    total_by_kind(batch, TxKind::Expense)
}

/// Income total minus expense total, unrounded.
pub fn balance(batch: &[Transaction]) -> Option<Decimal> {
    total_income(batch)?.checked_sub(total_expense(batch)?)
}

pub fn count(batch: &[Transaction]) -> usize {
    batch.len()
}

pub fn count_by_kind(batch: &[Transaction], kind: TxKind) -> usize {
    of_kind(batch, kind).count()
}

/// Mean amount for the given kind, or exactly zero when there is none.
pub fn average_by_kind(batch: &[Transaction], kind: TxKind) -> Option<Decimal> {
    let n = count_by_kind(batch, kind);
    if n == 0 {
        return Some(Decimal::ZERO);
    }
    total_by_kind(batch, kind)?.checked_div(Decimal::from(n))
}

/// Transactions with `amount >= threshold`, in batch order.
pub fn filter_above_threshold(batch: &[Transaction], threshold: Decimal) -> Vec<Transaction> {
    batch
        .iter()
        .filter(|tx| tx.amount >= threshold)
        .cloned()
        .collect()
}

fn of_kind(batch: &[Transaction], kind: TxKind) -> impl Iterator<Item = &Transaction> {
    batch.iter().filter(move |tx| tx.kind == kind)
}
