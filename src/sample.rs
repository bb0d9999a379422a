//! Built-in sample batches for demos and tests.

use crate::transaction::{TransactionRecord, TxKind};
use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

const RANDOM_DESCRIPTIONS: [&str; 10] = [
    "Salary",
    "Freelance",
    "Sale",
    "Bonus",
    "Rent",
    "Groceries",
    "Transport",
    "Utilities",
    "Entertainment",
    "Shopping",
];

/// Generated amounts fall in `[MIN_RANDOM_AMOUNT, MAX_RANDOM_AMOUNT)`.
const MIN_RANDOM_AMOUNT: i64 = 100;
const MAX_RANDOM_AMOUNT: i64 = 5100;

/// Four incomes and six expenses; balance 3750.
pub fn sample_transactions() -> Vec<TransactionRecord> {
    use TxKind::{Expense, Income};

    [
        (1, "Monthly salary", 5000, Income),
        (2, "Freelance work", 2000, Income),
        (3, "Sale of used items", 300, Income),
        (4, "Performance bonus", 1500, Income),
        (5, "Rent", 1500, Expense),
        (6, "Groceries", 300, Expense),
        (7, "Utilities", 200, Expense),
        (8, "Transport", 150, Expense),
        (9, "Entertainment", 400, Expense),
        (10, "Laptop purchase", 2500, Expense),
    ]
    .into_iter()
    .map(|(id, description, amount, kind)| {
        TransactionRecord::new(id, description, Decimal::from(amount), kind)
    })
    .collect()
}

/// One valid record followed by three invalid ones (indices 1, 2 and 3).
pub fn problematic_transactions() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new(1, "Valid transaction", Decimal::from(1000), TxKind::Income),
        TransactionRecord::new(2, "", Decimal::from(500), TxKind::Expense),
        TransactionRecord::new(-1, "Transaction with negative id", Decimal::from(200), TxKind::Income),
        TransactionRecord {
            id: Some(3),
            description: Some("Transaction without type".to_string()),
            amount: Some(Decimal::from(300)),
            kind: None,
        },
    ]
}

/// Generates `count` valid records with ids `1..=count`.
pub fn random_transactions<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<TransactionRecord> {
    (1..=count)
        .map(|n| {
            let id = i64::try_from(n).unwrap_or(i64::MAX);
            let kind = *TxKind::ALL.choose(rng).unwrap_or(&TxKind::Income);
            let word = RANDOM_DESCRIPTIONS.choose(rng).unwrap_or(&"Transaction");
            let amount = rng.gen_range(MIN_RANDOM_AMOUNT..MAX_RANDOM_AMOUNT);

            TransactionRecord::new(id, &format!("{} {}", word, n), Decimal::from(amount), kind)
        })
        .collect()
}
