//! Plain-text rendering of a [`Summary`].

use crate::processor::Summary;
use std::fmt;

const RULE_WIDTH: usize = 50;

/// Renders a summary as a human-readable report.
pub fn render(summary: &Summary) -> String {
    Report(summary).to_string()
}

/// Display adapter producing the text report.
pub struct Report<'a>(pub &'a Summary);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:^width$}", "TRANSACTION SUMMARY", width = RULE_WIDTH)?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        writeln!(f, "Total transactions: {}", summary.transaction_count)?;
        writeln!(f, "Balance: ${}", summary.balance)?;
        writeln!(f)?;

        writeln!(f, "AVERAGES:")?;
        writeln!(f, "   - Average income: ${}", summary.average_income)?;
        writeln!(f, "   - Average expense: ${}", summary.average_expense)?;
        writeln!(f)?;

        writeln!(f, "LARGE TRANSACTIONS (>= ${}):", summary.threshold_used)?;
        writeln!(f, "   - Count: {}", summary.large_transaction_count)?;
        if summary.large_transactions.is_empty() {
            writeln!(f, "   - No transactions reach the threshold")?;
        } else {
            writeln!(f, "   - Details:")?;
            for (n, tx) in summary.large_transactions.iter().enumerate() {
                writeln!(
                    f,
                    "     {}. {}: ${} ({})",
                    n + 1,
                    tx.description,
                    tx.amount,
                    tx.kind
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "Processed at: {}",
            summary.processed_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "{}", rule)
    }
}
