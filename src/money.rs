//! Monetary rounding helpers.
//!
//! Amounts are carried as `rust_decimal::Decimal` throughout, so sums and
//! differences are exact. Only the published summary figures are rounded.

use rust_decimal::Decimal;

/// Number of decimal places kept in summary figures.
pub const CENTS_SCALE: u32 = 2;

/// Rounds to two decimal places, half-up on the value scaled by 100.
///
/// Midpoints move towards positive infinity, so `2.345` becomes `2.35`
/// and `-2.345` becomes `-2.34`. Returns `None` if scaling overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use transaction_summary::money::round_cents;
///
/// let avg = Decimal::from_str("1166.666").unwrap();
/// assert_eq!(round_cents(avg).unwrap().to_string(), "1166.67");
/// ```
pub fn round_cents(value: Decimal) -> Option<Decimal> {
    let hundred = Decimal::ONE_HUNDRED;
    let half = Decimal::new(5, 1);
    let scaled = value.checked_mul(hundred)?.checked_add(half)?;
    let mut rounded = scaled.floor().checked_div(hundred)?;
    rounded.rescale(CENTS_SCALE);
    Some(rounded)
}
