//! Price formatting.
//!
//! Prices are shown the way a browser's default number locale shows them:
//! at most three fraction digits, trailing zeros dropped, thousands grouped
//! with commas.

use rust_decimal::{Decimal, RoundingStrategy};

const MAX_FRACTION_DIGITS: u32 = 3;

/// Format a dollar amount, e.g. `10000` becomes `"$10,000"`.
pub fn format_usd(amount: Decimal) -> String {
    format!("${}", group_thousands(amount))
}

/// Render `amount` with comma-grouped thousands and no trailing zeros.
pub fn group_thousands(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(digits.len() + integer.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
