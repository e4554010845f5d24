//! Exact-decimal money utilities.
//!
//! Every monetary value in the workspace is a [`rust_decimal::Decimal`];
//! binary floating point drifts at cent precision and is never used for
//! money. Two midpoint conventions are in play in the charge pipeline:
//! pre-discount charges round half-up, discount amounts round half-down.

use rust_decimal::{Decimal, RoundingStrategy};

/// Midpoint rounding convention for monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round to nearest; a tie rounds away from zero.
    HalfUp,
    /// Round to nearest; a tie rounds towards zero.
    HalfDown,
}

impl Rounding {
    fn strategy(self) -> RoundingStrategy {
        match self {
            Rounding::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Rounding::HalfDown => RoundingStrategy::MidpointTowardZero,
        }
    }
}

/// Round `value` to `dp` decimal places using the given convention.
pub fn round(value: Decimal, dp: u32, convention: Rounding) -> Decimal {
    value.round_dp_with_strategy(dp, convention.strategy())
}

/// Format a monetary amount as an en-US currency string, e.g. `$1,234.50`.
///
/// The amount is rounded half-up to cents first; grouping commas are
/// inserted every three integer digits and exactly two decimals are shown.
pub fn format_usd(amount: Decimal) -> String {
    let cents = round(amount, 2, Rounding::HalfUp);
    let text = cents.abs().to_string();
    let (whole, frac) = match text.split_once('.') {
        Some((w, f)) => (w, f),
        None => (text.as_str(), ""),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut fraction = String::from(frac);
    while fraction.len() < 2 {
        fraction.push('0');
    }

    let sign = if cents.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{fraction}")
}
