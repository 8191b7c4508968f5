//! Rounding and division policy for all KPI arithmetic.
//!
//! All aggregation uses `rust_decimal::Decimal`; no `f64` anywhere in the
//! computation path. Rounding is `MidpointAwayFromZero` (round half up),
//! matching the presentation contract. Division by zero yields zero, never
//! an error or NaN.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest integer, halves away from zero.
pub fn round_to_i64(value: Decimal) -> i64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Round to `dp` decimal places, halves away from zero.
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Total division: `numerator / denominator`, or zero when the denominator
/// is zero.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}
