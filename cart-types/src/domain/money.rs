//! Monetary rounding for derived cart amounts.
//!
//! Accumulated product totals are kept unrounded; rounding is applied once,
//! when tax and total are derived. Doing the multiplication in decimal
//! arithmetic first matters: binary floats cannot represent values like
//! 0.125 or 2.52 exactly, and rounding their approximations can flip the
//! resulting cent.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimal places, half-up.
///
/// Cart amounts are never negative, so `MidpointAwayFromZero` is exactly
/// half-up here.
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
