//! Canonical display formatting for currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Cell content for the unused side of a posting row.
pub const ZERO_CELL: &str = "0";

/// Formats a currency amount for the grid: round half away from zero to two
/// decimal places, then render with no decimals when the fraction is zero and
/// with exactly two otherwise.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.fract().is_zero() {
        rounded.trunc().to_string()
    } else {
        format!("{rounded:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn whole_amounts_drop_decimals() {
        assert_eq!(format_amount(dec!(10.00)), "10");
        assert_eq!(format_amount(dec!(200) * dec!(0.05)), "10");
        assert_eq!(format_amount(dec!(0)), "0");
    }

    #[test]
    fn fractional_amounts_keep_two_places() {
        assert_eq!(format_amount(dec!(3.1)), "3.10");
        assert_eq!(format_amount(dec!(12.345)), "12.35");
    }

    #[test]
    fn midpoints_round_away_from_zero() {
        assert_eq!(format_amount(dec!(10.005)), "10.01");
        assert_eq!(format_amount(dec!(-10.005)), "-10.01");
    }

    #[test]
    fn near_integer_values_render_clean() {
        assert_eq!(format_amount(dec!(9.999999999998)), "10");
    }
}
