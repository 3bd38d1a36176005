//! Shared arithmetic helpers for the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the nearest whole rupee, halves rounding up.
///
/// The engine only rounds non-negative amounts, where away-from-zero and
/// half-up agree.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::round_to_whole;
///
/// assert_eq!(round_to_whole(dec!(3149.5)), dec!(3150));
/// assert_eq!(round_to_whole(dec!(3149.49)), dec!(3149));
/// ```
pub fn round_to_whole(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Clamps a value to zero from below.
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_to_whole_rounds_half_up() {
        assert_eq!(round_to_whole(dec("12.5")), dec("13"));
        assert_eq!(round_to_whole(dec("12.4999")), dec("12"));
        assert_eq!(round_to_whole(dec("12.51")), dec("13"));
    }

    #[test]
    fn test_round_to_whole_drops_scale() {
        let rounded = round_to_whole(dec("107500.00"));
        assert_eq!(rounded.to_string(), "107500");
    }

    #[test]
    fn test_round_to_whole_zero() {
        assert_eq!(round_to_whole(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(non_negative(dec("-10")), Decimal::ZERO);
        assert_eq!(non_negative(dec("10")), dec("10"));
    }
}
