//! Progressive slab tax.
//!
//! Each slab taxes only the slice of income that falls inside it; the
//! slices are summed and the total rounded once to whole rupees.

use rust_decimal::Decimal;

use crate::models::RateSlab;

use super::common::round_to_whole;

/// Computes gross tax on `income` across an ordered slab table.
///
/// For every slab whose lower bound is below `income`, the amount
/// `min(income, upper) - lower` is taxed at the slab rate. The sum is
/// rounded half-up to whole rupees.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::compute_slab_tax;
/// use tax_regime_engine::config::fy2024_25;
///
/// // 0 + 12,500 (250k-500k @ 5%) + 95,000 (500k-975k @ 20%)
/// let tax = compute_slab_tax(dec!(975000), &fy2024_25::old_regime_slabs());
/// assert_eq!(tax, dec!(107500));
/// ```
pub fn compute_slab_tax(income: Decimal, slabs: &[RateSlab]) -> Decimal {
    let tax: Decimal = slabs
        .iter()
        .map(|slab| slab.amount_within(income) * slab.rate)
        .sum();

    round_to_whole(tax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fy2024_25::{new_regime_slabs, old_regime_slabs};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_income_has_zero_tax() {
        assert_eq!(compute_slab_tax(Decimal::ZERO, &old_regime_slabs()), Decimal::ZERO);
        assert_eq!(compute_slab_tax(Decimal::ZERO, &new_regime_slabs()), Decimal::ZERO);
    }

    #[test]
    fn test_income_within_nil_slab_has_zero_tax() {
        assert_eq!(compute_slab_tax(dec("250000"), &old_regime_slabs()), Decimal::ZERO);
        assert_eq!(compute_slab_tax(dec("300000"), &new_regime_slabs()), Decimal::ZERO);
    }

    #[test]
    fn test_old_regime_at_slab_boundaries() {
        let slabs = old_regime_slabs();
        assert_eq!(compute_slab_tax(dec("500000"), &slabs), dec("12500"));
        assert_eq!(compute_slab_tax(dec("1000000"), &slabs), dec("112500"));
    }

    #[test]
    fn test_old_regime_top_slab() {
        // 12,500 + 100,000 + 30% of 500,000
        assert_eq!(compute_slab_tax(dec("1500000"), &old_regime_slabs()), dec("262500"));
    }

    #[test]
    fn test_new_regime_example_income() {
        // 15,000 + 30,000 + 33,750
        assert_eq!(compute_slab_tax(dec("1125000"), &new_regime_slabs()), dec("78750"));
    }

    #[test]
    fn test_new_regime_top_slab() {
        // 15,000 + 30,000 + 45,000 + 60,000 + 30% of 500,000
        assert_eq!(compute_slab_tax(dec("2000000"), &new_regime_slabs()), dec("300000"));
    }

    #[test]
    fn test_fractional_tax_rounds_half_up() {
        // 5% of 10 = 0.5 rounds to 1
        assert_eq!(compute_slab_tax(dec("250010"), &old_regime_slabs()), dec("1"));
        // 5% of 9 = 0.45 rounds to 0
        assert_eq!(compute_slab_tax(dec("250009"), &old_regime_slabs()), Decimal::ZERO);
    }

    #[test]
    fn test_empty_table_yields_zero() {
        assert_eq!(compute_slab_tax(dec("1000000"), &[]), Decimal::ZERO);
    }
}
