//! High-income surcharge.
//!
//! The surcharge is a levy on the post-rebate tax, not on income. The band
//! is picked by taxable income and its rate applies to the whole tax, so
//! crossing a band boundary raises the surcharge in a single jump. No
//! marginal relief is applied.

use rust_decimal::Decimal;

use crate::config::{SurchargeRule, fy2024_25};
use crate::models::{RateSlab, Regime};

use super::common::round_to_whole;

/// Returns the surcharge band that applies to `taxable_income`, if any.
pub fn surcharge_slab(taxable_income: Decimal, rule: &SurchargeRule) -> Option<&RateSlab> {
    if taxable_income <= rule.exempt_up_to {
        return None;
    }
    rule.slabs.iter().find(|slab| slab.brackets(taxable_income))
}

/// Applies a surcharge rule to the post-rebate tax.
pub fn apply_surcharge_rule(
    taxable_income: Decimal,
    tax_after_rebate: Decimal,
    rule: &SurchargeRule,
) -> Decimal {
    match surcharge_slab(taxable_income, rule) {
        Some(slab) => round_to_whole(tax_after_rebate * slab.rate),
        None => Decimal::ZERO,
    }
}

/// Computes the FY 2024-25 surcharge for a regime.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::compute_surcharge;
/// use tax_regime_engine::models::Regime;
///
/// assert_eq!(compute_surcharge(dec!(5000000), dec!(1312500), Regime::Old), dec!(0));
/// assert_eq!(compute_surcharge(dec!(6000000), dec!(1612500), Regime::Old), dec!(161250));
/// assert_eq!(compute_surcharge(dec!(60000000), dec!(17700000), Regime::New), dec!(2655000));
/// ```
pub fn compute_surcharge(taxable_income: Decimal, tax_after_rebate: Decimal, regime: Regime) -> Decimal {
    let config = fy2024_25::builtin().regime(regime);
    apply_surcharge_rule(taxable_income, tax_after_rebate, &config.surcharge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_no_surcharge_at_exemption_limit() {
        assert_eq!(compute_surcharge(dec("5000000"), dec("1312500"), Regime::Old), Decimal::ZERO);
        assert_eq!(compute_surcharge(dec("5000000"), dec("1200000"), Regime::New), Decimal::ZERO);
    }

    #[test]
    fn test_surcharge_jumps_just_above_limit() {
        // No marginal relief: the full 10% applies one rupee over 50 lakh.
        let surcharge = compute_surcharge(dec("5000001"), dec("1312500"), Regime::Old);
        assert_eq!(surcharge, dec("131250"));
    }

    #[test]
    fn test_old_regime_escalating_bands() {
        let tax = dec("1000000");
        assert_eq!(compute_surcharge(dec("10000000"), tax, Regime::Old), dec("100000"));
        assert_eq!(compute_surcharge(dec("10000001"), tax, Regime::Old), dec("150000"));
        assert_eq!(compute_surcharge(dec("20000001"), tax, Regime::Old), dec("250000"));
        assert_eq!(compute_surcharge(dec("50000001"), tax, Regime::Old), dec("370000"));
    }

    #[test]
    fn test_new_regime_stays_at_fifteen_percent() {
        let tax = dec("1000000");
        assert_eq!(compute_surcharge(dec("6000000"), tax, Regime::New), dec("150000"));
        assert_eq!(compute_surcharge(dec("25000000"), tax, Regime::New), dec("150000"));
        assert_eq!(compute_surcharge(dec("600000000"), tax, Regime::New), dec("150000"));
    }

    #[test]
    fn test_surcharge_rounds_half_up() {
        // 10% of 1,234,565 = 123,456.5
        assert_eq!(compute_surcharge(dec("6000000"), dec("1234565"), Regime::Old), dec("123457"));
    }

    #[test]
    fn test_surcharge_slab_lookup() {
        let config = fy2024_25::old_regime();
        assert!(surcharge_slab(dec("4000000"), &config.surcharge).is_none());
        let slab = surcharge_slab(dec("15000000"), &config.surcharge).unwrap();
        assert_eq!(slab.rate, dec("0.15"));
    }
}
