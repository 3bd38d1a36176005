//! Section 87A rebate.
//!
//! Taxpayers at or below the regime's threshold get their tax reduced by up
//! to the rebate cap. One rupee above the threshold the rebate disappears
//! completely; there is no marginal relief.

use rust_decimal::Decimal;

use crate::config::{RebateRule, fy2024_25};
use crate::models::Regime;

/// Applies a rebate rule.
///
/// Returns `min(tax_before_rebate, cap)` when `taxable_income` is at or
/// below the threshold, zero otherwise.
pub fn apply_rebate_rule(
    taxable_income: Decimal,
    tax_before_rebate: Decimal,
    rule: &RebateRule,
) -> Decimal {
    if taxable_income <= rule.threshold {
        tax_before_rebate.min(rule.cap)
    } else {
        Decimal::ZERO
    }
}

/// Computes the FY 2024-25 rebate for a regime.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::compute_rebate;
/// use tax_regime_engine::models::Regime;
///
/// assert_eq!(compute_rebate(dec!(500000), dec!(12500), Regime::Old), dec!(12500));
/// assert_eq!(compute_rebate(dec!(500001), dec!(12500), Regime::Old), dec!(0));
/// assert_eq!(compute_rebate(dec!(700000), dec!(20000), Regime::New), dec!(20000));
/// ```
pub fn compute_rebate(taxable_income: Decimal, tax_before_rebate: Decimal, regime: Regime) -> Decimal {
    apply_rebate_rule(
        taxable_income,
        tax_before_rebate,
        &fy2024_25::rebate_rule(regime),
    )
}
