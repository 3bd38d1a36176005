//! Per-regime tax results and the side-by-side comparison.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// The itemized tax computation for one regime.
///
/// Invariants: `tax_after_rebate = max(0, tax_before_rebate - rebate_amount)`
/// and `total_tax = tax_after_rebate + surcharge + cess`. Every amount is
/// non-negative, and every tax amount is a whole number of rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross salary plus other income.
    pub total_income: Decimal,
    /// Sum of the deductions allowed under this regime.
    pub total_deductions: Decimal,
    /// Income left after deductions, never below zero.
    pub taxable_income: Decimal,
    /// Slab tax on the taxable income.
    pub tax_before_rebate: Decimal,
    /// Section 87A rebate granted.
    pub rebate_amount: Decimal,
    /// Slab tax less the rebate.
    pub tax_after_rebate: Decimal,
    /// High-income surcharge on the post-rebate tax.
    pub surcharge: Decimal,
    /// Health and education cess on tax plus surcharge.
    pub cess: Decimal,
    /// Final liability.
    pub total_tax: Decimal,
    /// The regime this result was computed under.
    pub regime: Regime,
}

/// Both regimes side by side with a recommendation.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::compare_regimes;
/// use tax_regime_engine::models::{Regime, TaxInputs};
///
/// let inputs = TaxInputs {
///     gross_salary: dec!(1200000),
///     basic_salary: dec!(600000),
///     section_80c: dec!(150000),
///     section_80d: dec!(25000),
///     ..TaxInputs::default()
/// };
///
/// let comparison = compare_regimes(&inputs);
/// assert_eq!(comparison.old_regime.total_tax, dec!(111800));
/// assert_eq!(comparison.new_regime.total_tax, dec!(81900));
/// assert_eq!(comparison.recommended_regime, Regime::New);
/// assert_eq!(comparison.savings, dec!(29900));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparison {
    /// Result under the old regime.
    pub old_regime: TaxResult,
    /// Result under the new regime.
    pub new_regime: TaxResult,
    /// Absolute difference between the two total liabilities.
    pub savings: Decimal,
    /// The regime with the lower liability; ties go to the old regime.
    pub recommended_regime: Regime,
}

impl TaxComparison {
    /// Returns the result for the given regime.
    pub fn result_for(&self, regime: Regime) -> &TaxResult {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }

    /// Returns the result for the recommended regime.
    pub fn recommended(&self) -> &TaxResult {
        self.result_for(self.recommended_regime)
    }
}
