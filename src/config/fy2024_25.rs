//! Built-in rules for FY 2024-25 (AY 2025-26).
//!
//! These are the same rules shipped in `config/fy2024-25/`; the engine uses
//! them when no configuration directory is supplied. A new fiscal year gets
//! its own module and directory; the pipeline itself does not change.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{RateSlab, Regime};

use super::types::{
    DeductionScheme, ExemptAllowanceCaps, FiscalYearConfig, FiscalYearMetadata,
    ItemizedDeductionCaps, RebateRule, RegimeConfig, SurchargeRule,
};

/// Health and education cess.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Old regime standard deduction.
pub const OLD_STANDARD_DEDUCTION: Decimal = dec!(50000);
/// New regime standard deduction.
pub const NEW_STANDARD_DEDUCTION: Decimal = dec!(75000);

/// Section 80C cap.
pub const SECTION_80C_CAP: Decimal = dec!(150000);
/// Section 80D cap.
pub const SECTION_80D_CAP: Decimal = dec!(50000);
/// Section 80CCD(1B) cap.
pub const SECTION_80CCD_1B_CAP: Decimal = dec!(50000);
/// Section 24(b) home loan interest cap.
pub const HOME_LOAN_INTEREST_CAP: Decimal = dec!(200000);

/// Employer NPS is deductible up to this share of basic salary.
pub const EMPLOYER_NPS_BASIC_RATIO: Decimal = dec!(0.10);
/// Voluntary retirement compensation cap.
pub const VRS_CAP: Decimal = dec!(500000);

/// Old regime rebate threshold.
pub const OLD_REBATE_THRESHOLD: Decimal = dec!(500000);
/// Old regime rebate cap.
pub const OLD_REBATE_CAP: Decimal = dec!(12500);
/// New regime rebate threshold.
pub const NEW_REBATE_THRESHOLD: Decimal = dec!(700000);
/// New regime rebate cap.
pub const NEW_REBATE_CAP: Decimal = dec!(25000);

/// No surcharge at or below this taxable income.
pub const SURCHARGE_EXEMPT_UP_TO: Decimal = dec!(5000000);

static FISCAL_YEAR: LazyLock<FiscalYearConfig> = LazyLock::new(fiscal_year);

/// Returns a shared instance of the FY 2024-25 rules.
pub fn builtin() -> &'static FiscalYearConfig {
    &FISCAL_YEAR
}

fn slab(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> RateSlab {
    RateSlab::new(lower, upper, rate)
}

/// Old regime income-tax slabs.
pub fn old_regime_slabs() -> Vec<RateSlab> {
    vec![
        slab(dec!(0), Some(dec!(250000)), dec!(0)),
        slab(dec!(250000), Some(dec!(500000)), dec!(0.05)),
        slab(dec!(500000), Some(dec!(1000000)), dec!(0.20)),
        slab(dec!(1000000), None, dec!(0.30)),
    ]
}

/// New regime income-tax slabs.
pub fn new_regime_slabs() -> Vec<RateSlab> {
    vec![
        slab(dec!(0), Some(dec!(300000)), dec!(0)),
        slab(dec!(300000), Some(dec!(600000)), dec!(0.05)),
        slab(dec!(600000), Some(dec!(900000)), dec!(0.10)),
        slab(dec!(900000), Some(dec!(1200000)), dec!(0.15)),
        slab(dec!(1200000), Some(dec!(1500000)), dec!(0.20)),
        slab(dec!(1500000), None, dec!(0.30)),
    ]
}

/// Old regime surcharge slabs, escalating to 37%.
pub fn old_surcharge_slabs() -> Vec<RateSlab> {
    vec![
        slab(dec!(0), Some(dec!(5000000)), dec!(0)),
        slab(dec!(5000000), Some(dec!(10000000)), dec!(0.10)),
        slab(dec!(10000000), Some(dec!(20000000)), dec!(0.15)),
        slab(dec!(20000000), Some(dec!(50000000)), dec!(0.25)),
        slab(dec!(50000000), None, dec!(0.37)),
    ]
}

/// New regime surcharge slabs: a flat 15% above 50 lakh.
pub fn new_surcharge_slabs() -> Vec<RateSlab> {
    vec![
        slab(dec!(0), Some(dec!(5000000)), dec!(0)),
        slab(dec!(5000000), None, dec!(0.15)),
    ]
}

/// The rebate rule for a regime.
pub fn rebate_rule(regime: Regime) -> RebateRule {
    match regime {
        Regime::Old => RebateRule {
            threshold: OLD_REBATE_THRESHOLD,
            cap: OLD_REBATE_CAP,
        },
        Regime::New => RebateRule {
            threshold: NEW_REBATE_THRESHOLD,
            cap: NEW_REBATE_CAP,
        },
    }
}

/// The old regime rule set.
pub fn old_regime() -> RegimeConfig {
    RegimeConfig {
        regime: Regime::Old,
        standard_deduction: OLD_STANDARD_DEDUCTION,
        slabs: old_regime_slabs(),
        rebate: rebate_rule(Regime::Old),
        surcharge: SurchargeRule {
            exempt_up_to: SURCHARGE_EXEMPT_UP_TO,
            slabs: old_surcharge_slabs(),
        },
        deductions: DeductionScheme::Itemized(ItemizedDeductionCaps {
            section_80c: SECTION_80C_CAP,
            section_80d: SECTION_80D_CAP,
            section_80ccd_1b: SECTION_80CCD_1B_CAP,
            home_loan_interest: HOME_LOAN_INTEREST_CAP,
        }),
    }
}

/// The new regime rule set.
pub fn new_regime() -> RegimeConfig {
    RegimeConfig {
        regime: Regime::New,
        standard_deduction: NEW_STANDARD_DEDUCTION,
        slabs: new_regime_slabs(),
        rebate: rebate_rule(Regime::New),
        surcharge: SurchargeRule {
            exempt_up_to: SURCHARGE_EXEMPT_UP_TO,
            slabs: new_surcharge_slabs(),
        },
        deductions: DeductionScheme::ExemptAllowances(ExemptAllowanceCaps {
            employer_nps_basic_ratio: EMPLOYER_NPS_BASIC_RATIO,
            vrs: VRS_CAP,
        }),
    }
}

/// The complete FY 2024-25 rule set.
pub fn fiscal_year() -> FiscalYearConfig {
    FiscalYearConfig::new(
        FiscalYearMetadata {
            code: "FY2024-25".to_string(),
            name: "Financial Year 2024-25".to_string(),
            assessment_year: "AY2025-26".to_string(),
            cess_rate: CESS_RATE,
            source: "Finance (No. 2) Act, 2024".to_string(),
        },
        old_regime(),
        new_regime(),
    )
}
