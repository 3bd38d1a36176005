//! Configuration types for regime rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a fiscal-year directory, and the
//! structural checks a loaded table must pass before the engine uses it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{RateSlab, Regime};

/// Metadata about the fiscal year the rules apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearMetadata {
    /// Short code (e.g., "FY2024-25").
    pub code: String,
    /// Human-readable name (e.g., "Financial Year 2024-25").
    pub name: String,
    /// The matching assessment year (e.g., "AY2025-26").
    pub assessment_year: String,
    /// Health and education cess rate applied to tax plus surcharge.
    pub cess_rate: Decimal,
    /// Where the rates were taken from.
    pub source: String,
}

/// Section 87A rebate rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateRule {
    /// Highest taxable income that still qualifies.
    pub threshold: Decimal,
    /// Maximum rebate.
    pub cap: Decimal,
}

/// Surcharge rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeRule {
    /// Taxable income up to and including this amount carries no surcharge.
    pub exempt_up_to: Decimal,
    /// Surcharge bands, selected by `(lower, upper]` bracket.
    pub slabs: Vec<RateSlab>,
}

/// Caps for the itemized (old regime) deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemizedDeductionCaps {
    /// Section 80C cap.
    pub section_80c: Decimal,
    /// Section 80D cap.
    pub section_80d: Decimal,
    /// Section 80CCD(1B) cap.
    pub section_80ccd_1b: Decimal,
    /// Section 24(b) home loan interest cap.
    pub home_loan_interest: Decimal,
}

/// Caps for the exempt allowances (new regime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptAllowanceCaps {
    /// Employer NPS is capped at this fraction of basic salary.
    pub employer_nps_basic_ratio: Decimal,
    /// Voluntary retirement compensation cap.
    pub vrs: Decimal,
}

/// How a regime derives its deductions from the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum DeductionScheme {
    /// Chapter VI-A deductions plus HRA, LTA and home loan interest.
    Itemized(ItemizedDeductionCaps),
    /// Employer NPS and the allowances still exempt under the new regime.
    ExemptAllowances(ExemptAllowanceCaps),
}

/// Every rule needed to compute tax under one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// The regime these rules describe.
    pub regime: Regime,
    /// Flat standard deduction.
    pub standard_deduction: Decimal,
    /// Income-tax slabs.
    pub slabs: Vec<RateSlab>,
    /// Rebate rule.
    pub rebate: RebateRule,
    /// Surcharge rule.
    pub surcharge: SurchargeRule,
    /// Deduction derivation.
    pub deductions: DeductionScheme,
}

impl RegimeConfig {
    /// Checks the structural rules the calculators rely on.
    ///
    /// Both slab tables must start at zero, be contiguous with strictly
    /// increasing bounds, end with a single unbounded band and carry rates
    /// in `[0, 1]`. Amounts must not be negative.
    pub fn validate(&self) -> EngineResult<()> {
        validate_slab_table(self.regime, "income-tax", &self.slabs)?;
        validate_slab_table(self.regime, "surcharge", &self.surcharge.slabs)?;

        let amounts = [
            ("standard_deduction", self.standard_deduction),
            ("rebate.threshold", self.rebate.threshold),
            ("rebate.cap", self.rebate.cap),
            ("surcharge.exempt_up_to", self.surcharge.exempt_up_to),
        ];
        for (name, amount) in amounts {
            if amount.is_sign_negative() {
                return Err(invalid(self.regime, format!("{} must not be negative", name)));
            }
        }

        match &self.deductions {
            DeductionScheme::Itemized(caps) => {
                let caps = [
                    caps.section_80c,
                    caps.section_80d,
                    caps.section_80ccd_1b,
                    caps.home_loan_interest,
                ];
                if caps.iter().any(|cap| cap.is_sign_negative()) {
                    return Err(invalid(self.regime, "deduction caps must not be negative"));
                }
            }
            DeductionScheme::ExemptAllowances(caps) => {
                if !is_fraction(caps.employer_nps_basic_ratio) {
                    return Err(invalid(
                        self.regime,
                        "employer_nps_basic_ratio must be between 0 and 1",
                    ));
                }
                if caps.vrs.is_sign_negative() {
                    return Err(invalid(self.regime, "vrs cap must not be negative"));
                }
            }
        }

        Ok(())
    }
}

/// The complete rule set for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYearConfig {
    metadata: FiscalYearMetadata,
    old_regime: RegimeConfig,
    new_regime: RegimeConfig,
}

impl FiscalYearConfig {
    /// Creates a new FiscalYearConfig from its component parts.
    pub fn new(
        metadata: FiscalYearMetadata,
        old_regime: RegimeConfig,
        new_regime: RegimeConfig,
    ) -> Self {
        Self {
            metadata,
            old_regime,
            new_regime,
        }
    }

    /// Returns the fiscal-year metadata.
    pub fn metadata(&self) -> &FiscalYearMetadata {
        &self.metadata
    }

    /// Returns the cess rate.
    pub fn cess_rate(&self) -> Decimal {
        self.metadata.cess_rate
    }

    /// Returns the rules for the given regime.
    pub fn regime(&self, regime: Regime) -> &RegimeConfig {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }

    /// Validates both regimes and the cess rate.
    pub fn validate(&self) -> EngineResult<()> {
        if !is_fraction(self.metadata.cess_rate) {
            return Err(EngineError::InvalidConfig {
                regime: "all".to_string(),
                message: "cess_rate must be between 0 and 1".to_string(),
            });
        }
        self.old_regime.validate()?;
        self.new_regime.validate()
    }
}

fn is_fraction(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE
}

fn invalid(regime: Regime, message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        regime: regime.to_string(),
        message: message.into(),
    }
}

fn validate_slab_table(regime: Regime, table: &str, slabs: &[RateSlab]) -> EngineResult<()> {
    let Some(first) = slabs.first() else {
        return Err(invalid(regime, format!("{} slab table is empty", table)));
    };
    if !first.lower.is_zero() {
        return Err(invalid(regime, format!("{} slab table must start at 0", table)));
    }

    let last_index = slabs.len() - 1;
    for (index, slab) in slabs.iter().enumerate() {
        if !is_fraction(slab.rate) {
            return Err(invalid(
                regime,
                format!("{} slab {} has a rate outside [0, 1]", table, index + 1),
            ));
        }

        match slab.upper {
            None if index != last_index => {
                return Err(invalid(
                    regime,
                    format!("{} slab {} is unbounded but is not the last slab", table, index + 1),
                ));
            }
            None => {}
            Some(_) if index == last_index => {
                return Err(invalid(
                    regime,
                    format!("{} slab table must end with an unbounded slab", table),
                ));
            }
            Some(upper) => {
                if upper <= slab.lower {
                    return Err(invalid(
                        regime,
                        format!("{} slab {} has upper bound not above its lower bound", table, index + 1),
                    ));
                }
                if slabs[index + 1].lower != upper {
                    return Err(invalid(
                        regime,
                        format!("{} slabs {} and {} are not contiguous", table, index + 1, index + 2),
                    ));
                }
            }
        }
    }

    Ok(())
}
