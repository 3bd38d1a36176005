//! Side-by-side regime comparison and recommendation.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::{FiscalYearConfig, fy2024_25};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ComparisonResult, DeductionBreakdown, Regime,
    TaxComparison, TaxInputs, TaxResult,
};

use super::regime_tax::calculate_regime_tax;

/// A comparison together with the deductions and audit trail behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedComparison {
    /// The comparison itself.
    pub comparison: TaxComparison,
    /// Deductions allowed under the old regime.
    pub old_deductions: DeductionBreakdown,
    /// Deductions allowed under the new regime.
    pub new_deductions: DeductionBreakdown,
    /// Old regime steps followed by new regime steps, numbered from 1.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings from both regimes.
    pub warnings: Vec<AuditWarning>,
}

/// Compares both regimes under the built-in FY 2024-25 rules.
pub fn compare_regimes(inputs: &TaxInputs) -> TaxComparison {
    compare_regimes_with(inputs, fy2024_25::builtin())
}

/// Compares both regimes under the given fiscal-year rules.
pub fn compare_regimes_with(inputs: &TaxInputs, fiscal_year: &FiscalYearConfig) -> TaxComparison {
    compare_regimes_detailed(inputs, fiscal_year).comparison
}

/// Compares both regimes and keeps everything needed to explain the result.
pub fn compare_regimes_detailed(
    inputs: &TaxInputs,
    fiscal_year: &FiscalYearConfig,
) -> DetailedComparison {
    let cess_rate = fiscal_year.cess_rate();
    let old = calculate_regime_tax(inputs, fiscal_year.regime(Regime::Old), cess_rate, 1);
    let next_step = old.audit_steps.len() as u32 + 1;
    let new = calculate_regime_tax(inputs, fiscal_year.regime(Regime::New), cess_rate, next_step);

    let comparison = build_comparison(old.result, new.result);
    debug!(
        fiscal_year = %fiscal_year.metadata().code,
        old_total = %comparison.old_regime.total_tax,
        new_total = %comparison.new_regime.total_tax,
        recommended = %comparison.recommended_regime,
        savings = %comparison.savings,
        "Regimes compared"
    );

    let mut audit_steps = old.audit_steps;
    audit_steps.extend(new.audit_steps);
    let mut warnings = old.warnings;
    warnings.extend(new.warnings);

    DetailedComparison {
        comparison,
        old_deductions: old.deductions,
        new_deductions: new.deductions,
        audit_steps,
        warnings,
    }
}

/// Runs a detailed comparison and wraps it with identity, provenance and
/// timing.
pub fn run_comparison(inputs: &TaxInputs, fiscal_year: &FiscalYearConfig) -> ComparisonResult {
    let start_time = Instant::now();
    let detailed = compare_regimes_detailed(inputs, fiscal_year);
    let duration_us = start_time.elapsed().as_micros() as u64;

    ComparisonResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        fiscal_year: fiscal_year.metadata().code.clone(),
        comparison: detailed.comparison,
        old_deductions: detailed.old_deductions,
        new_deductions: detailed.new_deductions,
        audit_trace: AuditTrace {
            steps: detailed.audit_steps,
            warnings: detailed.warnings,
            duration_us,
        },
    }
}

/// Builds the comparison from two regime results.
///
/// The new regime is recommended only when it is strictly cheaper.
pub fn build_comparison(old_regime: TaxResult, new_regime: TaxResult) -> TaxComparison {
    let recommended_regime = if new_regime.total_tax < old_regime.total_tax {
        Regime::New
    } else {
        Regime::Old
    };
    let savings: Decimal = (old_regime.total_tax - new_regime.total_tax).abs();

    TaxComparison {
        old_regime,
        new_regime,
        savings,
        recommended_regime,
    }
}
