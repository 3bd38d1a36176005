//! The per-regime tax pipeline.
//!
//! Both regimes run the same sequence: total income, deductions, taxable
//! income, slab tax, rebate, surcharge, cess. Everything that differs
//! between them (slabs, caps, thresholds, which deductions count) comes
//! from the [`RegimeConfig`], so there is one pipeline and two rule sets.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::config::{RegimeConfig, fy2024_25};
use crate::models::{
    AuditStep, AuditWarning, DeductionBreakdown, DeductionLimit, DeductionLine, Regime, TaxInputs,
    TaxResult,
};

use super::common::{non_negative, round_to_whole};
use super::deductions::derive_deductions;
use super::rebate::apply_rebate_rule;
use super::slab_tax::compute_slab_tax;
use super::surcharge::{apply_surcharge_rule, surcharge_slab};

/// Everything produced while computing one regime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeCalculation {
    /// The itemized tax result.
    pub result: TaxResult,
    /// Deductions as claimed and as allowed.
    pub deductions: DeductionBreakdown,
    /// Ordered record of every rule applied.
    pub audit_steps: Vec<AuditStep>,
    /// Conditions worth flagging to the taxpayer.
    pub warnings: Vec<AuditWarning>,
}

/// Numbers audit steps consecutively from a starting point.
struct StepRecorder {
    next: u32,
    steps: Vec<AuditStep>,
}

impl StepRecorder {
    fn starting_at(first_step: u32) -> Self {
        Self {
            next: first_step,
            steps: Vec::new(),
        }
    }

    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        clause_ref: &str,
        input: Value,
        output: Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.next,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            clause_ref: clause_ref.to_string(),
            input,
            output,
            reasoning,
        });
        self.next += 1;
    }
}

fn amount(value: Decimal) -> Value {
    Value::String(value.normalize().to_string())
}

/// Computes cess on tax plus surcharge, rounded to whole rupees.
pub fn compute_cess(tax_after_rebate: Decimal, surcharge: Decimal, cess_rate: Decimal) -> Decimal {
    round_to_whole((tax_after_rebate + surcharge) * cess_rate)
}

/// Runs the full pipeline for one regime.
///
/// `first_step` is the number given to the first audit step, so the steps
/// of two regimes can be laid end to end in one trace.
pub fn calculate_regime_tax(
    inputs: &TaxInputs,
    config: &RegimeConfig,
    cess_rate: Decimal,
    first_step: u32,
) -> RegimeCalculation {
    let regime = config.regime;
    let mut recorder = StepRecorder::starting_at(first_step);
    let mut warnings = Vec::new();

    let total_income = inputs.total_income().normalize();
    recorder.record(
        "total_income",
        "Total Income",
        "Section 14",
        json!({
            "regime": regime.as_str(),
            "gross_salary": amount(inputs.gross_salary),
            "other_income": amount(inputs.other_income),
        }),
        json!({ "total_income": amount(total_income) }),
        format!(
            "{} + {} = {}",
            inputs.gross_salary.normalize(),
            inputs.other_income.normalize(),
            total_income
        ),
    );

    let deductions = derive_deductions(inputs, config);
    recorder.record(
        "deductions",
        "Deductions",
        deduction_clause(regime),
        json!({
            "claimed": deductions
                .lines
                .iter()
                .map(|line| (line.code.clone(), amount(line.claimed)))
                .collect::<serde_json::Map<_, _>>(),
        }),
        json!({
            "allowed": deductions
                .lines
                .iter()
                .map(|line| (line.code.clone(), amount(line.allowed)))
                .collect::<serde_json::Map<_, _>>(),
            "total_deductions": amount(deductions.total),
        }),
        format!(
            "{} deduction lines allowed under the {} regime, {} reduced",
            deductions.lines.len(),
            regime,
            deductions.limited_lines().count()
        ),
    );
    warnings.extend(deductions.limited_lines().map(limit_warning));

    let total_deductions = deductions.total;
    let taxable_income = non_negative(total_income - total_deductions).normalize();
    recorder.record(
        "taxable_income",
        "Taxable Income",
        "Section 2(45)",
        json!({
            "total_income": amount(total_income),
            "total_deductions": amount(total_deductions),
        }),
        json!({ "taxable_income": amount(taxable_income) }),
        format!(
            "max(0, {} - {}) = {}",
            total_income, total_deductions, taxable_income
        ),
    );

    let tax_before_rebate = compute_slab_tax(taxable_income, &config.slabs);
    recorder.record(
        "slab_tax",
        "Slab Tax",
        slab_clause(regime),
        json!({
            "taxable_income": amount(taxable_income),
            "slabs": config.slabs.len(),
        }),
        json!({ "tax_before_rebate": amount(tax_before_rebate) }),
        format!(
            "Progressive {} regime slabs on {} give {}",
            regime, taxable_income, tax_before_rebate
        ),
    );

    let rebate_amount = apply_rebate_rule(taxable_income, tax_before_rebate, &config.rebate);
    let tax_after_rebate = non_negative(tax_before_rebate - rebate_amount);
    let qualifies = taxable_income <= config.rebate.threshold;
    recorder.record(
        "rebate_87a",
        "Rebate",
        "Section 87A",
        json!({
            "taxable_income": amount(taxable_income),
            "tax_before_rebate": amount(tax_before_rebate),
            "threshold": amount(config.rebate.threshold),
            "cap": amount(config.rebate.cap),
        }),
        json!({
            "rebate_amount": amount(rebate_amount),
            "tax_after_rebate": amount(tax_after_rebate),
            "rebate_applied": qualifies,
        }),
        if qualifies {
            format!(
                "Taxable income {} is within the {} threshold; rebate min({}, {}) = {}",
                taxable_income,
                config.rebate.threshold.normalize(),
                tax_before_rebate,
                config.rebate.cap.normalize(),
                rebate_amount
            )
        } else {
            format!(
                "Taxable income {} exceeds the {} threshold; no rebate",
                taxable_income,
                config.rebate.threshold.normalize()
            )
        },
    );
    if let Some(warning) = rebate_cliff_warning(regime, taxable_income, config) {
        warnings.push(warning);
    }

    let surcharge = apply_surcharge_rule(taxable_income, tax_after_rebate, &config.surcharge);
    let surcharge_rate = surcharge_slab(taxable_income, &config.surcharge)
        .map(|slab| slab.rate)
        .unwrap_or(Decimal::ZERO);
    recorder.record(
        "surcharge",
        "Surcharge",
        "Finance Act 2024, First Schedule Part III",
        json!({
            "taxable_income": amount(taxable_income),
            "tax_after_rebate": amount(tax_after_rebate),
            "exempt_up_to": amount(config.surcharge.exempt_up_to),
        }),
        json!({
            "surcharge_rate": amount(surcharge_rate),
            "surcharge": amount(surcharge),
        }),
        if surcharge_rate.is_zero() {
            format!(
                "Taxable income {} does not exceed {}; no surcharge",
                taxable_income,
                config.surcharge.exempt_up_to.normalize()
            )
        } else {
            format!(
                "{} x {} = {}",
                tax_after_rebate,
                surcharge_rate.normalize(),
                surcharge
            )
        },
    );

    let cess = compute_cess(tax_after_rebate, surcharge, cess_rate);
    recorder.record(
        "cess",
        "Health & Education Cess",
        "Finance Act 2024, Section 2(11)",
        json!({
            "tax_after_rebate": amount(tax_after_rebate),
            "surcharge": amount(surcharge),
            "cess_rate": amount(cess_rate),
        }),
        json!({ "cess": amount(cess) }),
        format!(
            "({} + {}) x {} = {}",
            tax_after_rebate,
            surcharge,
            cess_rate.normalize(),
            cess
        ),
    );

    let total_tax = tax_after_rebate + surcharge + cess;
    recorder.record(
        "total_tax",
        "Total Tax Liability",
        "Section 4",
        json!({
            "tax_after_rebate": amount(tax_after_rebate),
            "surcharge": amount(surcharge),
            "cess": amount(cess),
        }),
        json!({ "total_tax": amount(total_tax) }),
        format!(
            "{} + {} + {} = {}",
            tax_after_rebate, surcharge, cess, total_tax
        ),
    );

    RegimeCalculation {
        result: TaxResult {
            total_income,
            total_deductions,
            taxable_income,
            tax_before_rebate,
            rebate_amount,
            tax_after_rebate,
            surcharge,
            cess,
            total_tax,
            regime,
        },
        deductions,
        audit_steps: recorder.steps,
        warnings,
    }
}

/// Computes the old regime under the built-in FY 2024-25 rules.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::calculate_old_regime_tax;
/// use tax_regime_engine::models::TaxInputs;
///
/// let inputs = TaxInputs {
///     gross_salary: dec!(1200000),
///     section_80c: dec!(150000),
///     section_80d: dec!(25000),
///     ..TaxInputs::default()
/// };
/// let result = calculate_old_regime_tax(&inputs);
/// assert_eq!(result.taxable_income, dec!(975000));
/// assert_eq!(result.total_tax, dec!(111800));
/// ```
pub fn calculate_old_regime_tax(inputs: &TaxInputs) -> TaxResult {
    builtin_regime_tax(inputs, Regime::Old)
}

/// Computes the new regime under the built-in FY 2024-25 rules.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::calculate_new_regime_tax;
/// use tax_regime_engine::models::TaxInputs;
///
/// let inputs = TaxInputs {
///     gross_salary: dec!(1200000),
///     ..TaxInputs::default()
/// };
/// let result = calculate_new_regime_tax(&inputs);
/// assert_eq!(result.taxable_income, dec!(1125000));
/// assert_eq!(result.total_tax, dec!(81900));
/// ```
pub fn calculate_new_regime_tax(inputs: &TaxInputs) -> TaxResult {
    builtin_regime_tax(inputs, Regime::New)
}

fn builtin_regime_tax(inputs: &TaxInputs, regime: Regime) -> TaxResult {
    let fiscal_year = fy2024_25::builtin();
    calculate_regime_tax(inputs, fiscal_year.regime(regime), fiscal_year.cess_rate(), 1).result
}

fn deduction_clause(regime: Regime) -> &'static str {
    match regime {
        Regime::Old => "Chapter VI-A, Sections 10 and 24(b)",
        Regime::New => "Section 115BAC(2)",
    }
}

fn slab_clause(regime: Regime) -> &'static str {
    match regime {
        Regime::Old => "Finance Act 2024, First Schedule Part III",
        Regime::New => "Section 115BAC(1A)",
    }
}

fn limit_warning(line: &DeductionLine) -> AuditWarning {
    match &line.limit {
        Some(DeductionLimit::BasicSalaryMissing) => AuditWarning::new(
            "NPS_BASIC_SALARY_MISSING",
            format!(
                "{} of {} disallowed: no basic salary was provided to compute the cap",
                line.label,
                line.claimed.normalize()
            ),
            "medium",
        ),
        Some(DeductionLimit::DisabilityRequired) => AuditWarning::new(
            "TRANSPORT_ALLOWANCE_INELIGIBLE",
            format!(
                "{} of {} disallowed: only available to taxpayers with a disability",
                line.label,
                line.claimed.normalize()
            ),
            "low",
        ),
        Some(DeductionLimit::Cap { cap }) => AuditWarning::new(
            "DEDUCTION_CAPPED",
            format!(
                "{} claim of {} capped at {}",
                line.label,
                line.claimed.normalize(),
                cap.normalize()
            ),
            "low",
        ),
        None => AuditWarning::new(
            "DEDUCTION_LIMITED",
            format!("{} reduced to {}", line.label, line.allowed.normalize()),
            "low",
        ),
    }
}

/// Flags taxable income that misses the rebate by less than the rebate cap.
fn rebate_cliff_warning(
    regime: Regime,
    taxable_income: Decimal,
    config: &RegimeConfig,
) -> Option<AuditWarning> {
    let excess = taxable_income - config.rebate.threshold;
    if excess <= Decimal::ZERO || excess > config.rebate.cap {
        return None;
    }
    Some(AuditWarning::new(
        "REBATE_CLIFF",
        format!(
            "Taxable income under the {} regime is {} above the rebate threshold of {}; the rebate of up to {} is lost entirely",
            regime,
            excess.normalize(),
            config.rebate.threshold.normalize(),
            config.rebate.cap.normalize()
        ),
        "medium",
    ))
}
