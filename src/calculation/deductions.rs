//! Deduction derivation for each regime.
//!
//! The old regime recognizes the Chapter VI-A deductions and the salary
//! exemptions; the new regime recognizes only employer NPS and a short list
//! of exempt allowances. Both add a flat standard deduction first.

use rust_decimal::Decimal;

use crate::config::{DeductionScheme, ExemptAllowanceCaps, ItemizedDeductionCaps, RegimeConfig};
use crate::models::{DeductionBreakdown, DeductionLimit, DeductionLine, TaxInputs};

/// Derives the itemized deductions a regime allows for `inputs`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::calculation::derive_deductions;
/// use tax_regime_engine::config::fy2024_25;
/// use tax_regime_engine::models::TaxInputs;
///
/// let inputs = TaxInputs {
///     section_80c: dec!(200000),
///     ..TaxInputs::default()
/// };
/// let breakdown = derive_deductions(&inputs, &fy2024_25::old_regime());
/// assert_eq!(breakdown.line("section_80c").unwrap().allowed, dec!(150000));
/// assert_eq!(breakdown.total, dec!(200000));
/// ```
pub fn derive_deductions(inputs: &TaxInputs, config: &RegimeConfig) -> DeductionBreakdown {
    let mut lines = vec![DeductionLine::uncapped(
        "standard_deduction",
        "Standard Deduction",
        "16(ia)",
        config.standard_deduction,
    )];

    match &config.deductions {
        DeductionScheme::Itemized(caps) => lines.extend(itemized_lines(inputs, caps)),
        DeductionScheme::ExemptAllowances(caps) => lines.extend(exempt_allowance_lines(inputs, caps)),
    }

    DeductionBreakdown::new(config.regime, lines)
}

fn itemized_lines(inputs: &TaxInputs, caps: &ItemizedDeductionCaps) -> Vec<DeductionLine> {
    vec![
        DeductionLine::capped("section_80c", "Section 80C", "80C", inputs.section_80c, caps.section_80c),
        DeductionLine::capped("section_80d", "Section 80D", "80D", inputs.section_80d, caps.section_80d),
        DeductionLine::capped(
            "section_80ccd_1b",
            "Section 80CCD(1B)",
            "80CCD(1B)",
            inputs.section_80ccd_1b,
            caps.section_80ccd_1b,
        ),
        DeductionLine::uncapped("section_80e", "Section 80E", "80E", inputs.section_80e),
        DeductionLine::uncapped("section_80g", "Section 80G", "80G", inputs.section_80g),
        DeductionLine::uncapped("hra_exemption", "HRA Exemption", "10(13A)", inputs.hra_exemption),
        DeductionLine::uncapped("lta", "LTA", "10(5)", inputs.lta),
        DeductionLine::capped(
            "home_loan_interest",
            "Home Loan Interest",
            "24(b)",
            inputs.home_loan_interest,
            caps.home_loan_interest,
        ),
    ]
}

fn exempt_allowance_lines(inputs: &TaxInputs, caps: &ExemptAllowanceCaps) -> Vec<DeductionLine> {
    vec![
        employer_nps_line(inputs, caps.employer_nps_basic_ratio),
        transport_allowance_line(inputs),
        DeductionLine::uncapped(
            "conveyance_allowance",
            "Conveyance Allowance",
            "10(14)",
            inputs.conveyance_allowance,
        ),
        DeductionLine::uncapped("gratuity", "Gratuity", "10(10)", inputs.gratuity),
        DeductionLine::capped("vrs", "VRS Compensation", "10(10C)", inputs.vrs, caps.vrs),
        DeductionLine::uncapped(
            "leave_encashment",
            "Leave Encashment",
            "10(10AA)",
            inputs.leave_encashment,
        ),
    ]
}

/// Employer NPS is capped at a share of basic salary, so a missing basic
/// salary forces the deduction to zero.
fn employer_nps_line(inputs: &TaxInputs, basic_ratio: Decimal) -> DeductionLine {
    let cap = (inputs.basic_salary * basic_ratio).normalize();
    let mut line = DeductionLine::capped(
        "employer_nps",
        "Employer NPS Contribution",
        "80CCD(2)",
        inputs.employer_nps,
        cap,
    );
    if line.is_limited() && inputs.basic_salary.is_zero() {
        line.limit = Some(DeductionLimit::BasicSalaryMissing);
    }
    line
}

fn transport_allowance_line(inputs: &TaxInputs) -> DeductionLine {
    let allowed = inputs.eligible_transport_allowance();
    DeductionLine {
        code: "transport_allowance".to_string(),
        label: "Transport Allowance".to_string(),
        clause_ref: "10(14)".to_string(),
        claimed: inputs.transport_allowance,
        allowed,
        limit: (allowed < inputs.transport_allowance).then_some(DeductionLimit::DisabilityRequired),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fy2024_25::{new_regime, old_regime};
    use crate::models::Regime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn allowed(breakdown: &DeductionBreakdown, code: &str) -> Decimal {
        breakdown.line(code).unwrap().allowed
    }

    #[test]
    fn test_old_regime_standard_deduction_only() {
        let breakdown = derive_deductions(&TaxInputs::default(), &old_regime());
        assert_eq!(breakdown.regime, Regime::Old);
        assert_eq!(breakdown.total, dec("50000"));
        assert_eq!(breakdown.lines.len(), 9);
    }

    #[test]
    fn test_new_regime_standard_deduction_only() {
        let breakdown = derive_deductions(&TaxInputs::default(), &new_regime());
        assert_eq!(breakdown.regime, Regime::New);
        assert_eq!(breakdown.total, dec("75000"));
        assert_eq!(breakdown.lines.len(), 7);
    }

    #[test]
    fn test_section_80c_is_clamped() {
        let inputs = TaxInputs {
            section_80c: dec("200000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &old_regime());

        assert_eq!(allowed(&breakdown, "section_80c"), dec("150000"));
        assert_eq!(breakdown.total, dec("200000"));
        assert_eq!(
            breakdown.line("section_80c").unwrap().limit,
            Some(DeductionLimit::Cap { cap: dec("150000") })
        );
    }

    #[test]
    fn test_old_regime_all_caps() {
        let inputs = TaxInputs {
            section_80c: dec("500000"),
            section_80d: dec("90000"),
            section_80ccd_1b: dec("80000"),
            home_loan_interest: dec("350000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &old_regime());

        assert_eq!(allowed(&breakdown, "section_80c"), dec("150000"));
        assert_eq!(allowed(&breakdown, "section_80d"), dec("50000"));
        assert_eq!(allowed(&breakdown, "section_80ccd_1b"), dec("50000"));
        assert_eq!(allowed(&breakdown, "home_loan_interest"), dec("200000"));
        assert_eq!(breakdown.limited_lines().count(), 4);
    }

    #[test]
    fn test_old_regime_uncapped_deductions_pass_through() {
        let inputs = TaxInputs {
            section_80e: dec("400000"),
            section_80g: dec("300000"),
            hra_exemption: dec("240000"),
            lta: dec("60000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &old_regime());

        assert_eq!(breakdown.total, dec("1050000"));
        assert_eq!(breakdown.limited_lines().count(), 0);
    }

    #[test]
    fn test_old_regime_ignores_new_regime_fields() {
        let inputs = TaxInputs {
            employer_nps: dec("60000"),
            basic_salary: dec("600000"),
            gratuity: dec("100000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &old_regime());
        assert_eq!(breakdown.total, dec("50000"));
    }

    #[test]
    fn test_employer_nps_capped_at_ten_percent_of_basic() {
        let inputs = TaxInputs {
            basic_salary: dec("600000"),
            employer_nps: dec("90000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &new_regime());

        assert_eq!(allowed(&breakdown, "employer_nps"), dec("60000"));
        assert_eq!(breakdown.total, dec("135000"));
    }

    #[test]
    fn test_employer_nps_without_basic_salary_is_zero() {
        let inputs = TaxInputs {
            employer_nps: dec("50000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &new_regime());
        let line = breakdown.line("employer_nps").unwrap();

        assert_eq!(line.allowed, Decimal::ZERO);
        assert_eq!(line.limit, Some(DeductionLimit::BasicSalaryMissing));
    }

    #[test]
    fn test_transport_allowance_gated_by_disability() {
        let mut inputs = TaxInputs {
            transport_allowance: dec("50000"),
            ..TaxInputs::default()
        };

        let breakdown = derive_deductions(&inputs, &new_regime());
        assert_eq!(allowed(&breakdown, "transport_allowance"), Decimal::ZERO);
        assert_eq!(breakdown.total, dec("75000"));
        assert_eq!(
            breakdown.line("transport_allowance").unwrap().limit,
            Some(DeductionLimit::DisabilityRequired)
        );

        inputs.is_disabled = true;
        let breakdown = derive_deductions(&inputs, &new_regime());
        assert_eq!(allowed(&breakdown, "transport_allowance"), dec("50000"));
        assert_eq!(breakdown.total, dec("125000"));
    }

    #[test]
    fn test_vrs_capped_at_five_lakh() {
        let inputs = TaxInputs {
            vrs: dec("800000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &new_regime());
        assert_eq!(allowed(&breakdown, "vrs"), dec("500000"));
    }

    #[test]
    fn test_new_regime_uncapped_allowances() {
        let inputs = TaxInputs {
            conveyance_allowance: dec("20000"),
            gratuity: dec("300000"),
            leave_encashment: dec("150000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &new_regime());
        assert_eq!(breakdown.total, dec("545000"));
    }

    #[test]
    fn test_new_regime_ignores_old_regime_fields() {
        let inputs = TaxInputs {
            section_80c: dec("150000"),
            hra_exemption: dec("200000"),
            ..TaxInputs::default()
        };
        let breakdown = derive_deductions(&inputs, &new_regime());
        assert_eq!(breakdown.total, dec("75000"));
    }
}
