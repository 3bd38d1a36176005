//! Itemized deductions.
//!
//! Each regime derives a [`DeductionBreakdown`] from the raw inputs: one
//! [`DeductionLine`] per deduction it recognizes, carrying both the amount
//! the taxpayer claimed and the amount the regime allows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Why an allowed amount is lower than the claimed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeductionLimit {
    /// The claim exceeded a statutory cap.
    Cap {
        /// The cap that was applied.
        cap: Decimal,
    },
    /// Employer NPS was claimed but no basic salary was supplied.
    BasicSalaryMissing,
    /// Transport allowance was claimed without the disability flag.
    DisabilityRequired,
}

/// One deduction as claimed and as allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Stable identifier (e.g., "section_80c").
    pub code: String,
    /// Human-readable label (e.g., "Section 80C").
    pub label: String,
    /// Statutory reference for the deduction.
    pub clause_ref: String,
    /// The amount the taxpayer claimed.
    pub claimed: Decimal,
    /// The amount the regime allows.
    pub allowed: Decimal,
    /// Set when `allowed` is below `claimed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<DeductionLimit>,
}

impl DeductionLine {
    /// A deduction allowed in full.
    pub fn uncapped(code: &str, label: &str, clause_ref: &str, claimed: Decimal) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            clause_ref: clause_ref.to_string(),
            claimed,
            allowed: claimed,
            limit: None,
        }
    }

    /// A deduction clamped to `cap`.
    pub fn capped(
        code: &str,
        label: &str,
        clause_ref: &str,
        claimed: Decimal,
        cap: Decimal,
    ) -> Self {
        let allowed = claimed.min(cap);
        Self {
            code: code.to_string(),
            label: label.to_string(),
            clause_ref: clause_ref.to_string(),
            claimed,
            allowed,
            limit: (claimed > cap).then_some(DeductionLimit::Cap { cap }),
        }
    }

    /// Returns true if the claim was reduced.
    pub fn is_limited(&self) -> bool {
        self.limit.is_some()
    }
}

/// All deductions for one regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// The regime the deductions were derived for.
    pub regime: Regime,
    /// Deduction lines in statutory order.
    pub lines: Vec<DeductionLine>,
    /// Sum of the allowed amounts.
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// Builds a breakdown, totalling the allowed amounts.
    ///
    /// The total saturates at `Decimal::MAX`.
    pub fn new(regime: Regime, lines: Vec<DeductionLine>) -> Self {
        let total = lines
            .iter()
            .fold(Decimal::ZERO, |total, line| total.saturating_add(line.allowed))
            .normalize();
        Self {
            regime,
            lines,
            total,
        }
    }

    /// Looks up a line by its code.
    pub fn line(&self, code: &str) -> Option<&DeductionLine> {
        self.lines.iter().find(|line| line.code == code)
    }

    /// Lines whose allowed amount is below the claim.
    pub fn limited_lines(&self) -> impl Iterator<Item = &DeductionLine> {
        self.lines.iter().filter(|line| line.is_limited())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_capped_line_clamps_claim() {
        let line = DeductionLine::capped(
            "section_80c",
            "Section 80C",
            "80C",
            dec("200000"),
            dec("150000"),
        );
        assert_eq!(line.claimed, dec("200000"));
        assert_eq!(line.allowed, dec("150000"));
        assert_eq!(line.limit, Some(DeductionLimit::Cap { cap: dec("150000") }));
    }

    #[test]
    fn test_capped_line_under_cap_has_no_limit() {
        let line = DeductionLine::capped(
            "section_80d",
            "Section 80D",
            "80D",
            dec("25000"),
            dec("50000"),
        );
        assert_eq!(line.allowed, dec("25000"));
        assert!(!line.is_limited());
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let lines = vec![
            DeductionLine::uncapped("hra", "HRA", "10(13A)", Decimal::MAX),
            DeductionLine::uncapped("lta", "LTA", "10(5)", Decimal::MAX),
        ];
        let breakdown = DeductionBreakdown::new(Regime::Old, lines);
        assert_eq!(breakdown.total, Decimal::MAX);
    }

    #[test]
    fn test_claim_exactly_at_cap_is_not_limited() {
        let line = DeductionLine::capped("vrs", "VRS", "10(10C)", dec("500000"), dec("500000"));
        assert_eq!(line.allowed, dec("500000"));
        assert!(!line.is_limited());
    }

    #[test]
    fn test_breakdown_totals_allowed_amounts() {
        let breakdown = DeductionBreakdown::new(
            Regime::Old,
            vec![
                DeductionLine::uncapped("standard_deduction", "Standard Deduction", "16(ia)", dec("50000")),
                DeductionLine::capped("section_80c", "Section 80C", "80C", dec("200000"), dec("150000")),
            ],
        );
        assert_eq!(breakdown.total, dec("200000"));
        assert_eq!(breakdown.line("section_80c").unwrap().allowed, dec("150000"));
        assert!(breakdown.line("section_80e").is_none());
        assert_eq!(breakdown.limited_lines().count(), 1);
    }

    #[test]
    fn test_limit_serialization_is_tagged() {
        let json = serde_json::to_string(&DeductionLimit::DisabilityRequired).unwrap();
        assert_eq!(json, "{\"kind\":\"disability_required\"}");
    }

    #[test]
    fn test_unlimited_line_omits_limit_field() {
        let line = DeductionLine::uncapped("lta", "LTA", "10(5)", dec("10000"));
        let json = serde_json::to_string(&line).unwrap();
        assert!(!json.contains("limit"));
    }
}
