//! The full result envelope returned for a comparison.
//!
//! [`ComparisonResult`] wraps a [`TaxComparison`] with identity and
//! provenance (id, timestamp, engine version, fiscal year), the itemized
//! deductions behind each regime and the audit trace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuditTrace, DeductionBreakdown, Regime, TaxComparison};

/// A comparison as delivered to callers.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use tax_regime_engine::calculation::compare_regimes_detailed;
/// use tax_regime_engine::config::fy2024_25;
/// use tax_regime_engine::models::{AuditTrace, ComparisonResult, TaxInputs};
/// use uuid::Uuid;
///
/// let detailed = compare_regimes_detailed(&TaxInputs::default(), fy2024_25::builtin());
/// let result = ComparisonResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     fiscal_year: "FY2024-25".to_string(),
///     comparison: detailed.comparison,
///     old_deductions: detailed.old_deductions,
///     new_deductions: detailed.new_deductions,
///     audit_trace: AuditTrace {
///         steps: detailed.audit_steps,
///         warnings: detailed.warnings,
///         duration_us: 0,
///     },
/// };
/// assert_eq!(result.deductions_for(result.comparison.recommended_regime).total.to_string(), "50000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Code of the fiscal year whose rules were applied, e.g. `FY2024-25`.
    pub fiscal_year: String,
    /// Both regimes and the recommendation.
    pub comparison: TaxComparison,
    /// Deductions claimed and allowed under the old regime.
    pub old_deductions: DeductionBreakdown,
    /// Deductions claimed and allowed under the new regime.
    pub new_deductions: DeductionBreakdown,
    /// Complete audit trace of both calculations.
    pub audit_trace: AuditTrace,
}

impl ComparisonResult {
    /// Returns the deduction breakdown for a regime.
    pub fn deductions_for(&self, regime: Regime) -> &DeductionBreakdown {
        match regime {
            Regime::Old => &self.old_deductions,
            Regime::New => &self.new_deductions,
        }
    }
}
