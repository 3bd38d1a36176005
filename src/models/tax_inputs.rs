//! Income and deduction inputs for a single tax calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Everything the engine needs to compute both regimes for one taxpayer.
///
/// All currency fields are expected to be non-negative. The engine clamps
/// capped deductions itself but does not re-validate ranges; that is the job
/// of whoever builds this value (see `api::TaxInputsRequest`).
///
/// Amounts are meant to stay within a few orders of magnitude of the
/// request layer's limit of 100,000,000. Sums saturate at `Decimal::MAX`
/// instead of panicking, so values near that bound give meaningless but
/// finite results.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::models::TaxInputs;
///
/// let inputs = TaxInputs {
///     gross_salary: dec!(1200000),
///     other_income: dec!(50000),
///     basic_salary: dec!(600000),
///     ..TaxInputs::default()
/// };
/// assert_eq!(inputs.total_income(), dec!(1250000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInputs {
    /// Gross salary for the year.
    pub gross_salary: Decimal,
    /// Interest and any other non-salary income.
    pub other_income: Decimal,
    /// Basic salary; the base for the employer NPS cap.
    pub basic_salary: Decimal,

    /// Section 80C investments (PF, LIC, ELSS). Old regime only.
    pub section_80c: Decimal,
    /// Section 80D health insurance premium. Old regime only.
    pub section_80d: Decimal,
    /// Section 80CCD(1B) additional NPS contribution. Old regime only.
    pub section_80ccd_1b: Decimal,
    /// Section 80E education loan interest. Old regime only.
    pub section_80e: Decimal,
    /// Section 80G donations. Old regime only.
    pub section_80g: Decimal,
    /// House rent allowance exemption. Old regime only.
    pub hra_exemption: Decimal,
    /// Leave travel allowance. Old regime only.
    pub lta: Decimal,
    /// Section 24(b) home loan interest. Old regime only.
    pub home_loan_interest: Decimal,

    /// Employer NPS contribution under section 80CCD(2). New regime only.
    pub employer_nps: Decimal,
    /// Transport allowance; only counted when `is_disabled` is set. New regime only.
    pub transport_allowance: Decimal,
    /// Conveyance allowance for official duty. New regime only.
    pub conveyance_allowance: Decimal,
    /// Gratuity received. New regime only.
    pub gratuity: Decimal,
    /// Voluntary retirement compensation. New regime only.
    pub vrs: Decimal,
    /// Leave encashment. New regime only.
    pub leave_encashment: Decimal,
    /// Whether the taxpayer has a disability; gates the transport allowance.
    pub is_disabled: bool,
}

impl TaxInputs {
    /// Gross salary plus other income, saturating at `Decimal::MAX`.
    pub fn total_income(&self) -> Decimal {
        self.gross_salary.saturating_add(self.other_income)
    }

    /// The transport allowance that may be claimed.
    ///
    /// Zero unless the taxpayer is disabled, whatever the literal field holds.
    pub fn eligible_transport_allowance(&self) -> Decimal {
        if self.is_disabled {
            self.transport_allowance
        } else {
            Decimal::ZERO
        }
    }
}
