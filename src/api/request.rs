//! Request types for the Tax Regime Engine API.
//!
//! This module defines the JSON request body shared by the `/compare` and
//! `/report` endpoints and its validation into [`TaxInputs`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TaxInputs;

/// Upper bound for every currency field.
pub const MAX_AMOUNT: Decimal = dec!(100000000);

/// Upper bound for deductions and exempt allowances that carry no
/// statutory cap of their own.
pub const MAX_DEDUCTION: Decimal = dec!(10000000);

/// Upper bound for the transport allowance.
pub const MAX_TRANSPORT_ALLOWANCE: Decimal = dec!(1000000);

/// Request body for the `/compare` and `/report` endpoints.
///
/// Only `gross_salary` is required. Every other amount defaults to zero and
/// `is_disabled` defaults to false.
///
/// # Example
///
/// ```
/// use tax_regime_engine::api::TaxInputsRequest;
/// use tax_regime_engine::models::TaxInputs;
///
/// let request: TaxInputsRequest =
///     serde_json::from_str(r#"{"gross_salary": "1200000", "section_80c": 150000}"#).unwrap();
/// let inputs = TaxInputs::try_from(request).unwrap();
/// assert_eq!(inputs.section_80c.to_string(), "150000");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxInputsRequest {
    /// Gross salary for the year.
    pub gross_salary: Decimal,
    /// Other income.
    #[serde(default)]
    pub other_income: Decimal,
    /// Basic salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Section 80C investments.
    #[serde(default)]
    pub section_80c: Decimal,
    /// Section 80D health insurance.
    #[serde(default)]
    pub section_80d: Decimal,
    /// Section 80CCD(1B) additional NPS.
    #[serde(default)]
    pub section_80ccd_1b: Decimal,
    /// Section 80E education loan interest.
    #[serde(default)]
    pub section_80e: Decimal,
    /// Section 80G donations.
    #[serde(default)]
    pub section_80g: Decimal,
    /// HRA exemption.
    #[serde(default)]
    pub hra_exemption: Decimal,
    /// Leave travel allowance.
    #[serde(default)]
    pub lta: Decimal,
    /// Home loan interest.
    #[serde(default)]
    pub home_loan_interest: Decimal,
    /// Employer NPS contribution.
    #[serde(default)]
    pub employer_nps: Decimal,
    /// Transport allowance.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Conveyance allowance.
    #[serde(default)]
    pub conveyance_allowance: Decimal,
    /// Gratuity.
    #[serde(default)]
    pub gratuity: Decimal,
    /// Voluntary retirement compensation.
    #[serde(default)]
    pub vrs: Decimal,
    /// Leave encashment.
    #[serde(default)]
    pub leave_encashment: Decimal,
    /// Whether the taxpayer has a disability.
    #[serde(default)]
    pub is_disabled: bool,
}

fn check_amount(field: &str, value: Decimal, max: Decimal) -> EngineResult<Decimal> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if value > max {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {}, got {}", max, value),
        });
    }
    Ok(value)
}

impl TryFrom<TaxInputsRequest> for TaxInputs {
    type Error = EngineError;

    fn try_from(req: TaxInputsRequest) -> Result<Self, Self::Error> {
        Ok(TaxInputs {
            gross_salary: check_amount("gross_salary", req.gross_salary, MAX_AMOUNT)?,
            other_income: check_amount("other_income", req.other_income, MAX_AMOUNT)?,
            basic_salary: check_amount("basic_salary", req.basic_salary, MAX_AMOUNT)?,
            section_80c: check_amount("section_80c", req.section_80c, MAX_AMOUNT)?,
            section_80d: check_amount("section_80d", req.section_80d, MAX_AMOUNT)?,
            section_80ccd_1b: check_amount("section_80ccd_1b", req.section_80ccd_1b, MAX_AMOUNT)?,
            section_80e: check_amount("section_80e", req.section_80e, MAX_DEDUCTION)?,
            section_80g: check_amount("section_80g", req.section_80g, MAX_DEDUCTION)?,
            hra_exemption: check_amount("hra_exemption", req.hra_exemption, MAX_DEDUCTION)?,
            lta: check_amount("lta", req.lta, MAX_DEDUCTION)?,
            home_loan_interest: check_amount(
                "home_loan_interest",
                req.home_loan_interest,
                MAX_AMOUNT,
            )?,
            employer_nps: check_amount("employer_nps", req.employer_nps, MAX_DEDUCTION)?,
            transport_allowance: check_amount(
                "transport_allowance",
                req.transport_allowance,
                MAX_TRANSPORT_ALLOWANCE,
            )?,
            conveyance_allowance: check_amount(
                "conveyance_allowance",
                req.conveyance_allowance,
                MAX_DEDUCTION,
            )?,
            gratuity: check_amount("gratuity", req.gratuity, MAX_DEDUCTION)?,
            vrs: check_amount("vrs", req.vrs, MAX_AMOUNT)?,
            leave_encashment: check_amount("leave_encashment", req.leave_encashment, MAX_DEDUCTION)?,
            is_disabled: req.is_disabled,
        })
    }
}

impl From<TaxInputs> for TaxInputsRequest {
    fn from(inputs: TaxInputs) -> Self {
        Self {
            gross_salary: inputs.gross_salary,
            other_income: inputs.other_income,
            basic_salary: inputs.basic_salary,
            section_80c: inputs.section_80c,
            section_80d: inputs.section_80d,
            section_80ccd_1b: inputs.section_80ccd_1b,
            section_80e: inputs.section_80e,
            section_80g: inputs.section_80g,
            hra_exemption: inputs.hra_exemption,
            lta: inputs.lta,
            home_loan_interest: inputs.home_loan_interest,
            employer_nps: inputs.employer_nps,
            transport_allowance: inputs.transport_allowance,
            conveyance_allowance: inputs.conveyance_allowance,
            gratuity: inputs.gratuity,
            vrs: inputs.vrs,
            leave_encashment: inputs.leave_encashment,
            is_disabled: inputs.is_disabled,
        }
    }
}
