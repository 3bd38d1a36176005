//! Core data models for the Tax Regime Engine.
//!
//! This module contains the domain values that flow through the engine:
//! the taxpayer's inputs, rate tables, itemized deductions, the per-regime
//! results and the audit trail.

mod audit;
mod comparison_result;
mod deduction;
mod rate_slab;
mod regime;
mod tax_inputs;
mod tax_result;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use comparison_result::ComparisonResult;
pub use deduction::{DeductionBreakdown, DeductionLimit, DeductionLine};
pub use rate_slab::RateSlab;
pub use regime::Regime;
pub use tax_inputs::TaxInputs;
pub use tax_result::{TaxComparison, TaxResult};
