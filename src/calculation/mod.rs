//! Calculation logic for the Tax Regime Engine.
//!
//! The pipeline for a single regime runs deduction derivation, slab tax,
//! the Section 87A rebate, surcharge and cess in that order. The comparison
//! runs it once per regime and recommends the cheaper one.

mod common;
mod comparison;
mod deductions;
mod rebate;
mod regime_tax;
mod slab_tax;
mod surcharge;

pub use common::round_to_whole;
pub use comparison::{
    DetailedComparison, build_comparison, compare_regimes, compare_regimes_detailed,
    compare_regimes_with, run_comparison,
};
pub use deductions::derive_deductions;
pub use rebate::{apply_rebate_rule, compute_rebate};
pub use regime_tax::{
    RegimeCalculation, calculate_new_regime_tax, calculate_old_regime_tax, calculate_regime_tax,
    compute_cess,
};
pub use slab_tax::compute_slab_tax;
pub use surcharge::{apply_surcharge_rule, compute_surcharge, surcharge_slab};
