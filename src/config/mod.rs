//! Regime rule configuration.
//!
//! Slab boundaries, caps and thresholds are fiscal-year statutory facts, so
//! they live here as data rather than in the calculation pipeline. Rules can
//! be loaded from a YAML directory or taken from the compiled-in FY 2024-25
//! set.
//!
//! # Example
//!
//! ```no_run
//! use tax_regime_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/fy2024-25").unwrap();
//! println!("Loaded rules for {}", loader.metadata().name);
//! ```

pub mod fy2024_25;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DeductionScheme, ExemptAllowanceCaps, FiscalYearConfig, FiscalYearMetadata,
    ItemizedDeductionCaps, RebateRule, RegimeConfig, SurchargeRule,
};
