//! The two statutory tax regimes a taxpayer may elect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A statutory tax regime.
///
/// # Example
///
/// ```
/// use tax_regime_engine::models::Regime;
///
/// assert_eq!(Regime::Old.to_string(), "old");
/// assert_eq!(Regime::New.display_name(), "New Tax Regime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// The deduction-heavy regime with fewer, steeper slabs.
    Old,
    /// The lower-rate regime that allows only a narrow set of deductions.
    New,
}

impl Regime {
    /// Both regimes, old first.
    pub const ALL: [Regime; 2] = [Regime::Old, Regime::New];

    /// Returns the lowercase tag used in JSON and YAML.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Old => "old",
            Regime::New => "new",
        }
    }

    /// Returns the name shown to taxpayers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Regime::Old => "Old Tax Regime",
            Regime::New => "New Tax Regime",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
