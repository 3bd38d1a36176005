//! Progressive rate bands.
//!
//! A [`RateSlab`] is one band of a progressive table: income from `lower`
//! (inclusive) up to `upper` (exclusive, or unbounded for the last band) is
//! taxed at `rate`. The same shape is used for income-tax slabs and for
//! surcharge slabs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single band in a progressive rate table.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_regime_engine::models::RateSlab;
///
/// let slab = RateSlab::new(dec!(250000), Some(dec!(500000)), dec!(0.05));
/// assert_eq!(slab.amount_within(dec!(300000)), dec!(50000));
/// assert_eq!(slab.amount_within(dec!(900000)), dec!(250000));
/// assert_eq!(slab.amount_within(dec!(100000)), dec!(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSlab {
    /// Lower bound of the band (inclusive).
    pub lower: Decimal,
    /// Upper bound of the band, `None` for the unbounded top band.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate as a fraction (0.05 for 5%).
    pub rate: Decimal,
}

impl RateSlab {
    /// Creates a new rate slab.
    pub fn new(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> Self {
        Self { lower, upper, rate }
    }

    /// Returns true if this is the unbounded top band.
    pub fn is_unbounded(&self) -> bool {
        self.upper.is_none()
    }

    /// Returns the portion of `income` that falls inside this band.
    pub fn amount_within(&self, income: Decimal) -> Decimal {
        if income <= self.lower {
            return Decimal::ZERO;
        }
        let ceiling = match self.upper {
            Some(upper) => income.min(upper),
            None => income,
        };
        ceiling - self.lower
    }

    /// Returns true if `income` lies in the half-open bracket `(lower, upper]`.
    ///
    /// Surcharge bands are selected with this bracket, unlike income-tax
    /// slabs which are applied cumulatively.
    pub fn brackets(&self, income: Decimal) -> bool {
        income > self.lower && self.upper.is_none_or(|upper| income <= upper)
    }
}
