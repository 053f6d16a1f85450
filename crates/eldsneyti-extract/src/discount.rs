//! Provider discount policies

use serde::{Deserialize, Serialize};

/// Precision applied to a subtracted discount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precision {
    /// Keep the raw difference
    Exact,
    /// Truncate toward zero at the tenths digit (`120.27` becomes `120.2`)
    TruncatedTenths,
}

impl Precision {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Precision::Exact => value,
            Precision::TruncatedTenths => (value * 10.0).trunc() / 10.0,
        }
    }
}

/// How a provider's discounted price is derived, identical for both fuels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// No discount scheme; discount fields stay absent
    None,
    /// Flat per-litre discount for card holders
    Fixed { amount: f64 },
    /// Discounted price is a separate field of the source document
    Published,
    /// Spending-based tiers; the lowest tier is the only one every customer gets
    MinimumTier { amount: f64, precision: Precision },
}

impl DiscountPolicy {
    /// Discounted price derived from `base`.
    ///
    /// `None` for [`DiscountPolicy::None`] and for [`DiscountPolicy::Published`],
    /// whose value has to come from the document itself.
    pub fn apply(&self, base: f64) -> Option<f64> {
        match *self {
            DiscountPolicy::None | DiscountPolicy::Published => None,
            DiscountPolicy::Fixed { amount } => Some(base - amount),
            DiscountPolicy::MinimumTier { amount, precision } => {
                Some(precision.apply(base - amount))
            }
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, DiscountPolicy::Published)
    }
}
