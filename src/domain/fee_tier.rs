//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use serde::Serialize;

use super::BasisPoints;
use crate::error::{Result, SimError};

/// The fee rate charged on every trade, validated to lie within 0–100%.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::{BasisPoints, FeeTier};
///
/// let tier = FeeTier::default();
/// assert_eq!(tier, FeeTier::TIER_0_30_PERCENT);
/// assert!(FeeTier::new(BasisPoints::new(10_001)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee at all.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05% fee (5 bp).
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), the Uniswap v2 rate and the simulator default.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp).
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFee`] if `basis_points` exceeds 100%.
    pub fn new(basis_points: BasisPoints) -> Result<Self> {
        if !basis_points.is_valid_percent() {
            return Err(SimError::InvalidFee(basis_points.get()));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the fee rate as a fraction (`0.003` for 30 bp).
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.0.as_fraction()
    }

    /// Computes the fee charged on `amount`.
    #[must_use]
    pub fn fee_on(&self, amount: f64) -> f64 {
        self.0.apply(amount)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
