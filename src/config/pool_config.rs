//! Configuration for a single constant-product pool.

use crate::domain::{FeePolicy, FeeTier, Reserves};
use crate::error::{Result, SimError};

/// Blueprint for one pool: initial reserves, fee tier and fee policy.
///
/// # Derived Values
///
/// - Initial invariant: `k = reserve_x × reserve_y`
/// - Initial price of X in Y: `P₀ = reserve_y / reserve_x`
///
/// # Validation
///
/// Reserves are validated by [`Reserves::new`] and the fee tier by
/// [`FeeTier::new`], so a constructed `PoolConfig` is always valid.
/// [`validate`](Self::validate) re-checks them for configs that were
/// copied around.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::config::PoolConfig;
/// use hydra_fee_sim::domain::FeePolicy;
///
/// let cfg = PoolConfig::from_raw(10_000.0, 100_000.0, FeePolicy::Separate)
///     .expect("positive reserves");
/// assert_eq!(cfg.policy(), FeePolicy::Separate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolConfig {
    reserves: Reserves,
    fee_tier: FeeTier,
    policy: FeePolicy,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    #[must_use]
    pub const fn new(reserves: Reserves, fee_tier: FeeTier, policy: FeePolicy) -> Self {
        Self {
            reserves,
            fee_tier,
            policy,
        }
    }

    /// Creates a config from raw reserves with the default 30 bp tier.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReserve`] if either reserve is not
    /// strictly positive and finite.
    pub fn from_raw(x: f64, y: f64, policy: FeePolicy) -> Result<Self> {
        Ok(Self::new(Reserves::new(x, y)?, FeeTier::default(), policy))
    }

    /// Returns a copy with a different policy and the same reserves and tier.
    #[must_use]
    pub const fn with_policy(&self, policy: FeePolicy) -> Self {
        Self {
            reserves: self.reserves,
            fee_tier: self.fee_tier,
            policy,
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidReserve`] if a reserve is unusable.
    /// - [`SimError::InvalidFee`] if the fee tier exceeds 100%.
    pub fn validate(&self) -> Result<()> {
        Reserves::new(self.reserves.x(), self.reserves.y())?;
        if !self.fee_tier.basis_points().is_valid_percent() {
            return Err(SimError::InvalidFee(self.fee_tier.basis_points().get()));
        }
        Ok(())
    }

    /// Returns the initial reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the fee policy.
    #[must_use]
    pub const fn policy(&self) -> FeePolicy {
        self.policy
    }
}
