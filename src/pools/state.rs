//! State shared by every policy: reserves, fee bucket and creation data.

use crate::config::PoolConfig;
use crate::domain::{FeeBucket, FeePolicy, FeeTier, Reserves};
use crate::error::{Result, SimError};

/// The numeric state of one pool.
///
/// `initial` and `fee_tier` are fixed at construction; `reserves` and
/// `fees` are only ever replaced wholesale by a successful trade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PoolState {
    pub(crate) initial: Reserves,
    pub(crate) reserves: Reserves,
    pub(crate) fees: FeeBucket,
    pub(crate) fee_tier: FeeTier,
}

impl PoolState {
    pub(crate) const fn new(reserves: Reserves, fee_tier: FeeTier) -> Self {
        Self {
            initial: reserves,
            reserves,
            fees: FeeBucket::EMPTY,
            fee_tier,
        }
    }

    /// Validates `config` and checks it asks for `expected`.
    pub(crate) fn from_config(config: &PoolConfig, expected: FeePolicy) -> Result<Self> {
        config.validate()?;
        if config.policy() != expected {
            return Err(SimError::InvalidConfiguration(
                "config policy does not match the pool type",
            ));
        }
        Ok(Self::new(config.reserves(), config.fee_tier()))
    }
}
