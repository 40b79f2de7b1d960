//! Pool factory implementation.

use tracing::debug;

use crate::config::PoolConfig;
use crate::domain::{FeePolicy, FeeTier, Reserves};
use crate::error::Result;
use crate::pools::{LaterSeparatePool, OriginalPool, Pool, SeparatePool};
use crate::traits::FromConfig;

/// Stateless factory for creating pools from configuration.
///
/// `PoolFactory` is the single entry point the benchmark uses to build
/// fresh pools.  It validates the configuration, delegates to the policy's
/// [`FromConfig`] implementation and wraps the result in a [`Pool`].
///
/// # Example
///
/// ```rust
/// use hydra_fee_sim::config::PoolConfig;
/// use hydra_fee_sim::domain::FeePolicy;
/// use hydra_fee_sim::factory::PoolFactory;
/// use hydra_fee_sim::traits::FeePool;
///
/// let cfg = PoolConfig::from_raw(10_000.0, 100_000.0, FeePolicy::LaterSeparate)
///     .expect("positive reserves");
/// let pool = PoolFactory::create(&cfg).expect("pool created");
/// assert_eq!(pool.policy(), FeePolicy::LaterSeparate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolFactory;

impl PoolFactory {
    /// Creates a fresh pool from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidReserve`](crate::error::SimError::InvalidReserve)
    ///   or [`SimError::InvalidFee`](crate::error::SimError::InvalidFee)
    ///   if the configuration fails validation.
    pub fn create(config: &PoolConfig) -> Result<Pool> {
        config.validate()?;
        let pool = match config.policy() {
            FeePolicy::Original => Pool::Original(OriginalPool::from_config(config)?),
            FeePolicy::Separate => Pool::Separate(SeparatePool::from_config(config)?),
            FeePolicy::LaterSeparate => {
                Pool::LaterSeparate(LaterSeparatePool::from_config(config)?)
            }
        };
        debug!(
            policy = %config.policy(),
            x = config.reserves().x(),
            y = config.reserves().y(),
            "pool created"
        );
        Ok(pool)
    }

    /// Creates a fresh pool from a textual policy tag such as
    /// `"later-separate"`.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidPolicy`](crate::error::SimError::InvalidPolicy)
    ///   if `tag` names no policy.
    /// - Any error from [`create`](Self::create).
    pub fn from_tag(reserves: Reserves, fee_tier: FeeTier, tag: &str) -> Result<Pool> {
        let policy: FeePolicy = tag.parse()?;
        Self::create(&PoolConfig::new(reserves, fee_tier, policy))
    }
}
