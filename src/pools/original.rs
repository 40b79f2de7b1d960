//! Original fee policy (Uniswap V2 style).
//!
//! The fee is deducted from the input before pricing and then re-injected
//! into the input reserve, so it grows the liquidity shared by every
//! liquidity provider.  The fee bucket stays empty.
//!
//! # Trade Algorithm (X → Y, amount `a > 0`)
//!
//! 1. `k = x × y`
//! 2. `fee = a × rate`, `net = a − fee`
//! 3. `x = x + net`, `y = k / x`
//! 4. `x = x + fee`
//!
//! Negative trades mirror the steps with X and Y swapped.
//!
//! # Invariant
//!
//! After every trade `(x − fee) × y = k`, hence `x × y ≥ k`.

use super::state::PoolState;
use crate::config::PoolConfig;
use crate::domain::{FeePolicy, FeeTier, Reserves, Trade, TradeReceipt};
use crate::error::Result;
use crate::math::{output_amount, price_input};
use crate::traits::{FeePool, FromConfig};

/// A pool that keeps its fees inside the reserves.
///
/// # Example
///
/// ```rust
/// use hydra_fee_sim::domain::{FeeTier, Reserves, Trade};
/// use hydra_fee_sim::pools::OriginalPool;
/// use hydra_fee_sim::traits::FeePool;
///
/// let r = Reserves::new(10_000.0, 100_000.0).expect("valid");
/// let mut pool = OriginalPool::new(r, FeeTier::default());
/// pool.trade(Trade::new(100.0).expect("finite")).expect("trade ok");
///
/// assert!((pool.reserves().x() - 10_100.0).abs() < 1e-9);
/// assert!(pool.fees().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OriginalPool {
    state: PoolState,
}

impl OriginalPool {
    /// Creates a pool with the given initial reserves and fee tier.
    #[must_use]
    pub const fn new(reserves: Reserves, fee_tier: FeeTier) -> Self {
        Self {
            state: PoolState::new(reserves, fee_tier),
        }
    }
}

impl FromConfig<PoolConfig> for OriginalPool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        Ok(Self {
            state: PoolState::from_config(config, FeePolicy::Original)?,
        })
    }
}

impl FeePool for OriginalPool {
    fn trade(&mut self, trade: Trade) -> Result<TradeReceipt> {
        let Some(side_in) = trade.input_side() else {
            return Ok(TradeReceipt::NOOP);
        };
        let amount_in = trade.magnitude();
        let fee = self.state.fee_tier.fee_on(amount_in);

        let priced = price_input(&self.state.reserves, side_in, amount_in - fee)?;
        let reserves = priced.with(side_in, priced.get(side_in) + fee)?;

        let amount_out = output_amount(&self.state.reserves, &reserves, side_in);
        self.state.reserves = reserves;
        Ok(TradeReceipt::charged_on_input(
            side_in, amount_in, amount_out, fee, true,
        ))
    }

    state_accessors!(FeePolicy::Original);
}
