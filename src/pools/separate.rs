//! Separate fee policy: charged before the trade, held out of the pool.
//!
//! The net/fee split is the same as the original policy, but the fee is
//! accumulated into the bucket of the input asset instead of being
//! re-injected.  Only the net amount moves the reserves.
//!
//! # Trade Algorithm (X → Y, amount `a > 0`)
//!
//! 1. `k = x × y`
//! 2. `fee = a × rate`, `net = a − fee`
//! 3. `x = x + net`, `y = k / x`
//! 4. `fee_x = fee_x + fee`
//!
//! # Invariant
//!
//! `x × y = k` after every trade.

use super::state::PoolState;
use crate::config::PoolConfig;
use crate::domain::{FeePolicy, FeeTier, Reserves, Trade, TradeReceipt};
use crate::error::Result;
use crate::math::{output_amount, price_input};
use crate::traits::{FeePool, FromConfig};

/// A pool that side-pockets the input fee.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparatePool {
    state: PoolState,
}

impl SeparatePool {
    /// Creates a pool with the given initial reserves and fee tier.
    #[must_use]
    pub const fn new(reserves: Reserves, fee_tier: FeeTier) -> Self {
        Self {
            state: PoolState::new(reserves, fee_tier),
        }
    }
}

impl FromConfig<PoolConfig> for SeparatePool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        Ok(Self {
            state: PoolState::from_config(config, FeePolicy::Separate)?,
        })
    }
}

impl FeePool for SeparatePool {
    fn trade(&mut self, trade: Trade) -> Result<TradeReceipt> {
        let Some(side_in) = trade.input_side() else {
            return Ok(TradeReceipt::NOOP);
        };
        let amount_in = trade.magnitude();
        let fee = self.state.fee_tier.fee_on(amount_in);

        let reserves = price_input(&self.state.reserves, side_in, amount_in - fee)?;

        let amount_out = output_amount(&self.state.reserves, &reserves, side_in);
        self.state.reserves = reserves;
        self.state.fees.credit(side_in, fee);
        Ok(TradeReceipt::charged_on_input(
            side_in, amount_in, amount_out, fee, false,
        ))
    }

    state_accessors!(FeePolicy::Separate);
}
