//! Later-separate fee policy: charged on the output, held out of the pool.
//!
//! The gross input is priced first; the fee is then a fraction of the
//! output the pool pays, not of the input the trader offers.  The trader
//! is credited the output minus the fee, and the fee lands in the bucket
//! of the output asset.  The reserves themselves follow the invariant
//! exactly.
//!
//! # Trade Algorithm (X → Y, amount `a > 0`)
//!
//! 1. `k = x × y`
//! 2. `x' = x + a`, `raw_out = y − k / x'`
//! 3. `fee = raw_out × rate`
//! 4. `x = x'`, `y = y − raw_out`, `fee_y = fee_y + fee`
//! 5. trader receives `raw_out − fee`
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

/// A pool that charges its fee on the output side after pricing.
#[derive(Debug, Clone, PartialEq)]
pub struct LaterSeparatePool {
    state: PoolState,
}

impl LaterSeparatePool {
    /// Creates a pool with the given initial reserves and fee tier.
    #[must_use]
    pub const fn new(reserves: Reserves, fee_tier: FeeTier) -> Self {
        Self {
            state: PoolState::new(reserves, fee_tier),
        }
    }
}

impl FromConfig<PoolConfig> for LaterSeparatePool {
    fn from_config(config: &PoolConfig) -> Result<Self> {
        Ok(Self {
            state: PoolState::from_config(config, FeePolicy::LaterSeparate)?,
        })
    }
}

impl FeePool for LaterSeparatePool {
    fn trade(&mut self, trade: Trade) -> Result<TradeReceipt> {
        let Some(side_in) = trade.input_side() else {
            return Ok(TradeReceipt::NOOP);
        };
        let amount_in = trade.magnitude();

        let reserves = price_input(&self.state.reserves, side_in, amount_in)?;
        let raw_out = output_amount(&self.state.reserves, &reserves, side_in);
        let fee = self.state.fee_tier.fee_on(raw_out);

        self.state.reserves = reserves;
        self.state.fees.credit(side_in.opposite(), fee);
        Ok(TradeReceipt::charged_on_output(
            side_in,
            amount_in,
            raw_out - fee,
            fee,
        ))
    }

    state_accessors!(FeePolicy::LaterSeparate);
}
