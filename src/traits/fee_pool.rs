//! Core pool trait: execute trades and measure balance drift.
//!
//! [`FeePool`] is the abstraction every fee policy implements.  It has
//! one state transition, [`FeePool::trade`], and read accessors for the
//! reserves, the fee bucket and the immutable creation parameters.  The
//! aggregation [`FeePool::simulate`] is provided on top of them.
//!
//! # Constant-Product Invariant
//!
//! Every implementation prices a trade against `k = x · y` taken from the
//! reserves *before* that trade.  Immediately after the pricing step the
//! reserves satisfy `x' · y' = k`; what happens to the fee afterwards
//! (re-injection or a separate bucket) is the policy.
//!
//! # Dispatch Model
//!
//! Policies are dispatched via the `Pool` enum (not `dyn` trait objects);
//! see the `pools` module.

use tracing::trace;

use crate::domain::{
    Drift, FeeBucket, FeePolicy, FeeTier, Reserves, Trade, TradeReceipt, TradeSequence,
};
use crate::error::Result;

/// A two-asset constant-product pool with a fixed fee policy.
///
/// # Errors
///
/// [`trade`](Self::trade) is atomic: when it returns an error the pool
/// state is exactly what it was before the call.
pub trait FeePool {
    /// Applies one trade.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidReserve`](crate::error::SimError::InvalidReserve)
    ///   if the trade would leave a reserve non-positive or non-finite.
    fn trade(&mut self, trade: Trade) -> Result<TradeReceipt>;

    /// Current reserves.
    #[must_use]
    fn reserves(&self) -> Reserves;

    /// Reserves at creation time.
    #[must_use]
    fn initial_reserves(&self) -> Reserves;

    /// Fees held outside the reserves.
    #[must_use]
    fn fees(&self) -> FeeBucket;

    /// Fee tier applied to every trade.
    #[must_use]
    fn fee_tier(&self) -> FeeTier;

    /// The fee policy this pool implements.
    #[must_use]
    fn policy(&self) -> FeePolicy;

    /// Effective holdings `(x + fee_x, y + fee_y)`.
    #[must_use]
    fn holdings(&self) -> (f64, f64) {
        let (r, f) = (self.reserves(), self.fees());
        (r.x() + f.x(), r.y() + f.y())
    }

    /// Current reserve product `x · y`.
    #[must_use]
    fn invariant(&self) -> f64 {
        self.reserves().product()
    }

    /// Relative change of effective holdings since creation.
    #[must_use]
    fn drift(&self) -> Drift {
        Drift::measure(&self.initial_reserves(), &self.reserves(), &self.fees())
    }

    /// Applies every trade in order and returns the resulting drift.
    ///
    /// An empty sequence leaves the pool untouched and returns
    /// [`Drift::ZERO`] for a fresh pool.
    ///
    /// # Errors
    ///
    /// Stops at the first trade that fails and returns its error; trades
    /// before it stay applied.
    fn simulate(&mut self, trades: &TradeSequence) -> Result<Drift> {
        for (i, t) in trades.iter().enumerate() {
            let receipt = self.trade(*t)?;
            trace!(policy = %self.policy(), index = i, %receipt, "trade applied");
        }
        Ok(self.drift())
    }
}
