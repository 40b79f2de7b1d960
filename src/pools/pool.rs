//! Enum dispatch wrapper for all fee policies.
//!
//! [`Pool`] wraps every concrete policy implementation behind a single
//! enum, so a benchmark can hold a baseline and a candidate of different
//! policies without `dyn` trait objects.

use super::{LaterSeparatePool, OriginalPool, SeparatePool};
use crate::domain::{FeeBucket, FeePolicy, FeeTier, Reserves, Trade, TradeReceipt};
use crate::error::Result;
use crate::traits::FeePool;

/// Static-dispatch enum over the closed set of fee policies.
///
/// The enum implements [`FeePool`] by delegating every method to the
/// inner pool via `match`.  Adding a policy means adding a variant and
/// its pool type; existing variants are untouched.
///
/// # Example
///
/// ```rust
/// use hydra_fee_sim::domain::{FeePolicy, TradeSequence};
/// use hydra_fee_sim::pools::Pool;
/// use hydra_fee_sim::traits::FeePool;
///
/// let mut pool = Pool::with_initial(10_000.0, 100_000.0, FeePolicy::Separate)
///     .expect("positive reserves");
/// let trades = TradeSequence::from_amounts(&[100.0, -1_000.0]).expect("finite");
/// let drift = pool.simulate(&trades).expect("no depletion");
/// assert!(drift.x().is_finite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Pool {
    /// Fee re-injected into the reserves.
    Original(OriginalPool),

    /// Input fee held in a separate bucket.
    Separate(SeparatePool),

    /// Output fee held in a separate bucket.
    LaterSeparate(LaterSeparatePool),
}

impl Pool {
    /// Creates a fresh pool for `policy`.
    #[must_use]
    pub const fn new(reserves: Reserves, fee_tier: FeeTier, policy: FeePolicy) -> Self {
        match policy {
            FeePolicy::Original => Self::Original(OriginalPool::new(reserves, fee_tier)),
            FeePolicy::Separate => Self::Separate(SeparatePool::new(reserves, fee_tier)),
            FeePolicy::LaterSeparate => {
                Self::LaterSeparate(LaterSeparatePool::new(reserves, fee_tier))
            }
        }
    }

    /// Creates a fresh pool from raw reserves with the default fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReserve`](crate::error::SimError::InvalidReserve)
    /// if either reserve is not strictly positive and finite.
    pub fn with_initial(x: f64, y: f64, policy: FeePolicy) -> Result<Self> {
        Ok(Self::new(Reserves::new(x, y)?, FeeTier::default(), policy))
    }
}

/// Delegates a method call to every `Pool` variant.
macro_rules! delegate {
    ($self:ident, $method:ident ( $($arg:expr),* )) => {
        match $self {
            Pool::Original(p) => p.$method($($arg),*),
            Pool::Separate(p) => p.$method($($arg),*),
            Pool::LaterSeparate(p) => p.$method($($arg),*),
        }
    };
}

impl FeePool for Pool {
    fn trade(&mut self, trade: Trade) -> Result<TradeReceipt> {
        delegate!(self, trade(trade))
    }

    fn reserves(&self) -> Reserves {
        delegate!(self, reserves())
    }

    fn initial_reserves(&self) -> Reserves {
        delegate!(self, initial_reserves())
    }

    fn fees(&self) -> FeeBucket {
        delegate!(self, fees())
    }

    fn fee_tier(&self) -> FeeTier {
        delegate!(self, fee_tier())
    }

    fn policy(&self) -> FeePolicy {
        delegate!(self, policy())
    }
}
