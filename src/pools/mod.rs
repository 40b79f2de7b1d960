//! Fee-policy pool implementations and the [`Pool`] dispatch enum.
//!
//! Each policy is its own pool type implementing [`FeePool`](crate::traits::FeePool).
//! The [`Pool`] enum provides static dispatch across them.
//!
//! # Pool Types
//!
//! | Policy | Pool | Fee |
//! |--------|------|-----|
//! | `original` | [`OriginalPool`] | input fee, re-injected |
//! | `separate` | [`SeparatePool`] | input fee, bucketed |
//! | `later-separate` | [`LaterSeparatePool`] | output fee, bucketed |

/// Generates the read accessors every policy shares from its `state` field.
macro_rules! state_accessors {
    ($policy:expr) => {
        fn reserves(&self) -> $crate::domain::Reserves {
            self.state.reserves
        }

        fn initial_reserves(&self) -> $crate::domain::Reserves {
            self.state.initial
        }

        fn fees(&self) -> $crate::domain::FeeBucket {
            self.state.fees
        }

        fn fee_tier(&self) -> $crate::domain::FeeTier {
            self.state.fee_tier
        }

        fn policy(&self) -> $crate::domain::FeePolicy {
            $policy
        }
    };
}

mod later_separate;
mod original;
mod pool;
mod separate;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use later_separate::LaterSeparatePool;
pub use original::OriginalPool;
pub use pool::Pool;
pub use separate::SeparatePool;
