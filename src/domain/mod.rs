//! Fundamental domain value types used throughout the simulator.
//!
//! This module contains the value types that model a two-asset pool:
//! reserves, fee buckets, fee tiers and policies, trades, drifts and
//! trade receipts.  Types with invariants use validated constructors.

mod basis_points;
mod drift;
mod fee_policy;
mod fee_tier;
mod reserves;
mod trade;
mod trade_receipt;

pub(crate) use reserves::ensure_positive;

pub use basis_points::BasisPoints;
pub use drift::Drift;
pub use fee_policy::FeePolicy;
pub use fee_tier::FeeTier;
pub use reserves::{FeeBucket, Reserves, Side};
pub use trade::{Trade, TradeSequence};
pub use trade_receipt::TradeReceipt;
