//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_fee_sim::prelude::*;
//! ```

pub use crate::bench::{Benchmark, BenchmarkReport, ExperimentRunner, ScenarioReport};
pub use crate::config::{PoolConfig, ScenarioConfig};
pub use crate::domain::{
    BasisPoints, Drift, FeeBucket, FeePolicy, FeeTier, Reserves, Side, Trade, TradeReceipt,
    TradeSequence,
};
pub use crate::error::{Result, SimError};
pub use crate::factory::PoolFactory;
pub use crate::generator::SequenceKind;
pub use crate::pools::Pool;
pub use crate::traits::{FeePool, FromConfig};
