//! # Hydra Fee Sim
//!
//! Fee-policy simulator for two-asset constant-product pools.
//!
//! The crate replays trade sequences through pools that differ only in how
//! they account for the trading fee, then measures how much of each asset
//! the pool ends up holding:
//!
//! - **Original** (Uniswap v2): fee taken from the input and re-injected.
//! - **Separate**: fee taken from the input and kept in a side bucket.
//! - **Later Separate**: fee taken from the output and kept in a side bucket.
//!
//! A Monte-Carlo [`Benchmark`](bench::Benchmark) runs the same random
//! sequences through the Original baseline and a candidate and counts how
//! often the candidate ends at least as rich on each asset.
//!
//! ## Simulate one sequence
//!
//! ```rust
//! use hydra_fee_sim::config::PoolConfig;
//! use hydra_fee_sim::domain::{FeePolicy, TradeSequence};
//! use hydra_fee_sim::factory::PoolFactory;
//! use hydra_fee_sim::traits::FeePool;
//!
//! let cfg = PoolConfig::from_raw(10_000.0, 100_000.0, FeePolicy::Original)
//!     .expect("positive reserves");
//! let mut pool = PoolFactory::create(&cfg).expect("pool created");
//!
//! let trades = TradeSequence::from_amounts(&[100.0]).expect("finite");
//! let drift = pool.simulate(&trades).expect("no depletion");
//! assert!((drift.x() - 0.01).abs() < 1e-12);
//! ```
//!
//! ## Run a built-in scenario
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use hydra_fee_sim::bench::ExperimentRunner;
//! use hydra_fee_sim::config::find_scenario;
//!
//! let cfg = find_scenario("round-robin-100")
//!     .expect("built in")
//!     .with_batch_size(10)
//!     .with_length(200);
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = ExperimentRunner::run(&cfg, &mut rng).expect("valid scenario");
//! assert_eq!(report.benchmarks().len(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ ExperimentRunner │  ScenarioConfig + injected Rng
//! └────────┬─────────┘
//!          │ SequenceKind::generate
//!          ▼
//! ┌──────────────────┐
//! │    Benchmark     │  baseline vs candidate per sequence
//! └────────┬─────────┘
//!          │ PoolFactory::create(&PoolConfig)
//!          ▼
//! ┌──────────────────┐
//! │      Pools       │  Original, Separate, LaterSeparate (Pool enum)
//! └────────┬─────────┘
//!          │ FeePool trait
//!          ▼
//! ┌──────────────────┐
//! │      Domain      │  Reserves, Trade, FeeTier, Drift, TradeReceipt, …
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Reserves`](domain::Reserves), [`Trade`](domain::Trade), [`FeePolicy`](domain::FeePolicy), etc. |
//! | [`traits`] | Core abstractions: [`FeePool`](traits::FeePool), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig), [`ScenarioConfig`](config::ScenarioConfig) and the built-in catalogue |
//! | [`pools`]  | Policy implementations and the [`Pool`](pools::Pool) dispatch enum |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) for config-driven pool construction |
//! | [`generator`] | Random and patterned trade-sequence generators |
//! | [`bench`] | [`Benchmark`](bench::Benchmark) and [`ExperimentRunner`](bench::ExperimentRunner) |
//! | [`math`]   | Constant-product pricing helpers |
//! | [`error`]  | [`SimError`](error::SimError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod bench;
pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod generator;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
