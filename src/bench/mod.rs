//! Monte-Carlo benchmarking of fee policies.
//!
//! [`Benchmark`] replays each sequence of a batch on a fresh
//! [`Original`](crate::domain::FeePolicy::Original) pool and a fresh
//! candidate pool and tallies which one ends with the larger drift.
//! [`ExperimentRunner`] drives a whole [`ScenarioConfig`](crate::config::ScenarioConfig):
//! optional sample simulation, batch generation and one benchmark per
//! candidate.

mod benchmark;
mod runner;

pub use benchmark::{Benchmark, BenchmarkReport, Outcome, BASELINE};
pub use runner::{ExperimentRunner, ScenarioReport, SimulationSummary};
