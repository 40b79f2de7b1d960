//! Baseline-versus-candidate comparison over a batch of sequences.

use core::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::PoolConfig;
use crate::domain::{Drift, FeePolicy, FeeTier, Reserves, TradeSequence};
use crate::error::Result;
use crate::factory::PoolFactory;
use crate::traits::FeePool;

/// The policy every candidate is measured against.
pub const BASELINE: FeePolicy = FeePolicy::Original;

/// Drifts of the baseline and the candidate after the same sequence.
///
/// Ties count in the candidate's favour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    baseline: Drift,
    candidate: Drift,
}

impl Outcome {
    /// Pairs two drifts.
    #[must_use]
    pub const fn new(baseline: Drift, candidate: Drift) -> Self {
        Self {
            baseline,
            candidate,
        }
    }

    /// Baseline drift.
    #[must_use]
    pub const fn baseline(&self) -> Drift {
        self.baseline
    }

    /// Candidate drift.
    #[must_use]
    pub const fn candidate(&self) -> Drift {
        self.candidate
    }

    /// Candidate ends at least as rich in X.
    #[must_use]
    pub fn win_x(&self) -> bool {
        self.candidate.x() >= self.baseline.x()
    }

    /// Candidate ends at least as rich in Y.
    #[must_use]
    pub fn win_y(&self) -> bool {
        self.candidate.y() >= self.baseline.y()
    }

    /// Candidate wins on both assets.
    #[must_use]
    pub fn win_xy(&self) -> bool {
        self.win_x() && self.win_y()
    }

    /// Candidate is strictly worse on both assets.
    #[must_use]
    pub fn fail_xy(&self) -> bool {
        self.candidate.x() < self.baseline.x() && self.candidate.y() < self.baseline.y()
    }
}

/// Win/loss tallies of one candidate over one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkReport {
    candidate: FeePolicy,
    trials: usize,
    win_x: usize,
    win_y: usize,
    win_xy: usize,
    fail_xy: usize,
}

impl BenchmarkReport {
    /// An empty report for `candidate`.
    #[must_use]
    pub const fn new(candidate: FeePolicy) -> Self {
        Self {
            candidate,
            trials: 0,
            win_x: 0,
            win_y: 0,
            win_xy: 0,
            fail_xy: 0,
        }
    }

    /// Adds one trial.
    pub fn record(&mut self, outcome: &Outcome) {
        self.trials += 1;
        self.win_x += usize::from(outcome.win_x());
        self.win_y += usize::from(outcome.win_y());
        self.win_xy += usize::from(outcome.win_xy());
        self.fail_xy += usize::from(outcome.fail_xy());
    }

    /// The candidate policy.
    #[must_use]
    pub const fn candidate(&self) -> FeePolicy {
        self.candidate
    }

    /// Number of sequences compared.
    #[must_use]
    pub const fn trials(&self) -> usize {
        self.trials
    }

    /// Trials where the candidate's X drift was at least the baseline's.
    #[must_use]
    pub const fn win_x(&self) -> usize {
        self.win_x
    }

    /// Trials where the candidate's Y drift was at least the baseline's.
    #[must_use]
    pub const fn win_y(&self) -> usize {
        self.win_y
    }

    /// Trials won on both assets.
    #[must_use]
    pub const fn win_xy(&self) -> usize {
        self.win_xy
    }

    /// Trials lost on both assets.
    #[must_use]
    pub const fn fail_xy(&self) -> usize {
        self.fail_xy
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Benchmark {}...", self.candidate)?;
        writeln!(f, "X WIN: {}", self.win_x)?;
        writeln!(f, "Y WIN: {}", self.win_y)?;
        writeln!(f, "X Y WIN: {}", self.win_xy)?;
        write!(f, "X Y FAIL: {}", self.fail_xy)
    }
}

/// Runs candidate policies against the [`BASELINE`] on fresh pools.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::bench::Benchmark;
/// use hydra_fee_sim::domain::{FeePolicy, FeeTier, Reserves, TradeSequence};
///
/// let r = Reserves::new(10_000.0, 100_000.0).expect("positive");
/// let batch = vec![TradeSequence::from_amounts(&[100.0, -1_000.0]).expect("finite")];
/// let report = Benchmark::new(r, FeeTier::default())
///     .run(&batch, FeePolicy::Separate)
///     .expect("no depletion");
/// assert_eq!(report.trials(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    initial: Reserves,
    fee_tier: FeeTier,
}

impl Benchmark {
    /// Creates a benchmark whose pools all start from `initial`.
    #[must_use]
    pub const fn new(initial: Reserves, fee_tier: FeeTier) -> Self {
        Self { initial, fee_tier }
    }

    /// Simulates `trades` on a fresh baseline and a fresh candidate pool.
    ///
    /// # Errors
    ///
    /// Any pool construction or trade error.
    pub fn compare(&self, trades: &TradeSequence, candidate: FeePolicy) -> Result<Outcome> {
        let mut base = PoolFactory::create(&self.pool_config(BASELINE))?;
        let mut cand = PoolFactory::create(&self.pool_config(candidate))?;
        Ok(Outcome::new(base.simulate(trades)?, cand.simulate(trades)?))
    }

    /// Compares `candidate` with the baseline on every sequence.
    ///
    /// An empty batch yields a report with all counters at zero.
    ///
    /// # Errors
    ///
    /// Stops at the first sequence that fails on either pool.
    pub fn run(&self, batch: &[TradeSequence], candidate: FeePolicy) -> Result<BenchmarkReport> {
        let mut report = BenchmarkReport::new(candidate);
        for (trial, trades) in batch.iter().enumerate() {
            let outcome = self.compare(trades, candidate)?;
            debug!(
                trial,
                %candidate,
                base_x = outcome.baseline().x(),
                base_y = outcome.baseline().y(),
                cand_x = outcome.candidate().x(),
                cand_y = outcome.candidate().y(),
                "trial compared"
            );
            report.record(&outcome);
        }
        info!(
            %candidate,
            trials = report.trials(),
            win_x = report.win_x(),
            win_y = report.win_y(),
            win_xy = report.win_xy(),
            fail_xy = report.fail_xy(),
            "benchmark finished"
        );
        Ok(report)
    }

    const fn pool_config(&self, policy: FeePolicy) -> PoolConfig {
        PoolConfig::new(self.initial, self.fee_tier, policy)
    }
}
