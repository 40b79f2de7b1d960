//! Scenario driver: sample simulation, batch generation, benchmarks.

use core::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::info;

use super::{Benchmark, BenchmarkReport, BASELINE};
use crate::config::ScenarioConfig;
use crate::domain::{Drift, FeePolicy, TradeSequence};
use crate::error::Result;
use crate::factory::PoolFactory;
use crate::traits::FeePool;

/// End state of one pool after the sample sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationSummary {
    policy: FeePolicy,
    holdings: (f64, f64),
    drift: Drift,
}

impl SimulationSummary {
    /// The simulated policy.
    #[must_use]
    pub const fn policy(&self) -> FeePolicy {
        self.policy
    }

    /// Effective holdings `(x + fee_x, y + fee_y)` at the end.
    #[must_use]
    pub const fn holdings(&self) -> (f64, f64) {
        self.holdings
    }

    /// Drift at the end.
    #[must_use]
    pub const fn drift(&self) -> Drift {
        self.drift
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Do {} swap simulation...", self.policy)?;
        writeln!(f, "X: {:.6} {:.6}%", self.holdings.0, self.drift.x() * 100.0)?;
        write!(f, "Y: {:.6} {:.6}%", self.holdings.1, self.drift.y() * 100.0)
    }
}

/// Everything one scenario produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    name: String,
    title: String,
    samples: Vec<SimulationSummary>,
    benchmarks: Vec<BenchmarkReport>,
}

impl ScenarioReport {
    /// Catalogue name of the scenario.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Report heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sample simulations, baseline first; empty unless the scenario is verbose.
    #[must_use]
    pub fn samples(&self) -> &[SimulationSummary] {
        &self.samples
    }

    /// One report per candidate, in configuration order.
    #[must_use]
    pub fn benchmarks(&self) -> &[BenchmarkReport] {
        &self.benchmarks
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for s in &self.samples {
            writeln!(f, "{s}")?;
        }
        for b in &self.benchmarks {
            writeln!(f, "{b}")?;
        }
        Ok(())
    }
}

/// Executes [`ScenarioConfig`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs one scenario.
    ///
    /// 1. Validate the configuration.
    /// 2. If verbose, simulate one sample sequence under the baseline and
    ///    each candidate.
    /// 3. Generate `batch_size` independent sequences.
    /// 4. Benchmark every candidate against the same batch.
    ///
    /// # Errors
    ///
    /// Any validation, generation or trade error.
    pub fn run<R: Rng + ?Sized>(config: &ScenarioConfig, rng: &mut R) -> Result<ScenarioReport> {
        config.validate()?;
        info!(scenario = config.name(), kind = %config.kind(), "scenario started");

        let samples = if config.verbose() {
            let trades = config.kind().generate(&config.reserves(), config.length(), rng)?;
            Self::sample(config, &trades)?
        } else {
            Vec::new()
        };

        let batch = (0..config.batch_size())
            .map(|_| config.kind().generate(&config.reserves(), config.length(), rng))
            .collect::<Result<Vec<_>>>()?;

        let bench = Benchmark::new(config.reserves(), config.fee_tier());
        let benchmarks = config
            .candidates()
            .iter()
            .map(|&candidate| bench.run(&batch, candidate))
            .collect::<Result<Vec<_>>>()?;

        info!(scenario = config.name(), "scenario finished");
        Ok(ScenarioReport {
            name: config.name().to_owned(),
            title: config.title().to_owned(),
            samples,
            benchmarks,
        })
    }

    fn sample(config: &ScenarioConfig, trades: &TradeSequence) -> Result<Vec<SimulationSummary>> {
        let mut policies = vec![BASELINE];
        policies.extend(config.candidates().iter().filter(|&&p| p != BASELINE));
        policies
            .into_iter()
            .map(|policy| {
                let mut pool = PoolFactory::create(&config.pool_config(policy))?;
                let drift = pool.simulate(trades)?;
                Ok(SimulationSummary {
                    policy,
                    holdings: pool.holdings(),
                    drift,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::find_scenario;
    use crate::error::SimError;

    fn small(name: &str) -> ScenarioConfig {
        let Ok(cfg) = find_scenario(name) else {
            panic!("built in");
        };
        cfg.with_batch_size(4).with_length(50)
    }

    #[test]
    fn verbose_run_has_samples_and_benchmarks() {
        let mut rng = StdRng::seed_from_u64(11);
        let Ok(report) = ExperimentRunner::run(&small("full-random-10"), &mut rng) else {
            panic!("valid scenario");
        };
        let policies: Vec<_> = report.samples().iter().map(SimulationSummary::policy).collect();
        assert_eq!(
            policies,
            vec![FeePolicy::Original, FeePolicy::LaterSeparate, FeePolicy::Separate]
        );
        assert_eq!(report.benchmarks().len(), 2);
        assert!(report.benchmarks().iter().all(|b| b.trials() == 4));
    }

    #[test]
    fn quiet_run_skips_samples() {
        let mut rng = StdRng::seed_from_u64(11);
        let Ok(report) =
            ExperimentRunner::run(&small("round-robin-10").with_verbose(false), &mut rng)
        else {
            panic!("valid scenario");
        };
        assert!(report.samples().is_empty());
    }

    #[test]
    fn same_seed_same_report() {
        let cfg = small("full-random-3");
        let (mut a, mut b) = (StdRng::seed_from_u64(5), StdRng::seed_from_u64(5));
        let (Ok(r1), Ok(r2)) = (
            ExperimentRunner::run(&cfg, &mut a),
            ExperimentRunner::run(&cfg, &mut b),
        ) else {
            panic!("valid scenario");
        };
        assert_eq!(r1, r2);
    }

    #[test]
    fn invalid_config_rejected_before_rng_use() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            ExperimentRunner::run(&small("xy-always-draw").with_batch_size(0), &mut rng),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn display_starts_with_title() {
        let mut rng = StdRng::seed_from_u64(1);
        let Ok(report) = ExperimentRunner::run(&small("x-mono-increase"), &mut rng) else {
            panic!("valid scenario");
        };
        let text = report.to_string();
        assert!(text.starts_with("1/1000 X MONO INCREASE\nDo original swap simulation...\n"));
        assert!(text.contains("Benchmark later separate...\nX WIN: "));
    }
}
