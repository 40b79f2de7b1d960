//! Fee-policy benchmark CLI.
//!
//! Runs the built-in scenarios (or a chosen subset) and prints one report
//! per scenario, as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hydra_fee_sim::bench::{ExperimentRunner, ScenarioReport};
use hydra_fee_sim::config::{builtin_scenarios, find_scenario, ScenarioConfig};
use hydra_fee_sim::domain::{BasisPoints, FeeTier};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hydra-fee-sim")]
#[command(about = "Compare AMM fee policies by Monte-Carlo simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// RNG seed; a random one is drawn and logged when absent
    #[arg(long, env = "HYDRA_FEE_SIM_SEED")]
    seed: Option<u64>,

    /// Sequences per benchmark batch
    #[arg(long)]
    batch: Option<usize>,

    /// Trades per sequence
    #[arg(long)]
    length: Option<usize>,

    /// Fee tier in basis points
    #[arg(long, default_value_t = 30)]
    fee_bps: u32,

    /// Scenario to run (repeatable); all built-in scenarios when absent
    #[arg(long = "scenario", value_name = "NAME")]
    scenarios: Vec<String>,

    /// Skip the sample simulation before each batch
    #[arg(short, long)]
    quiet: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level, overridden by RUST_LOG
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in scenarios
    List,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct RunOutput<'a> {
    seed: u64,
    reports: &'a [ScenarioReport],
}

fn scenarios(cli: &Cli) -> Result<Vec<ScenarioConfig>> {
    let base = if cli.scenarios.is_empty() {
        builtin_scenarios()?
    } else {
        cli.scenarios
            .iter()
            .map(|name| find_scenario(name))
            .collect::<hydra_fee_sim::error::Result<Vec<_>>>()?
    };
    let fee_tier = FeeTier::new(BasisPoints::new(cli.fee_bps))
        .with_context(|| format!("invalid --fee-bps {}", cli.fee_bps))?;
    Ok(base
        .into_iter()
        .map(|cfg| {
            let cfg = cfg.with_fee_tier(fee_tier).with_verbose(!cli.quiet);
            let cfg = match cli.batch {
                Some(n) => cfg.with_batch_size(n),
                None => cfg,
            };
            match cli.length {
                Some(n) => cfg.with_length(n),
                None => cfg,
            }
        })
        .collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .with_context(|| format!("invalid log level {:?}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(Command::List) = cli.command {
        for cfg in builtin_scenarios()? {
            println!("{:<18} {}", cfg.name(), cfg.title());
        }
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "seeding rng");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut reports = Vec::new();
    for cfg in scenarios(&cli)? {
        let report = ExperimentRunner::run(&cfg, &mut rng)
            .with_context(|| format!("scenario {} failed", cfg.name()))?;
        if cli.format == Format::Text {
            println!("{report}");
        }
        reports.push(report);
    }

    if cli.format == Format::Json {
        let out = RunOutput {
            seed,
            reports: &reports,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    }
    Ok(())
}
