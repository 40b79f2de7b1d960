//! Fee policy comparison example.
//!
//! Replays one fixed trade sequence through all three fee policies,
//! prints each pool's end state, then runs a small seeded benchmark.
//!
//! # Run
//!
//! ```bash
//! cargo run --example fee_policies
//! ```

use hydra_fee_sim::bench::Benchmark;
use hydra_fee_sim::config::PoolConfig;
use hydra_fee_sim::domain::{FeePolicy, FeeTier, Reserves, TradeSequence};
use hydra_fee_sim::factory::PoolFactory;
use hydra_fee_sim::generator::SequenceKind;
use hydra_fee_sim::traits::FeePool;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fee policies on x · y = k ===\n");

    // ── 1. Pool parameters ──────────────────────────────────────────────
    let reserves = Reserves::new(10_000.0, 100_000.0)?;
    let fee = FeeTier::TIER_0_30_PERCENT;
    println!("Initial reserves: {reserves}");
    println!("Fee tier:         {fee}");

    // ── 2. One buy, one sell, one buy ───────────────────────────────────
    let trades = TradeSequence::from_amounts(&[100.0, -1_000.0, 250.0])?;
    println!("Trades:           {:?}\n", trades.amounts());

    for policy in FeePolicy::ALL {
        let mut pool = PoolFactory::create(&PoolConfig::new(reserves, fee, policy))?;
        println!("--- {policy} ---");
        for t in &trades {
            let receipt = pool.trade(*t)?;
            println!("  {receipt}");
        }
        let (hx, hy) = pool.holdings();
        println!("  Reserves:  {}", pool.reserves());
        println!("  Fees:      x={:.6} y={:.6}", pool.fees().x(), pool.fees().y());
        println!("  Holdings:  x={hx:.6} y={hy:.6}");
        println!("  Drift:     {}\n", pool.drift());
    }

    // ── 3. Seeded benchmark ─────────────────────────────────────────────
    let kind = SequenceKind::FullRandom { threshold: 10 };
    let mut rng = StdRng::seed_from_u64(2024);
    let batch = (0..200)
        .map(|_| kind.generate(&reserves, 1_000, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    let bench = Benchmark::new(reserves, fee);
    for candidate in [FeePolicy::LaterSeparate, FeePolicy::Separate] {
        println!("{}\n", bench.run(&batch, candidate)?);
    }

    Ok(())
}
