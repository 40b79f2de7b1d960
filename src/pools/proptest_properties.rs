//! Property-based tests using `proptest` for fee-policy invariants.
//!
//! 1. **Product floor**: `x · y` never drops below its pre-trade value.
//! 2. **Pricing invariant**: each policy's post-pricing reserves sit on
//!    the pre-trade curve.
//! 3. **Bucket monotonicity**: fee buckets never shrink; Original's stay empty.
//! 4. **Creation data**: initial reserves and fee tier never change.
//! 5. **Empty simulation**: `simulate([])` is `(0, 0)`.
//! 6. **Dispatch**: the `Pool` enum behaves exactly like the inner pool.

use proptest::prelude::*;

use super::{LaterSeparatePool, OriginalPool, Pool, SeparatePool};
use crate::domain::{Drift, FeePolicy, FeeTier, Reserves, Side, Trade, TradeSequence};
use crate::traits::FeePool;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const REL_TOL: f64 = 1e-9;

fn reserves(x: f64, y: f64) -> Reserves {
    let Ok(r) = Reserves::new(x, y) else {
        panic!("valid reserves");
    };
    r
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs())
}

fn make_pool(policy: FeePolicy, x: f64, y: f64) -> Pool {
    Pool::new(reserves(x, y), FeeTier::TIER_0_30_PERCENT, policy)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [1_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = f64> {
    (1_000u32..=10_000_000u32).prop_map(f64::from)
}

/// Trades bounded to a tenth of the smallest reserve on either side.
fn trades_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-100i32..=100i32).prop_map(f64::from), 0..64)
}

fn policy_strategy() -> impl Strategy<Value = FeePolicy> {
    prop::sample::select(FeePolicy::ALL.to_vec())
}

fn scaled(raw: f64, x: f64, y: f64) -> Trade {
    let amount = if raw >= 0.0 {
        raw / 1_000.0 * x
    } else {
        raw / 1_000.0 * y
    };
    let Ok(t) = Trade::new(amount) else {
        panic!("finite trade");
    };
    t
}

// ---------------------------------------------------------------------------
// Property 1: Product floor
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_product_never_decreases(
        policy in policy_strategy(),
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let mut pool = make_pool(policy, x, y);
        for raw in raws {
            let k = pool.invariant();
            let Ok(_) = pool.trade(scaled(raw, x, y)) else {
                return Ok(());
            };
            let after = pool.invariant();
            prop_assert!(
                after >= k * (1.0 - REL_TOL),
                "{policy}: product fell from {k} to {after}"
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Pricing invariant
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_separate_policies_stay_on_curve(
        later in any::<bool>(),
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let policy = if later { FeePolicy::LaterSeparate } else { FeePolicy::Separate };
        let mut pool = make_pool(policy, x, y);
        for raw in raws {
            let k = pool.invariant();
            let Ok(_) = pool.trade(scaled(raw, x, y)) else {
                return Ok(());
            };
            prop_assert!(close(pool.invariant(), k), "{policy}: {} != {k}", pool.invariant());
        }
    }

    #[test]
    fn prop_original_on_curve_before_reinjection(
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let mut pool = OriginalPool::new(reserves(x, y), FeeTier::TIER_0_30_PERCENT);
        for raw in raws {
            let k = pool.invariant();
            let Ok(receipt) = pool.trade(scaled(raw, x, y)) else {
                return Ok(());
            };
            let Some(side) = receipt.input_side() else {
                continue;
            };
            let r = pool.reserves();
            let priced = (r.get(side) - receipt.fee()) * r.get(side.opposite());
            prop_assert!(close(priced, k), "{priced} != {k}");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Bucket monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_buckets_never_shrink(
        policy in policy_strategy(),
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let mut pool = make_pool(policy, x, y);
        for raw in raws {
            let before = pool.fees();
            let Ok(_) = pool.trade(scaled(raw, x, y)) else {
                return Ok(());
            };
            let after = pool.fees();
            prop_assert!(after.x() >= before.x() && after.y() >= before.y());
            if policy == FeePolicy::Original {
                prop_assert!(after.is_empty());
            }
        }
    }

    #[test]
    fn prop_later_separate_fee_on_output_side(
        x in reserve_strategy(),
        y in reserve_strategy(),
        raw in (1i32..=100i32).prop_map(f64::from),
        sell in any::<bool>(),
    ) {
        let mut pool = LaterSeparatePool::new(reserves(x, y), FeeTier::TIER_0_30_PERCENT);
        let raw = if sell { -raw } else { raw };
        let Ok(receipt) = pool.trade(scaled(raw, x, y)) else {
            return Ok(());
        };
        let expected = if sell { Side::X } else { Side::Y };
        prop_assert_eq!(receipt.fee_side(), Some(expected));
        prop_assert!(close(pool.fees().get(expected), receipt.fee()));
        prop_assert_eq!(pool.fees().get(expected.opposite()), 0.0);
    }
}

// ---------------------------------------------------------------------------
// Property 4 & 5: Creation data and empty simulation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_initial_reserves_fixed(
        policy in policy_strategy(),
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let mut pool = make_pool(policy, x, y);
        let trades: TradeSequence = raws.iter().map(|&r| scaled(r, x, y)).collect();
        let _ = pool.simulate(&trades);
        prop_assert_eq!(pool.initial_reserves(), reserves(x, y));
        prop_assert_eq!(pool.fee_tier(), FeeTier::TIER_0_30_PERCENT);
        prop_assert_eq!(pool.policy(), policy);
    }

    #[test]
    fn prop_empty_simulation_is_zero(
        policy in policy_strategy(),
        x in reserve_strategy(),
        y in reserve_strategy(),
    ) {
        let mut pool = make_pool(policy, x, y);
        let Ok(drift) = pool.simulate(&TradeSequence::empty()) else {
            panic!("empty sequence cannot fail");
        };
        prop_assert_eq!(drift, Drift::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Dispatch
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_enum_matches_inner_pool(
        x in reserve_strategy(),
        y in reserve_strategy(),
        raws in trades_strategy(),
    ) {
        let r = reserves(x, y);
        let trades: TradeSequence = raws.iter().map(|&v| scaled(v, x, y)).collect();
        let mut wrapped = Pool::new(r, FeeTier::TIER_0_30_PERCENT, FeePolicy::Separate);
        let mut inner = SeparatePool::new(r, FeeTier::TIER_0_30_PERCENT);
        let (a, b) = (wrapped.simulate(&trades), inner.simulate(&trades));
        prop_assert_eq!(a, b);
        prop_assert_eq!(wrapped.reserves(), inner.reserves());
        prop_assert_eq!(wrapped.fees(), inner.fees());
    }
}
