//! Random trade-sequence families.
//!
//! Both families draw trade magnitudes uniformly from `[0, reserve / threshold)`
//! using integer division of the floored reserve, so a larger threshold
//! means smaller trades.  Randomness is injected by the caller.

use rand::Rng;

use crate::domain::{Reserves, Trade, TradeSequence};
use crate::error::{Result, SimError};

/// Exclusive upper bounds for buy and sell magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBounds {
    buy: u64,
    sell: u64,
}

impl DrawBounds {
    /// Derives `floor(x) / threshold` and `floor(y) / threshold`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidThreshold`] if `threshold` is zero or
    /// leaves an empty range on either side.
    pub fn new(initial: &Reserves, threshold: u32) -> Result<Self> {
        if threshold == 0 {
            return Err(SimError::InvalidThreshold {
                context: "threshold",
                value: 0,
            });
        }
        let buy = floor_div(initial.x(), threshold);
        let sell = floor_div(initial.y(), threshold);
        if buy == 0 {
            return Err(SimError::InvalidThreshold {
                context: "threshold exceeds reserve x",
                value: u64::from(threshold),
            });
        }
        if sell == 0 {
            return Err(SimError::InvalidThreshold {
                context: "threshold exceeds reserve y",
                value: u64::from(threshold),
            });
        }
        Ok(Self { buy, sell })
    }

    /// Exclusive bound for positive (X in) trades.
    #[must_use]
    pub const fn buy(&self) -> u64 {
        self.buy
    }

    /// Exclusive bound for the magnitude of negative (Y in) trades.
    #[must_use]
    pub const fn sell(&self) -> u64 {
        self.sell
    }

    fn draw_buy<R: Rng + ?Sized>(&self, rng: &mut R) -> Trade {
        trade_from_draw(rng.gen_range(0..self.buy), false)
    }

    fn draw_sell<R: Rng + ?Sized>(&self, rng: &mut R) -> Trade {
        trade_from_draw(rng.gen_range(0..self.sell), true)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn floor_div(reserve: f64, threshold: u32) -> u64 {
    // `as` saturates, reserves are validated positive and finite.
    reserve.floor() as u64 / u64::from(threshold)
}

#[allow(clippy::cast_precision_loss)]
fn trade_from_draw(magnitude: u64, negate: bool) -> Trade {
    let amount = magnitude as f64;
    Trade::from_finite(if negate { -amount } else { amount })
}

/// Each entry is an independent buy or sell chosen by a fair coin.
///
/// Per entry, a buy magnitude and a sell magnitude are both drawn, then
/// the coin picks one of them.
///
/// # Errors
///
/// See [`DrawBounds::new`].
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use hydra_fee_sim::domain::Reserves;
/// use hydra_fee_sim::generator::full_random;
///
/// let r = Reserves::new(10_000.0, 100_000.0).expect("valid");
/// let mut rng = StdRng::seed_from_u64(7);
/// let seq = full_random(&r, 10, 100, &mut rng).expect("valid threshold");
/// assert_eq!(seq.len(), 100);
/// ```
pub fn full_random<R: Rng + ?Sized>(
    initial: &Reserves,
    threshold: u32,
    length: usize,
    rng: &mut R,
) -> Result<TradeSequence> {
    let bounds = DrawBounds::new(initial, threshold)?;
    Ok((0..length)
        .map(|_| {
            let buy = bounds.draw_buy(rng);
            let sell = bounds.draw_sell(rng);
            if rng.gen_bool(0.5) {
                buy
            } else {
                sell
            }
        })
        .collect())
}

/// Buys at even positions, sells at odd positions, random magnitudes.
///
/// # Errors
///
/// See [`DrawBounds::new`].
pub fn round_robin_random<R: Rng + ?Sized>(
    initial: &Reserves,
    threshold: u32,
    length: usize,
    rng: &mut R,
) -> Result<TradeSequence> {
    let bounds = DrawBounds::new(initial, threshold)?;
    Ok((0..length)
        .map(|i| {
            if i % 2 == 0 {
                bounds.draw_buy(rng)
            } else {
                bounds.draw_sell(rng)
            }
        })
        .collect())
}
