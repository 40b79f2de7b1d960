//! Deterministic trade-sequence families.

use crate::domain::{Reserves, Trade, TradeSequence};
use crate::error::{Result, SimError};

fn check_divisor(divisor: u32) -> Result<f64> {
    if divisor == 0 {
        return Err(SimError::InvalidThreshold {
            context: "pattern divisor",
            value: 0,
        });
    }
    Ok(f64::from(divisor))
}

/// Every entry equals `amount`.
///
/// # Errors
///
/// Returns [`SimError::InvalidTrade`] if `amount` is not finite.
pub fn constant(amount: f64, length: usize) -> Result<TradeSequence> {
    let trade = Trade::new(amount)?;
    Ok(vec![trade; length].into())
}

/// First half buys `x / divisor`, second half sells `y / divisor`.
///
/// For odd lengths the extra entry is a sell.
///
/// # Errors
///
/// Returns [`SimError::InvalidThreshold`] if `divisor` is zero.
pub fn split_half(initial: &Reserves, divisor: u32, length: usize) -> Result<TradeSequence> {
    let d = check_divisor(divisor)?;
    let (buy, sell) = legs(initial, d);
    Ok((0..length)
        .map(|i| if i < length / 2 { buy } else { sell })
        .collect())
}

/// Alternates a buy of `x / divisor` (even positions) with a sell of
/// `y / divisor` (odd positions).
///
/// # Errors
///
/// Returns [`SimError::InvalidThreshold`] if `divisor` is zero.
pub fn alternating(initial: &Reserves, divisor: u32, length: usize) -> Result<TradeSequence> {
    let d = check_divisor(divisor)?;
    let (buy, sell) = legs(initial, d);
    Ok((0..length)
        .map(|i| if i % 2 == 0 { buy } else { sell })
        .collect())
}

fn legs(initial: &Reserves, divisor: f64) -> (Trade, Trade) {
    (
        Trade::from_finite(initial.x() / divisor),
        Trade::from_finite(-initial.y() / divisor),
    )
}
