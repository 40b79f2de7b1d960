//! Closed set of sequence families a scenario can request.

use core::fmt;

use rand::Rng;
use serde::Serialize;

use super::{alternating, constant, full_random, round_robin_random, split_half, DrawBounds};
use crate::domain::{Reserves, TradeSequence};
use crate::error::{Result, SimError};

/// Which trade-sequence family to generate.
///
/// Random families consume the injected RNG; patterned families ignore it
/// and produce the same sequence on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SequenceKind {
    /// Coin-flip direction per entry, magnitudes below `reserve / threshold`.
    FullRandom {
        /// Magnitude divisor.
        threshold: u32,
    },
    /// Buy at even, sell at odd positions, magnitudes below `reserve / threshold`.
    RoundRobinRandom {
        /// Magnitude divisor.
        threshold: u32,
    },
    /// The same signed amount at every position.
    Constant {
        /// Signed trade amount.
        amount: f64,
    },
    /// Buys of `x / divisor` for the first half, sells of `y / divisor` after.
    SplitHalf {
        /// Magnitude divisor.
        divisor: u32,
    },
    /// Alternating buys of `x / divisor` and sells of `y / divisor`.
    Alternating {
        /// Magnitude divisor.
        divisor: u32,
    },
}

impl SequenceKind {
    /// Generates one sequence of `length` trades against `initial`.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidThreshold`] for a zero or oversized threshold
    ///   or divisor.
    /// - [`SimError::InvalidTrade`] for a non-finite constant amount.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        initial: &Reserves,
        length: usize,
        rng: &mut R,
    ) -> Result<TradeSequence> {
        match *self {
            Self::FullRandom { threshold } => full_random(initial, threshold, length, rng),
            Self::RoundRobinRandom { threshold } => {
                round_robin_random(initial, threshold, length, rng)
            }
            Self::Constant { amount } => constant(amount, length),
            Self::SplitHalf { divisor } => split_half(initial, divisor, length),
            Self::Alternating { divisor } => alternating(initial, divisor, length),
        }
    }

    /// Checks the parameters against `initial` without generating anything.
    ///
    /// # Errors
    ///
    /// Same conditions as [`generate`](Self::generate).
    pub fn validate(&self, initial: &Reserves) -> Result<()> {
        match *self {
            Self::FullRandom { threshold } | Self::RoundRobinRandom { threshold } => {
                DrawBounds::new(initial, threshold).map(|_| ())
            }
            Self::Constant { amount } if !amount.is_finite() => {
                Err(SimError::InvalidTrade(amount))
            }
            Self::Constant { .. } => Ok(()),
            Self::SplitHalf { divisor } | Self::Alternating { divisor } if divisor == 0 => {
                Err(SimError::InvalidThreshold {
                    context: "pattern divisor",
                    value: 0,
                })
            }
            Self::SplitHalf { .. } | Self::Alternating { .. } => Ok(()),
        }
    }

    /// Returns `true` if the family consumes randomness.
    #[must_use]
    pub const fn is_random(&self) -> bool {
        matches!(self, Self::FullRandom { .. } | Self::RoundRobinRandom { .. })
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullRandom { threshold } => write!(f, "1/{threshold} threshold full random"),
            Self::RoundRobinRandom { threshold } => {
                write!(f, "1/{threshold} threshold round robin random")
            }
            Self::Constant { amount } => write!(f, "constant {amount}"),
            Self::SplitHalf { divisor } => write!(f, "1/{divisor} split half"),
            Self::Alternating { divisor } => write!(f, "1/{divisor} alternating"),
        }
    }
}
