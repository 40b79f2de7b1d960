//! Signed trade amounts and ordered trade sequences.

use core::fmt;
use core::ops::Deref;

use serde::Serialize;

use super::Side;
use crate::error::{Result, SimError};

/// A single swap request.
///
/// A positive amount offers asset X in exchange for Y; a negative amount
/// offers `|amount|` of asset Y in exchange for X.  Zero is a valid no-op.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::{Side, Trade};
///
/// let t = Trade::new(-250.0).expect("finite");
/// assert_eq!(t.input_side(), Some(Side::Y));
/// assert_eq!(t.magnitude(), 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Trade(f64);

impl Trade {
    /// The no-op trade.
    pub const ZERO: Self = Self(0.0);

    /// Creates a trade from a signed amount.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidTrade`] if `amount` is `NaN` or infinite.
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() {
            return Err(SimError::InvalidTrade(amount));
        }
        Ok(Self(amount))
    }

    /// Wraps an amount the caller already knows to be finite.
    pub(crate) const fn from_finite(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the signed amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns the absolute amount offered.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.0.abs()
    }

    /// The asset the trader pays in, or `None` for a zero trade.
    #[must_use]
    pub fn input_side(&self) -> Option<Side> {
        if self.0 > 0.0 {
            Some(Side::X)
        } else if self.0 < 0.0 {
            Some(Side::Y)
        } else {
            None
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Trade({})", self.0)
    }
}

/// An ordered list of trades applied one after another.
///
/// Order matters: each trade is priced against the reserves the previous
/// one left behind.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct TradeSequence(Vec<Trade>);

impl TradeSequence {
    /// An empty sequence.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Builds a sequence from raw signed amounts.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidTrade`] for the first non-finite amount.
    pub fn from_amounts(amounts: &[f64]) -> Result<Self> {
        amounts
            .iter()
            .map(|&a| Trade::new(a))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Returns the raw signed amounts.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.0.iter().map(Trade::amount).collect()
    }

    /// Consumes the sequence, returning the inner trades.
    #[must_use]
    pub fn into_inner(self) -> Vec<Trade> {
        self.0
    }
}

impl From<Vec<Trade>> for TradeSequence {
    fn from(trades: Vec<Trade>) -> Self {
        Self(trades)
    }
}

impl FromIterator<Trade> for TradeSequence {
    fn from_iter<I: IntoIterator<Item = Trade>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for TradeSequence {
    type Target = [Trade];

    fn deref(&self) -> &[Trade] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TradeSequence {
    type Item = &'a Trade;
    type IntoIter = core::slice::Iter<'a, Trade>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn positive_trade_pays_x() {
        let Ok(t) = Trade::new(100.0) else {
            panic!("finite trade");
        };
        assert_eq!(t.input_side(), Some(Side::X));
        assert_eq!(t.amount(), 100.0);
    }

    #[test]
    fn zero_trade_has_no_side() {
        assert_eq!(Trade::ZERO.input_side(), None);
        assert_eq!(Trade::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn non_finite_trade_rejected() {
        assert!(matches!(Trade::new(f64::NAN), Err(SimError::InvalidTrade(_))));
        assert_eq!(
            Trade::new(f64::NEG_INFINITY),
            Err(SimError::InvalidTrade(f64::NEG_INFINITY))
        );
    }

    #[test]
    fn sequence_from_amounts_keeps_order() {
        let Ok(seq) = TradeSequence::from_amounts(&[1.0, -2.0, 3.0]) else {
            panic!("finite amounts");
        };
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.amounts(), vec![1.0, -2.0, 3.0]);
    }

    #[test]
    fn sequence_rejects_non_finite_entry() {
        assert!(TradeSequence::from_amounts(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn empty_sequence() {
        assert!(TradeSequence::empty().is_empty());
        assert_eq!(TradeSequence::default(), TradeSequence::empty());
    }

    #[test]
    fn serializes_as_plain_numbers() {
        let Ok(seq) = TradeSequence::from_amounts(&[1.5, -2.0]) else {
            panic!("finite amounts");
        };
        let Ok(json) = serde_json::to_string(&seq) else {
            panic!("serializable");
        };
        assert_eq!(json, "[1.5,-2.0]");
    }
}
