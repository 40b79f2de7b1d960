//! Outcome of a single trade against a pool.

use core::fmt;

use serde::Serialize;

use super::Side;

/// What one trade did to the pool and the trader.
///
/// For a zero trade every amount is zero and `input_side` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradeReceipt {
    input_side: Option<Side>,
    amount_in: f64,
    amount_out: f64,
    fee: f64,
    fee_side: Option<Side>,
    fee_reinjected: bool,
}

impl TradeReceipt {
    /// Receipt for a trade that moved nothing.
    pub const NOOP: Self = Self {
        input_side: None,
        amount_in: 0.0,
        amount_out: 0.0,
        fee: 0.0,
        fee_side: None,
        fee_reinjected: false,
    };

    /// Fee charged on the input side before pricing.
    #[must_use]
    pub const fn charged_on_input(
        input_side: Side,
        amount_in: f64,
        amount_out: f64,
        fee: f64,
        fee_reinjected: bool,
    ) -> Self {
        Self {
            input_side: Some(input_side),
            amount_in,
            amount_out,
            fee,
            fee_side: Some(input_side),
            fee_reinjected,
        }
    }

    /// Fee charged on the output side after pricing.
    #[must_use]
    pub const fn charged_on_output(
        input_side: Side,
        amount_in: f64,
        amount_out: f64,
        fee: f64,
    ) -> Self {
        Self {
            input_side: Some(input_side),
            amount_in,
            amount_out,
            fee,
            fee_side: Some(input_side.opposite()),
            fee_reinjected: false,
        }
    }

    /// Asset the trader paid in.
    #[must_use]
    pub const fn input_side(&self) -> Option<Side> {
        self.input_side
    }

    /// Gross amount the trader paid.
    #[must_use]
    pub const fn amount_in(&self) -> f64 {
        self.amount_in
    }

    /// Net amount credited to the trader.
    #[must_use]
    pub const fn amount_out(&self) -> f64 {
        self.amount_out
    }

    /// Fee charged.
    #[must_use]
    pub const fn fee(&self) -> f64 {
        self.fee
    }

    /// Asset the fee was charged in.
    #[must_use]
    pub const fn fee_side(&self) -> Option<Side> {
        self.fee_side
    }

    /// `true` if the fee went back into the reserves rather than a bucket.
    #[must_use]
    pub const fn fee_reinjected(&self) -> bool {
        self.fee_reinjected
    }
}

impl fmt::Display for TradeReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.input_side, self.fee_side) {
            (Some(side_in), Some(side_fee)) => write!(
                f,
                "TradeReceipt(in={}{side_in}, out={}{}, fee={}{side_fee})",
                self.amount_in,
                self.amount_out,
                side_in.opposite(),
                self.fee
            ),
            _ => write!(f, "TradeReceipt(noop)"),
        }
    }
}
