//! Constant-product pricing on `f64` reserves.
//!
//! The pricing step is shared by every fee policy: add the priced input
//! to one reserve and recompute the other from the invariant
//! `k = x · y` taken before the trade.
//!
//! All helpers return [`SimError::InvalidReserve`] instead of producing a
//! zero, negative or non-finite reserve.

use crate::domain::{ensure_positive, Reserves, Side};
use crate::error::Result;

/// Divides `k` by `reserve`, rejecting non-finite or non-positive results.
///
/// # Errors
///
/// Returns [`SimError::InvalidReserve`](crate::error::SimError::InvalidReserve)
/// if the quotient is not a usable reserve.
pub fn counter_reserve(k: f64, reserve: f64) -> Result<f64> {
    ensure_positive("counter reserve divisor", reserve)?;
    ensure_positive("counter reserve", k / reserve)
}

/// Prices `amount_in` of `side_in` against `reserves`.
///
/// Returns the post-trade reserves `(r_in + amount_in, k / (r_in + amount_in))`
/// laid out on the right sides.  The product of the result equals the
/// product of `reserves` up to floating-point rounding.
///
/// # Errors
///
/// Returns [`SimError::InvalidReserve`](crate::error::SimError::InvalidReserve)
/// if either new reserve is not strictly positive and finite.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::{Reserves, Side};
/// use hydra_fee_sim::math::price_input;
///
/// let r = Reserves::new(100.0, 100.0).expect("valid");
/// let after = price_input(&r, Side::X, 100.0).expect("priced");
/// assert_eq!(after.x(), 200.0);
/// assert_eq!(after.y(), 50.0);
/// ```
pub fn price_input(reserves: &Reserves, side_in: Side, amount_in: f64) -> Result<Reserves> {
    let k = reserves.product();
    let new_in = ensure_positive("post-trade input reserve", reserves.get(side_in) + amount_in)?;
    let new_out = counter_reserve(k, new_in)?;
    match side_in {
        Side::X => Reserves::new(new_in, new_out),
        Side::Y => Reserves::new(new_out, new_in),
    }
}

/// Amount of `side_in.opposite()` that left the pool between `before` and `after`.
#[must_use]
pub fn output_amount(before: &Reserves, after: &Reserves, side_in: Side) -> f64 {
    let side_out = side_in.opposite();
    before.get(side_out) - after.get(side_out)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::SimError;

    fn reserves(x: f64, y: f64) -> Reserves {
        let Ok(r) = Reserves::new(x, y) else {
            panic!("valid reserves");
        };
        r
    }

    #[test]
    fn counter_reserve_divides() {
        assert_eq!(counter_reserve(100.0, 4.0), Ok(25.0));
    }

    #[test]
    fn counter_reserve_rejects_zero_divisor() {
        assert!(matches!(
            counter_reserve(100.0, 0.0),
            Err(SimError::InvalidReserve { .. })
        ));
    }

    #[test]
    fn counter_reserve_rejects_underflow_to_zero() {
        assert!(counter_reserve(f64::MIN_POSITIVE, f64::MAX).is_err());
    }

    #[test]
    fn price_input_preserves_product() {
        let r = reserves(10_000.0, 100_000.0);
        let Ok(after) = price_input(&r, Side::Y, 5_000.0) else {
            panic!("priced");
        };
        assert_eq!(after.y(), 105_000.0);
        assert!((after.product() - r.product()).abs() / r.product() < 1e-12);
    }

    #[test]
    fn price_input_rejects_draining_negative_input() {
        let r = reserves(100.0, 100.0);
        let result = price_input(&r, Side::X, -100.0);
        assert!(matches!(
            result,
            Err(SimError::InvalidReserve { context: "post-trade input reserve", .. })
        ));
    }

    #[test]
    fn output_amount_reads_opposite_side() {
        let before = reserves(100.0, 100.0);
        let after = reserves(200.0, 50.0);
        assert_eq!(output_amount(&before, &after, Side::X), 50.0);
    }
}
