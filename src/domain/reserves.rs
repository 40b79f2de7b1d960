//! Two-asset balances: pool reserves and side-pocketed fee buckets.

use core::fmt;

use serde::Serialize;

use crate::error::{Result, SimError};

/// One side of the X/Y pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    /// Asset X.
    X,
    /// Asset Y.
    Y,
}

impl Side {
    /// Returns the other side of the pair.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Strictly positive, finite reserve balances of a constant-product pool.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::Reserves;
///
/// let r = Reserves::new(10_000.0, 100_000.0).expect("positive reserves");
/// assert_eq!(r.product(), 1_000_000_000.0);
/// assert!(Reserves::new(0.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reserves {
    x: f64,
    y: f64,
}

impl Reserves {
    /// Creates a validated reserve pair.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReserve`] if either value is zero,
    /// negative, `NaN` or infinite.
    pub fn new(x: f64, y: f64) -> Result<Self> {
        ensure_positive("reserve x", x)?;
        ensure_positive("reserve y", y)?;
        Ok(Self { x, y })
    }

    /// Reserve of asset X.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Reserve of asset Y.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Reserve on the given side.
    #[must_use]
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::X => self.x,
            Side::Y => self.y,
        }
    }

    /// The constant-product invariant `k = x · y`.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.x * self.y
    }

    /// Returns a copy with the reserve on `side` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidReserve`] if `value` is not strictly
    /// positive and finite.
    pub fn with(&self, side: Side, value: f64) -> Result<Self> {
        match side {
            Side::X => Self::new(value, self.y),
            Side::Y => Self::new(self.x, value),
        }
    }
}

impl fmt::Display for Reserves {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reserves(x={}, y={})", self.x, self.y)
    }
}

/// Fees held outside the pool reserves, one accumulator per asset.
///
/// Buckets only ever grow: [`credit`](Self::credit) ignores non-positive
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FeeBucket {
    x: f64,
    y: f64,
}

impl FeeBucket {
    /// An empty bucket.
    pub const EMPTY: Self = Self { x: 0.0, y: 0.0 };

    /// Accumulated fees in asset X.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Accumulated fees in asset Y.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Accumulated fees on the given side.
    #[must_use]
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::X => self.x,
            Side::Y => self.y,
        }
    }

    /// Adds `amount` to the bucket on `side`.
    pub fn credit(&mut self, side: Side, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        match side {
            Side::X => self.x += amount,
            Side::Y => self.y += amount,
        }
    }

    /// Returns `true` if nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Checks that `value` is a usable reserve.
pub(crate) fn ensure_positive(context: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidReserve { context, value })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_reserves() {
        let Ok(r) = Reserves::new(10_000.0, 100_000.0) else {
            panic!("expected valid reserves");
        };
        assert_eq!(r.x(), 10_000.0);
        assert_eq!(r.y(), 100_000.0);
        assert_eq!(r.get(Side::Y), 100_000.0);
        assert_eq!(r.product(), 1e9);
    }

    #[test]
    fn zero_reserve_rejected() {
        assert!(matches!(
            Reserves::new(0.0, 1.0),
            Err(SimError::InvalidReserve { context: "reserve x", .. })
        ));
    }

    #[test]
    fn negative_reserve_rejected() {
        assert!(matches!(
            Reserves::new(1.0, -5.0),
            Err(SimError::InvalidReserve { context: "reserve y", .. })
        ));
    }

    #[test]
    fn non_finite_reserve_rejected() {
        assert!(Reserves::new(f64::NAN, 1.0).is_err());
        assert!(Reserves::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn with_replaces_one_side() {
        let Ok(r) = Reserves::new(1.0, 2.0) else {
            panic!("expected valid reserves");
        };
        let Ok(r2) = r.with(Side::X, 5.0) else {
            panic!("expected valid reserves");
        };
        assert_eq!(r2.x(), 5.0);
        assert_eq!(r2.y(), 2.0);
        assert!(r.with(Side::Y, 0.0).is_err());
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::X.opposite(), Side::Y);
        assert_eq!(Side::Y.opposite(), Side::X);
    }

    // -- FeeBucket ----------------------------------------------------------

    #[test]
    fn bucket_credits_accumulate() {
        let mut bucket = FeeBucket::EMPTY;
        assert!(bucket.is_empty());
        bucket.credit(Side::X, 0.3);
        bucket.credit(Side::X, 0.2);
        bucket.credit(Side::Y, 1.0);
        assert!((bucket.x() - 0.5).abs() < 1e-12);
        assert_eq!(bucket.get(Side::Y), 1.0);
    }

    #[test]
    fn bucket_never_decreases() {
        let mut bucket = FeeBucket::EMPTY;
        bucket.credit(Side::Y, 2.0);
        bucket.credit(Side::Y, -1.0);
        bucket.credit(Side::Y, 0.0);
        assert_eq!(bucket.y(), 2.0);
    }
}
