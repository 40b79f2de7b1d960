//! Relative change of a pool's effective holdings.

use core::fmt;

use serde::Serialize;

use super::{FeeBucket, Reserves};

/// Net relative change of `reserve + fee bucket` against the initial
/// reserves, per asset.
///
/// `0.01` means the pool holds 1% more of that asset than it started with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Drift {
    x: f64,
    y: f64,
}

impl Drift {
    /// No change on either side.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a drift from raw ratios.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes `((current + fees) - initial) / initial` for both assets.
    #[must_use]
    pub fn measure(initial: &Reserves, current: &Reserves, fees: &FeeBucket) -> Self {
        Self {
            x: (current.x() + fees.x() - initial.x()) / initial.x(),
            y: (current.y() + fees.y() - initial.y()) / initial.y(),
        }
    }

    /// Relative change of asset X.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Relative change of asset Y.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the pair as a tuple `(drift_x, drift_y)`.
    #[must_use]
    pub const fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<Drift> for (f64, f64) {
    fn from(d: Drift) -> Self {
        d.as_tuple()
    }
}

impl fmt::Display for Drift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X {:+.6}%, Y {:+.6}%", self.x * 100.0, self.y * 100.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Side;

    #[test]
    fn unchanged_pool_has_zero_drift() {
        let Ok(r) = Reserves::new(10.0, 20.0) else {
            panic!("valid reserves");
        };
        assert_eq!(Drift::measure(&r, &r, &FeeBucket::EMPTY), Drift::ZERO);
    }

    #[test]
    fn fees_count_towards_holdings() {
        let (Ok(initial), Ok(current)) = (Reserves::new(100.0, 100.0), Reserves::new(99.0, 101.0))
        else {
            panic!("valid reserves");
        };
        let mut fees = FeeBucket::EMPTY;
        fees.credit(Side::X, 1.0);
        let d = Drift::measure(&initial, &current, &fees);
        assert!(d.x().abs() < 1e-12);
        assert!((d.y() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn display_as_percent() {
        assert_eq!(Drift::new(0.01, -0.02).to_string(), "X +1.000000%, Y -2.000000%");
    }
}
