//! Basis-point representation for fee rates.

use core::fmt;

use serde::Serialize;

/// Denominator that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values can be constructed, but values above 10 000 are
/// nonsensical as fee rates.  Use [`is_valid_percent`](Self::is_valid_percent)
/// to check; [`FeeTier::new`](super::FeeTier::new) enforces it.
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert!((bp.as_fraction() - 0.003).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Converts to a percentage in the range `0.0..=100.0`.
    ///
    /// For example, 30 bp → 0.30%.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Converts to a plain fraction: 30 bp → `0.003`.
    #[must_use]
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / f64::from(MAX_BPS)
    }

    /// Computes `amount × (self / 10 000)`.
    ///
    /// The sign of `amount` is preserved.
    #[must_use]
    pub fn apply(&self, amount: f64) -> f64 {
        amount * self.as_fraction()
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(BasisPoints::new(30).get(), 30);
    }

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(BasisPoints::default(), BasisPoints::ZERO);
    }

    #[test]
    fn is_valid_percent_bounds() {
        assert!(BasisPoints::ZERO.is_valid_percent());
        assert!(BasisPoints::MAX_PERCENT.is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn as_percent_thirty_bp() {
        assert!((BasisPoints::new(30).as_percent() - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn as_fraction_thirty_bp() {
        assert!((BasisPoints::new(30).as_fraction() - 0.003).abs() < 1e-15);
    }

    // -- apply --------------------------------------------------------------

    #[test]
    fn apply_thirty_bp() {
        let fee = BasisPoints::new(30).apply(100.0);
        assert!((fee - 0.3).abs() < 1e-12);
    }

    #[test]
    fn apply_keeps_sign() {
        let fee = BasisPoints::new(30).apply(-1_000.0);
        assert!((fee + 3.0).abs() < 1e-12);
    }

    #[test]
    fn apply_zero_bp() {
        assert_eq!(BasisPoints::ZERO.apply(1_000_000.0), 0.0);
    }

    #[test]
    fn apply_100_percent() {
        assert!((BasisPoints::MAX_PERCENT.apply(1_000.0) - 1_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }
}
