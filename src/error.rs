//! Unified error types for the fee simulator.
//!
//! All fallible operations across the crate return [`SimError`], so a
//! driver can report which operation and which input violated a
//! precondition without matching on several error types.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SimError>;

/// Every failure the simulator can report.
///
/// All variants describe deterministic precondition violations.  Nothing
/// here is transient, so callers should surface the error rather than
/// retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A reserve is (or would become) zero, negative or non-finite.
    #[error("invalid reserve ({context}): {value}")]
    InvalidReserve {
        /// Which operation produced the value.
        context: &'static str,
        /// The offending reserve value.
        value: f64,
    },

    /// A fee-policy tag did not name any known policy.
    #[error("unknown fee policy: {0:?}")]
    InvalidPolicy(String),

    /// A trade amount was `NaN` or infinite.
    #[error("invalid trade amount: {0}")]
    InvalidTrade(f64),

    /// A generator threshold or divisor leaves nothing to draw from.
    #[error("invalid threshold ({context}): {value}")]
    InvalidThreshold {
        /// Which parameter was rejected.
        context: &'static str,
        /// The rejected value.
        value: u64,
    },

    /// A fee tier above 100% (10 000 bp).
    #[error("invalid fee tier: {0}bp exceeds 10000bp")]
    InvalidFee(u32),

    /// A scenario-level parameter is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A scenario name that is not part of the built-in catalogue.
    #[error("unknown scenario: {0:?}")]
    UnknownScenario(String),
}
