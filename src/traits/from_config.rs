//! Generic construction trait for pool instantiation from configuration.
//!
//! [`FromConfig`] gives every pool type a uniform constructor from its
//! configuration struct, so the factory can dispatch construction without
//! `dyn` trait objects.
//!
//! # Validation Contract
//!
//! Implementations **must** validate the configuration during
//! construction.  A successfully constructed pool is in a valid initial
//! state: strictly positive reserves, a fee tier within 0–100%, empty fee
//! buckets and a policy matching the pool type.

use crate::error::Result;

/// Builds a pool from a configuration.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for OriginalPool`
/// - `impl FromConfig<PoolConfig> for SeparatePool`
/// - `impl FromConfig<PoolConfig> for LaterSeparatePool`
///
/// # Errors
///
/// Returns [`SimError::InvalidConfiguration`](crate::error::SimError::InvalidConfiguration)
/// (or a more specific variant) if the configuration is invalid.
pub trait FromConfig<C> {
    /// Creates a new pool instance from the given configuration.
    ///
    /// # Errors
    ///
    /// Any validation error of the configuration.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
