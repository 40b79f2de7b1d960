//! Pool instantiation via the factory pattern.
//!
//! [`PoolFactory`] builds a fresh [`Pool`](crate::pools::Pool) from a
//! [`PoolConfig`](crate::config::PoolConfig) or from a textual policy tag,
//! validating the configuration and dispatching to the policy's
//! constructor.

mod pool_factory;

pub use pool_factory::PoolFactory;
