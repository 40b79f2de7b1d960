//! Core trait abstractions for pool operations.
//!
//! [`FeePool`] executes trades and reports drift; [`FromConfig`] builds a
//! pool from its configuration.

mod fee_pool;
mod from_config;

pub use fee_pool::FeePool;
pub use from_config::FromConfig;
