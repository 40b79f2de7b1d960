//! Arithmetic helpers for pool calculations.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`price_input`] | post-trade reserves under `x · y = k` |
//! | [`counter_reserve`] | guarded `k / reserve` |
//! | [`output_amount`] | what left the pool on the output side |

mod constant_product;

pub use constant_product::{counter_reserve, output_amount, price_input};
