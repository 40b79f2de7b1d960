//! Trade-sequence generators.
//!
//! Every generator is a pure function of the initial reserves, its
//! magnitude parameter, the requested length and, for the random
//! families, an injected [`rand::Rng`].  Seeding that RNG makes runs
//! repeatable.
//!
//! | Family | Function | Randomness |
//! |--------|----------|------------|
//! | full random | [`full_random`] | direction and magnitude |
//! | round robin random | [`round_robin_random`] | magnitude |
//! | constant | [`constant`] | none |
//! | split half | [`split_half`] | none |
//! | alternating | [`alternating`] | none |

mod kind;
mod pattern;
mod random;

pub use kind::SequenceKind;
pub use pattern::{alternating, constant, split_half};
pub use random::{full_random, round_robin_random, DrawBounds};

/// Sequence length used by the built-in scenarios.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 10_000;
