//! Configuration for one benchmarking scenario.

use serde::Serialize;

use super::PoolConfig;
use crate::domain::{FeePolicy, FeeTier, Reserves};
use crate::error::{Result, SimError};
use crate::generator::{SequenceKind, DEFAULT_SEQUENCE_LENGTH};

/// Number of sequences per benchmark batch in the built-in scenarios.
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// Blueprint for one experiment: which sequences to generate, how many,
/// and which policies to compare against the
/// [`Original`](FeePolicy::Original) baseline.
///
/// # Validation
///
/// - `batch_size` must be non-zero.
/// - `candidates` must be non-empty.
/// - The sequence kind must be usable against `reserves`
///   (see [`SequenceKind::validate`]).
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::config::ScenarioConfig;
/// use hydra_fee_sim::domain::Reserves;
/// use hydra_fee_sim::generator::SequenceKind;
///
/// let r = Reserves::new(10_000.0, 100_000.0).expect("positive");
/// let cfg = ScenarioConfig::new("demo", "DEMO", r, SequenceKind::FullRandom { threshold: 10 })
///     .with_batch_size(8)
///     .with_length(100);
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioConfig {
    name: String,
    title: String,
    reserves: Reserves,
    fee_tier: FeeTier,
    kind: SequenceKind,
    length: usize,
    batch_size: usize,
    candidates: Vec<FeePolicy>,
    verbose: bool,
}

impl ScenarioConfig {
    /// Creates a scenario with the default length, batch size, fee tier and
    /// candidates (`LaterSeparate`, then `Separate`).  Verbose sampling is on.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        reserves: Reserves,
        kind: SequenceKind,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            reserves,
            fee_tier: FeeTier::default(),
            kind,
            length: DEFAULT_SEQUENCE_LENGTH,
            batch_size: DEFAULT_BATCH_SIZE,
            candidates: vec![FeePolicy::LaterSeparate, FeePolicy::Separate],
            verbose: true,
        }
    }

    /// Sets the sequence length.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the number of sequences per batch.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the fee tier for every pool in the scenario.
    #[must_use]
    pub fn with_fee_tier(mut self, fee_tier: FeeTier) -> Self {
        self.fee_tier = fee_tier;
        self
    }

    /// Replaces the candidate policies.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<FeePolicy>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Enables or disables the sample simulation.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`SimError::InvalidConfiguration`] for a zero batch size or an
    ///   empty candidate list.
    /// - [`SimError::InvalidThreshold`] or [`SimError::InvalidTrade`] if
    ///   the sequence kind cannot be generated against the reserves.
    /// - [`SimError::InvalidFee`] if the fee tier exceeds 100%.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(SimError::InvalidConfiguration("batch size must be non-zero"));
        }
        if self.candidates.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "at least one candidate policy is required",
            ));
        }
        self.pool_config(FeePolicy::Original).validate()?;
        self.kind.validate(&self.reserves)
    }

    /// The pool blueprint for `policy` under this scenario.
    #[must_use]
    pub const fn pool_config(&self, policy: FeePolicy) -> PoolConfig {
        PoolConfig::new(self.reserves, self.fee_tier, policy)
    }

    /// Returns the catalogue name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the report heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the initial reserves.
    #[must_use]
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Returns the fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Returns the sequence family.
    #[must_use]
    pub const fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Returns the sequence length.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the batch size.
    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the candidate policies in benchmark order.
    #[must_use]
    pub fn candidates(&self) -> &[FeePolicy] {
        &self.candidates
    }

    /// Returns `true` if a sample simulation is run before the batch.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn reserves() -> Reserves {
        let Ok(r) = Reserves::new(10_000.0, 100_000.0) else {
            panic!("valid reserves");
        };
        r
    }

    fn scenario() -> ScenarioConfig {
        ScenarioConfig::new(
            "t",
            "T",
            reserves(),
            SequenceKind::RoundRobinRandom { threshold: 10 },
        )
    }

    #[test]
    fn defaults() {
        let cfg = scenario();
        assert_eq!(cfg.length(), DEFAULT_SEQUENCE_LENGTH);
        assert_eq!(cfg.batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(
            cfg.candidates(),
            &[FeePolicy::LaterSeparate, FeePolicy::Separate]
        );
        assert!(cfg.verbose());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_batch_rejected() {
        assert!(matches!(
            scenario().with_batch_size(0).validate(),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn empty_candidates_rejected() {
        assert!(matches!(
            scenario().with_candidates(Vec::new()).validate(),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn bad_threshold_rejected() {
        let cfg = ScenarioConfig::new(
            "t",
            "T",
            reserves(),
            SequenceKind::FullRandom { threshold: 0 },
        );
        assert!(matches!(
            cfg.validate(),
            Err(SimError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn zero_length_allowed() {
        assert!(scenario().with_length(0).validate().is_ok());
    }

    #[test]
    fn pool_config_carries_tier() {
        let cfg = scenario().with_fee_tier(FeeTier::TIER_1_00_PERCENT);
        let pc = cfg.pool_config(FeePolicy::Separate);
        assert_eq!(pc.fee_tier(), FeeTier::TIER_1_00_PERCENT);
        assert_eq!(pc.policy(), FeePolicy::Separate);
        assert_eq!(pc.reserves(), reserves());
    }
}
