//! The closed set of fee-accounting policies.

use core::fmt;
use core::str::FromStr;

use serde::Serialize;

use crate::error::SimError;

/// How a pool accounts for the trading fee.
///
/// | Policy | Fee base | Where the fee goes |
/// |--------|----------|--------------------|
/// | [`Original`](Self::Original) | input amount | re-injected into the input reserve |
/// | [`Separate`](Self::Separate) | input amount | fee bucket on the input side |
/// | [`LaterSeparate`](Self::LaterSeparate) | output amount | fee bucket on the output side |
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::domain::FeePolicy;
///
/// let p: FeePolicy = "later-separate".parse().expect("known tag");
/// assert_eq!(p, FeePolicy::LaterSeparate);
/// assert!("bogus".parse::<FeePolicy>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeePolicy {
    /// Uniswap v2: fee charged before the trade and kept in the pool.
    Original,
    /// Fee charged before the trade and held outside the pool.
    Separate,
    /// Fee charged on the output after the trade and held outside the pool.
    LaterSeparate,
}

impl FeePolicy {
    /// All policies, baseline first.
    pub const ALL: [Self; 3] = [Self::Original, Self::Separate, Self::LaterSeparate];

    /// Stable kebab-case tag, accepted back by [`FromStr`].
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Separate => "separate",
            Self::LaterSeparate => "later-separate",
        }
    }

    /// Returns `true` if fees are held outside the reserves.
    #[must_use]
    pub const fn is_separate(&self) -> bool {
        matches!(self, Self::Separate | Self::LaterSeparate)
    }
}

impl fmt::Display for FeePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "original"),
            Self::Separate => write!(f, "separate"),
            Self::LaterSeparate => write!(f, "later separate"),
        }
    }
}

impl FromStr for FeePolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "original" => Ok(Self::Original),
            "separate" => Ok(Self::Separate),
            "later-separate" | "laterseparate" => Ok(Self::LaterSeparate),
            _ => Err(SimError::InvalidPolicy(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for policy in FeePolicy::ALL {
            let Ok(parsed) = policy.tag().parse::<FeePolicy>() else {
                panic!("tag {} should parse", policy.tag());
            };
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn parse_is_lenient_on_case_and_separator() {
        assert_eq!("LATER_SEPARATE".parse::<FeePolicy>(), Ok(FeePolicy::LaterSeparate));
        assert_eq!(" Separate ".parse::<FeePolicy>(), Ok(FeePolicy::Separate));
    }

    #[test]
    fn unknown_tag_rejected() {
        assert_eq!(
            "uniswap-v3".parse::<FeePolicy>(),
            Err(SimError::InvalidPolicy("uniswap-v3".to_owned()))
        );
    }

    #[test]
    fn only_original_keeps_fees_in_pool() {
        assert!(!FeePolicy::Original.is_separate());
        assert!(FeePolicy::Separate.is_separate());
        assert!(FeePolicy::LaterSeparate.is_separate());
    }

    #[test]
    fn display() {
        assert_eq!(FeePolicy::LaterSeparate.to_string(), "later separate");
    }
}
