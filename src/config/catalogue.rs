//! The built-in scenario catalogue.
//!
//! All scenarios start from `x = 10_000`, `y = 100_000` and compare
//! `LaterSeparate` then `Separate` against the `Original` baseline.

use super::ScenarioConfig;
use crate::domain::Reserves;
use crate::error::{Result, SimError};
use crate::generator::SequenceKind;

/// Initial reserve of asset X in every built-in scenario.
pub const CATALOGUE_X: f64 = 10_000.0;

/// Initial reserve of asset Y in every built-in scenario.
pub const CATALOGUE_Y: f64 = 100_000.0;

/// Names of the built-in scenarios, in run order.
pub const SCENARIO_NAMES: [&str; 8] = [
    "full-random-3",
    "full-random-10",
    "full-random-100",
    "round-robin-10",
    "round-robin-100",
    "x-mono-increase",
    "xy-half-increase",
    "xy-always-draw",
];

/// Returns every built-in scenario, in run order.
///
/// # Errors
///
/// Returns [`SimError::InvalidReserve`] only if the catalogue reserves
/// were edited into an invalid pair.
pub fn builtin() -> Result<Vec<ScenarioConfig>> {
    SCENARIO_NAMES.iter().map(|name| find(name)).collect()
}

/// Looks up one built-in scenario by name.
///
/// # Errors
///
/// Returns [`SimError::UnknownScenario`] if `name` is not in
/// [`SCENARIO_NAMES`].
///
/// # Examples
///
/// ```
/// use hydra_fee_sim::config::find_scenario;
///
/// let cfg = find_scenario("round-robin-10").expect("built in");
/// assert_eq!(cfg.title(), "1/10 THRESHOLD ROUND ROBIN RANDOM");
/// assert!(find_scenario("nope").is_err());
/// ```
pub fn find(name: &str) -> Result<ScenarioConfig> {
    let r = Reserves::new(CATALOGUE_X, CATALOGUE_Y)?;
    let (title, kind) = match name {
        "full-random-3" => (
            "1/3 THRESHOLD FULL RANDOM",
            SequenceKind::FullRandom { threshold: 3 },
        ),
        "full-random-10" => (
            "1/10 THRESHOLD FULL RANDOM",
            SequenceKind::FullRandom { threshold: 10 },
        ),
        "full-random-100" => (
            "1/100 THRESHOLD FULL RANDOM",
            SequenceKind::FullRandom { threshold: 100 },
        ),
        "round-robin-10" => (
            "1/10 THRESHOLD ROUND ROBIN RANDOM",
            SequenceKind::RoundRobinRandom { threshold: 10 },
        ),
        "round-robin-100" => (
            "1/100 THRESHOLD ROUND ROBIN RANDOM",
            SequenceKind::RoundRobinRandom { threshold: 100 },
        ),
        "x-mono-increase" => (
            "1/1000 X MONO INCREASE",
            SequenceKind::Constant {
                amount: -r.y() / 1_000.0,
            },
        ),
        "xy-half-increase" => (
            "1/1000 X Y HALF INCREASE",
            SequenceKind::SplitHalf { divisor: 1_000 },
        ),
        "xy-always-draw" => (
            "1/100 X Y ALWAYS DRAW",
            SequenceKind::Alternating { divisor: 100 },
        ),
        other => return Err(SimError::UnknownScenario(other.to_owned())),
    };
    Ok(ScenarioConfig::new(name, title, r, kind))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves_and_validates() {
        let Ok(all) = builtin() else {
            panic!("catalogue is valid");
        };
        assert_eq!(all.len(), SCENARIO_NAMES.len());
        for (cfg, name) in all.iter().zip(SCENARIO_NAMES) {
            assert_eq!(cfg.name(), name);
            assert!(cfg.validate().is_ok(), "{name} invalid");
        }
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            find("full-random-7"),
            Err(SimError::UnknownScenario("full-random-7".to_owned()))
        );
    }

    #[test]
    fn mono_increase_sells_y() {
        let Ok(cfg) = find("x-mono-increase") else {
            panic!("built in");
        };
        assert_eq!(cfg.kind(), SequenceKind::Constant { amount: -100.0 });
    }
}
