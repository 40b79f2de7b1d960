//! Pool and scenario configuration.
//!
//! [`PoolConfig`] is the blueprint for one pool; [`ScenarioConfig`] is the
//! blueprint for one benchmarking experiment.  The built-in scenarios are
//! available through [`builtin_scenarios`] and [`find_scenario`].

mod catalogue;
mod pool_config;
mod scenario;

pub use catalogue::{
    builtin as builtin_scenarios, find as find_scenario, CATALOGUE_X, CATALOGUE_Y,
    SCENARIO_NAMES,
};
pub use pool_config::PoolConfig;
pub use scenario::{ScenarioConfig, DEFAULT_BATCH_SIZE};
