//! Configuration for the metrics engine, exit thresholds, trend detection,
//! the simulation scenario and output locations.

mod core;
mod loader;
mod thresholds;

pub use self::core::{
    EngineConstants, OutputConfig, QaMetricsConfig, SimulationConfig, TrendConfig,
};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::ExitThresholds;
