//! CLI command implementations.
//!
//! Available commands:
//! - **simulate**: Replay recent dataset days and write dashboards and exports
//! - **trend**: Report the trend of a single metric after a replay
//! - **risk-matrix**: Compute RPN risk levels for scored features
//! - **init**: Write a default `.qametrics.toml`

pub mod init;
pub mod risk_matrix;
pub mod simulate;
pub mod trend;

pub use init::init_config;
pub use risk_matrix::{handle_risk_matrix, RiskMatrixConfig};
pub use simulate::{handle_simulate, run_simulation, SimulateConfig, SimulationRun};
pub use trend::{handle_trend, TrendConfig};
