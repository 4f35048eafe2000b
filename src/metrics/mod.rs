//! Metrics accumulation
//!
//! The engine and the ledgers it orchestrates, plus the pure exit-criteria
//! and trend functions evaluated over its snapshots.

pub mod coverage;
pub mod defects;
pub mod engine;
pub mod execution;
pub mod exit_criteria;
pub mod precision;
pub mod trend;

pub use coverage::RequirementCoverageTracker;
pub use defects::DefectLedger;
pub use engine::MetricsEngine;
pub use execution::ExecutionLedger;
pub use exit_criteria::CoverageState;
pub use trend::{detect_trend, Trend, TrendReport};
