// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod metrics;
pub mod observability;
pub mod risk;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    CoverageSummary, CriterionKind, CurrentSummary, DailyExecution, DefectRecord, DefectState,
    Environment, Error, ExitCriterion, ExitVerdicts, MetricName, RequirementRow, Result,
    Severity, Snapshot, TraceabilityRow,
};

pub use crate::config::{ExitThresholds, QaMetricsConfig};

pub use crate::metrics::{
    detect_trend, DefectLedger, ExecutionLedger, MetricsEngine, RequirementCoverageTracker, Trend,
    TrendReport,
};

pub use crate::risk::{RiskEntry, RiskLevel};
