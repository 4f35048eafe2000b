use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::thresholds::ExitThresholds;
use crate::core::{DailyExecution, MetricName};

/// Root configuration structure for qametrics
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QaMetricsConfig {
    /// Team and plan constants the indicators divide by
    #[serde(default)]
    pub engine: EngineConstants,

    /// Exit-criteria thresholds
    #[serde(default)]
    pub thresholds: ExitThresholds,

    /// Trend detection settings
    #[serde(default)]
    pub trend: TrendConfig,

    /// Daily execution scenario used by the simulate command
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Output artifact locations
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConstants {
    #[serde(default = "default_testers_available")]
    pub testers_available: u32,

    #[serde(default = "default_total_planned_cases")]
    pub total_planned_cases: u32,

    /// Automated-case target; kept for reporting, no indicator divides by it
    #[serde(default = "default_total_automated_cases")]
    pub total_automated_cases: u32,
}

impl Default for EngineConstants {
    fn default() -> Self {
        Self {
            testers_available: default_testers_available(),
            total_planned_cases: default_total_planned_cases(),
            total_automated_cases: default_total_automated_cases(),
        }
    }
}

fn default_testers_available() -> u32 {
    5
}
fn default_total_planned_cases() -> u32 {
    220
}
fn default_total_automated_cases() -> u32 {
    150
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendConfig {
    /// Number of most recent snapshots compared (default: 3)
    #[serde(default = "default_trend_window")]
    pub window: usize,

    /// Minimum absolute delta reported as rising or falling (default: 0.01)
    #[serde(default = "default_trend_epsilon")]
    pub epsilon: f64,

    /// Metrics included in the trend summary
    #[serde(default = "default_summary_metrics")]
    pub summary_metrics: Vec<MetricName>,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: default_trend_window(),
            epsilon: default_trend_epsilon(),
            summary_metrics: default_summary_metrics(),
        }
    }
}

impl TrendConfig {
    /// Reject an epsilon that would misclassify every delta.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(format!(
                "epsilon must be a non-negative number, got {}",
                self.epsilon
            ));
        }
        Ok(())
    }
}

fn default_trend_window() -> usize {
    3
}
fn default_trend_epsilon() -> f64 {
    0.01
}
fn default_summary_metrics() -> Vec<MetricName> {
    vec![
        MetricName::OpenDefects,
        MetricName::ApprovalRate,
        MetricName::AutomationRate,
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// How many of the most recent dataset days to replay (default: 5)
    #[serde(default = "default_simulation_days")]
    pub days: usize,

    /// Execution counts per simulated day; the last entry repeats when
    /// there are more days than entries
    #[serde(default = "default_scenario")]
    pub scenario: Vec<DailyExecution>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            days: default_simulation_days(),
            scenario: default_scenario(),
        }
    }
}

impl SimulationConfig {
    /// Execution counts for the zero-based simulated day `index`.
    pub fn execution_for(&self, index: usize) -> Option<DailyExecution> {
        let last = self.scenario.len().checked_sub(1)?;
        self.scenario.get(index.min(last)).copied()
    }
}

fn default_simulation_days() -> usize {
    5
}
fn default_scenario() -> Vec<DailyExecution> {
    vec![
        DailyExecution::new(40, 36, 32, 4, 20),
        DailyExecution::new(45, 42, 39, 3, 25),
        DailyExecution::new(45, 44, 41, 3, 30),
        DailyExecution::new(50, 48, 46, 2, 35),
        DailyExecution::new(50, 49, 47, 2, 40),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_dashboard_dir")]
    pub dashboard_dir: PathBuf,

    #[serde(default = "default_summary_file")]
    pub summary_file: String,

    #[serde(default = "default_traceability_file")]
    pub traceability_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dashboard_dir: default_dashboard_dir(),
            summary_file: default_summary_file(),
            traceability_file: default_traceability_file(),
        }
    }
}

fn default_dashboard_dir() -> PathBuf {
    PathBuf::from("dashboards")
}
fn default_summary_file() -> String {
    "metrics_summary.csv".to_string()
}
fn default_traceability_file() -> String {
    "traceability_matrix.csv".to_string()
}
