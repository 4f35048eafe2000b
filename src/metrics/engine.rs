//! The metrics-accumulation engine.
//!
//! [`MetricsEngine`] owns every piece of mutable state: the defect ledger,
//! the requirement coverage tracker, the execution ledger and the snapshot
//! history. Each call to [`MetricsEngine::register_day`] validates its whole
//! input before touching any of them, so a rejected day leaves the engine
//! exactly as it was.
//!
//! The engine is single-threaded; `register_day` takes `&mut self`, and
//! hosts that share an engine across threads must wrap it in a mutex.

use chrono::Utc;
use tracing::{debug, warn};

use super::coverage::RequirementCoverageTracker;
use super::defects::DefectLedger;
use super::execution::ExecutionLedger;
use super::exit_criteria::{self, CoverageState};
use super::precision::assert_ratio_invariants;
use super::trend::{self, TrendReport};
use crate::config::{EngineConstants, ExitThresholds, QaMetricsConfig, TrendConfig};
use crate::core::{
    CoverageSummary, CurrentSummary, DailyExecution, DefectRecord, Error, ExitVerdicts,
    MetricName, Result, Snapshot, TraceabilityRow,
};

#[derive(Debug, Clone)]
pub struct MetricsEngine {
    constants: EngineConstants,
    thresholds: ExitThresholds,
    trend: TrendConfig,
    defects: DefectLedger,
    coverage: RequirementCoverageTracker,
    executions: ExecutionLedger,
    history: Vec<Snapshot>,
    last_update: Option<String>,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(&QaMetricsConfig::default())
    }
}

impl MetricsEngine {
    pub fn new(config: &QaMetricsConfig) -> Self {
        Self::with_tracker(config, RequirementCoverageTracker::new())
    }

    /// Build an engine over a custom requirement catalog.
    pub fn with_tracker(config: &QaMetricsConfig, coverage: RequirementCoverageTracker) -> Self {
        Self {
            constants: config.engine,
            thresholds: config.thresholds.clone(),
            trend: config.trend.clone(),
            defects: DefectLedger::new(),
            coverage,
            executions: ExecutionLedger::new(),
            history: Vec::new(),
            last_update: None,
        }
    }

    /// Register one day of results and return its snapshot.
    ///
    /// Fails with [`Error::Validation`] on a blank day label or a defect
    /// with a blank id or module; nothing is applied in that case.
    pub fn register_day(
        &mut self,
        day: &str,
        defects_today: Vec<DefectRecord>,
        execution: DailyExecution,
    ) -> Result<Snapshot> {
        validate_day(day, &defects_today)?;

        let new_defects = defects_today.len();
        if !defects_today.is_empty() {
            self.defects.append(defects_today);
        }

        let placed = self.coverage.allocate(execution.approved);
        if placed < execution.approved {
            warn!(
                day,
                approved = execution.approved,
                placed,
                "approved cases exceeded requirement capacity; remainder discarded"
            );
        }

        self.executions.append(day, execution);
        self.last_update = Some(day.to_string());

        let mut snapshot = self.compute_snapshot(day, execution.executed);
        snapshot.exit_criteria = self.evaluate_against(&snapshot);

        debug!(
            day,
            new_defects,
            open = snapshot.open_defects,
            critical = snapshot.critical_defects,
            approval = snapshot.approval_rate,
            coverage = snapshot.requirement_coverage,
            criteria_met = snapshot.exit_criteria.satisfied_count(),
            "registered day"
        );

        self.history.push(snapshot.clone());
        Ok(snapshot)
    }

    fn compute_snapshot(&self, day: &str, executed_today: u32) -> Snapshot {
        let snapshot = Snapshot {
            day: day.to_string(),
            open_defects: self.defects.open_count(),
            critical_defects: self.defects.critical_open_count(),
            resolution_rate: self.defects.resolution_rate(),
            defect_density: self.defects.density_by_module(),
            escape_rate: self.defects.escape_rate(),
            productivity: ExecutionLedger::productivity(
                executed_today,
                self.constants.testers_available,
            ),
            approval_rate: self.executions.approval_rate(),
            automation_rate: self
                .executions
                .automation_rate(self.constants.total_planned_cases),
            requirement_coverage: self.coverage.coverage_pct(),
            exit_criteria: ExitVerdicts::default(),
        };

        assert_ratio_invariants(snapshot.resolution_rate, "resolution_rate");
        assert_ratio_invariants(snapshot.escape_rate, "escape_rate");
        assert_ratio_invariants(snapshot.requirement_coverage, "requirement_coverage");
        snapshot
    }

    fn evaluate_against(&self, snapshot: &Snapshot) -> ExitVerdicts {
        let coverage = self.coverage();
        exit_criteria::evaluate(
            snapshot,
            CoverageState {
                requirements_pct: coverage.requirements_pct,
                automation_pct: coverage.automation_pct,
            },
            self.defects.mean_resolution_days(),
            &self.thresholds,
        )
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.history.last()
    }

    pub fn constants(&self) -> EngineConstants {
        self.constants
    }

    pub fn defects(&self) -> &DefectLedger {
        &self.defects
    }

    pub fn executions(&self) -> &ExecutionLedger {
        &self.executions
    }

    pub fn requirements(&self) -> &RequirementCoverageTracker {
        &self.coverage
    }

    /// Exit criteria against the latest snapshot; empty before the first day.
    pub fn exit_criteria(&self) -> ExitVerdicts {
        self.latest()
            .map(|snapshot| self.evaluate_against(snapshot))
            .unwrap_or_default()
    }

    pub fn mean_resolution_days(&self) -> f64 {
        self.defects.mean_resolution_days()
    }

    pub fn coverage(&self) -> CoverageSummary {
        CoverageSummary {
            cases_pct: self.coverage.cases_coverage_pct(),
            requirements_pct: self.coverage.coverage_pct(),
            automation_pct: self
                .executions
                .automation_rate(self.constants.total_planned_cases),
        }
    }

    pub fn traceability(&self) -> Vec<TraceabilityRow> {
        self.coverage.export_traceability()
    }

    pub fn detect_trend(&self, metric: MetricName, window: usize) -> TrendReport {
        trend::detect_trend(&self.history, metric, window, self.trend.epsilon)
    }

    /// Trend reports for the configured summary metrics with the configured window.
    pub fn trend_summary(&self) -> Vec<TrendReport> {
        self.trend
            .summary_metrics
            .iter()
            .map(|metric| self.detect_trend(*metric, self.trend.window))
            .collect()
    }

    pub fn current_summary(&self) -> Option<CurrentSummary> {
        self.latest().map(|snapshot| CurrentSummary {
            snapshot: snapshot.clone(),
            last_update: self.last_update.clone().unwrap_or_default(),
            generated_at: Utc::now(),
        })
    }
}

fn validate_day(day: &str, defects: &[DefectRecord]) -> Result<()> {
    if day.trim().is_empty() {
        return Err(Error::Validation("day label must not be blank".to_string()));
    }

    defects
        .iter()
        .enumerate()
        .find_map(|(idx, record)| {
            record.missing_field().map(|field| {
                Error::Validation(format!(
                    "defect #{} of day {} is missing required field '{}'",
                    idx + 1,
                    day,
                    field
                ))
            })
        })
        .map_or(Ok(()), Err)
}
