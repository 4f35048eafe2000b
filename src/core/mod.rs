pub mod errors;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use errors::{Error, Result, ResultExt};

/// Defect severity as reported by the tracker.
///
/// The dataset spells these in Spanish; English spellings are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Critico", alias = "Critical")]
    Critical,
    #[serde(rename = "Alto", alias = "High")]
    High,
    #[serde(rename = "Medio", alias = "Medium")]
    Medium,
    #[serde(rename = "Bajo", alias = "Low")]
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectState {
    #[serde(rename = "Abierto", alias = "Open")]
    Open,
    #[serde(rename = "En progreso", alias = "In progress", alias = "InProgress")]
    InProgress,
    #[serde(rename = "Resuelto", alias = "Resolved")]
    Resolved,
}

impl DefectState {
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved)
    }
}

/// Environment the defect was discovered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Environment {
    #[serde(rename = "QA")]
    Qa,
    #[serde(rename = "Staging")]
    Staging,
    #[serde(rename = "Produccion", alias = "Production")]
    Production,
}

/// One row of the defect dataset. Never mutated once appended to a ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefectRecord {
    #[serde(rename = "defecto_id")]
    pub id: String,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "modulo")]
    pub module: String,
    #[serde(rename = "severidad")]
    pub severity: Severity,
    #[serde(rename = "tipo")]
    pub defect_type: String,
    #[serde(rename = "estado")]
    pub state: DefectState,
    #[serde(rename = "reportado_por")]
    pub reporter: String,
    #[serde(rename = "dias_abierto")]
    pub days_open: u32,
    #[serde(rename = "prioridad")]
    pub priority: String,
    #[serde(rename = "ambiente")]
    pub environment: Environment,
    #[serde(rename = "ciclo")]
    pub cycle: String,
    pub version: String,
}

impl DefectRecord {
    pub fn is_open(&self) -> bool {
        !self.state.is_resolved()
    }

    /// Checks the fields the ledgers aggregate on. Returns the name of the
    /// first blank required field.
    pub fn missing_field(&self) -> Option<&'static str> {
        [("defecto_id", &self.id), ("modulo", &self.module)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// Execution counters for one registered day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyExecution {
    pub planned: u32,
    pub executed: u32,
    pub approved: u32,
    pub failed: u32,
    pub automated: u32,
}

impl DailyExecution {
    pub const fn new(planned: u32, executed: u32, approved: u32, failed: u32, automated: u32) -> Self {
        Self {
            planned,
            executed,
            approved,
            failed,
            automated,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRow {
    pub day: String,
    #[serde(flatten)]
    pub counts: DailyExecution,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementRow {
    pub id: String,
    pub description: String,
    pub priority: String,
    pub total: u32,
    pub approved: u32,
}

impl RequirementRow {
    pub fn new(id: &str, description: &str, priority: &str, total: u32) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            total,
            approved: 0,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.approved)
    }

    pub fn is_pending(&self) -> bool {
        self.approved < self.total
    }

    pub fn is_covered(&self) -> bool {
        self.approved >= self.total
    }
}

/// Row of the requirement traceability export.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceabilityRow {
    pub id: String,
    pub description: String,
    pub priority: String,
    pub total: u32,
    pub approved: u32,
    pub coverage: f64,
}

/// Names of the nine indicators carried by every [`Snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    OpenDefects,
    CriticalDefects,
    ResolutionRate,
    DefectDensity,
    EscapeRate,
    Productivity,
    ApprovalRate,
    AutomationRate,
    RequirementCoverage,
}

impl MetricName {
    pub const ALL: [MetricName; 9] = [
        MetricName::OpenDefects,
        MetricName::CriticalDefects,
        MetricName::ResolutionRate,
        MetricName::DefectDensity,
        MetricName::EscapeRate,
        MetricName::Productivity,
        MetricName::ApprovalRate,
        MetricName::AutomationRate,
        MetricName::RequirementCoverage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenDefects => "open_defects",
            Self::CriticalDefects => "critical_defects",
            Self::ResolutionRate => "resolution_rate",
            Self::DefectDensity => "defect_density",
            Self::EscapeRate => "escape_rate",
            Self::Productivity => "productivity",
            Self::ApprovalRate => "approval_rate",
            Self::AutomationRate => "automation_rate",
            Self::RequirementCoverage => "requirement_coverage",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::OpenDefects => "Open defects",
            Self::CriticalDefects => "Critical defects",
            Self::ResolutionRate => "Resolution rate",
            Self::DefectDensity => "Defect density",
            Self::EscapeRate => "Escape rate",
            Self::Productivity => "Productivity",
            Self::ApprovalRate => "Approval rate",
            Self::AutomationRate => "Automation rate",
            Self::RequirementCoverage => "Requirement coverage",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MetricName::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| Error::Validation(format!("unknown metric '{}'", s)))
    }
}

/// Identifies one of the eight exit criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    CriticalClosed,
    OpenDefects,
    ApprovalRate,
    RequirementCoverage,
    AutomationRate,
    EscapeRate,
    ResolutionRate,
    MeanResolutionTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExitCriterion {
    pub kind: CriterionKind,
    pub name: String,
    pub satisfied: bool,
    pub detail: String,
}

/// Ordered set of exit-criteria verdicts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExitVerdicts(Vec<ExitCriterion>);

impl ExitVerdicts {
    pub fn new(criteria: Vec<ExitCriterion>) -> Self {
        Self(criteria)
    }

    pub fn get(&self, kind: CriterionKind) -> Option<&ExitCriterion> {
        self.0.iter().find(|c| c.kind == kind)
    }

    pub fn is_satisfied(&self, kind: CriterionKind) -> bool {
        self.get(kind).is_some_and(|c| c.satisfied)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExitCriterion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn satisfied_count(&self) -> usize {
        self.0.iter().filter(|c| c.satisfied).count()
    }

    /// True only when there is at least one verdict and all of them pass.
    pub fn all_satisfied(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|c| c.satisfied)
    }
}

impl<'a> IntoIterator for &'a ExitVerdicts {
    type Item = &'a ExitCriterion;
    type IntoIter = std::slice::Iter<'a, ExitCriterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One day's computed indicator bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub day: String,
    pub open_defects: usize,
    pub critical_defects: usize,
    pub resolution_rate: f64,
    pub defect_density: f64,
    pub escape_rate: f64,
    pub productivity: f64,
    pub approval_rate: f64,
    pub automation_rate: f64,
    pub requirement_coverage: f64,
    pub exit_criteria: ExitVerdicts,
}

impl Snapshot {
    pub fn value(&self, metric: MetricName) -> f64 {
        match metric {
            MetricName::OpenDefects => self.open_defects as f64,
            MetricName::CriticalDefects => self.critical_defects as f64,
            MetricName::ResolutionRate => self.resolution_rate,
            MetricName::DefectDensity => self.defect_density,
            MetricName::EscapeRate => self.escape_rate,
            MetricName::Productivity => self.productivity,
            MetricName::ApprovalRate => self.approval_rate,
            MetricName::AutomationRate => self.automation_rate,
            MetricName::RequirementCoverage => self.requirement_coverage,
        }
    }
}

/// Coverage figures derived from the requirement catalog and execution ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub cases_pct: f64,
    pub requirements_pct: f64,
    pub automation_pct: f64,
}

/// Latest snapshot plus bookkeeping for report headers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentSummary {
    pub snapshot: Snapshot,
    pub last_update: String,
    pub generated_at: DateTime<Utc>,
}
