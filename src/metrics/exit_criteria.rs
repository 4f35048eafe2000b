//! Pure exit-criteria evaluation.
//!
//! Each criterion compares one indicator of a snapshot against its
//! threshold. Nothing here is fallible: a missing snapshot is represented by
//! the caller returning an empty [`ExitVerdicts`].

use crate::config::ExitThresholds;
use crate::core::{CriterionKind, ExitCriterion, ExitVerdicts, Snapshot};

/// Inputs that are not carried on the snapshot itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageState {
    pub requirements_pct: f64,
    pub automation_pct: f64,
}

fn criterion(kind: CriterionKind, name: String, satisfied: bool, detail: String) -> ExitCriterion {
    ExitCriterion {
        kind,
        name,
        satisfied,
        detail,
    }
}

fn percent(ratio: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, ratio * 100.0)
}

/// Evaluate all eight criteria in their fixed reporting order.
pub fn evaluate(
    snapshot: &Snapshot,
    coverage: CoverageState,
    mean_resolution_days: f64,
    thresholds: &ExitThresholds,
) -> ExitVerdicts {
    let critical_name = if thresholds.max_critical_open == 0 {
        "Critical defects closed".to_string()
    } else {
        format!("Critical defects <= {}", thresholds.max_critical_open)
    };

    ExitVerdicts::new(vec![
        criterion(
            CriterionKind::CriticalClosed,
            critical_name,
            snapshot.critical_defects <= thresholds.max_critical_open,
            format!("{} critical open", snapshot.critical_defects),
        ),
        criterion(
            CriterionKind::OpenDefects,
            format!("Open defects <= {}", thresholds.max_open_defects),
            snapshot.open_defects <= thresholds.max_open_defects,
            format!("{} open", snapshot.open_defects),
        ),
        criterion(
            CriterionKind::ApprovalRate,
            format!("Approval rate >= {}", percent(thresholds.min_approval_rate, 0)),
            snapshot.approval_rate >= thresholds.min_approval_rate,
            percent(snapshot.approval_rate, 0),
        ),
        criterion(
            CriterionKind::RequirementCoverage,
            format!(
                "Requirement coverage >= {}",
                percent(thresholds.min_requirement_coverage, 0)
            ),
            coverage.requirements_pct >= thresholds.min_requirement_coverage,
            percent(coverage.requirements_pct, 0),
        ),
        criterion(
            CriterionKind::AutomationRate,
            format!("Automation >= {}", percent(thresholds.min_automation_rate, 0)),
            coverage.automation_pct >= thresholds.min_automation_rate,
            percent(coverage.automation_pct, 0),
        ),
        criterion(
            CriterionKind::EscapeRate,
            format!("Escape rate <= {}", percent(thresholds.max_escape_rate, 0)),
            snapshot.escape_rate <= thresholds.max_escape_rate,
            percent(snapshot.escape_rate, 1),
        ),
        criterion(
            CriterionKind::ResolutionRate,
            format!("Resolution rate >= {}", percent(thresholds.min_resolution_rate, 0)),
            snapshot.resolution_rate >= thresholds.min_resolution_rate,
            percent(snapshot.resolution_rate, 0),
        ),
        criterion(
            CriterionKind::MeanResolutionTime,
            format!(
                "Mean resolution time <= {} days",
                thresholds.max_mean_resolution_days
            ),
            mean_resolution_days <= thresholds.max_mean_resolution_days,
            format!("{:.1} days", mean_resolution_days),
        ),
    ])
}
