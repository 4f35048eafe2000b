//! Per-day HTML dashboard.
//!
//! The page is a static template with `{{{PLACEHOLDER}}}` slots. Every
//! piece of dynamic text goes through `html_escape` before substitution.

use crate::core::{Error, MetricName, Result, Snapshot};
use crate::metrics::TrendReport;
use chrono::{DateTime, Utc};
use html_escape::encode_text;
use std::io::Write;
use std::path::Path;

const TEMPLATE: &str = include_str!("templates/dashboard.html");

/// Data rendered on one dashboard: the day's snapshot, the history up to
/// and including it, and the trend summary at that point.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    pub snapshot: &'a Snapshot,
    pub history: &'a [Snapshot],
    pub trends: &'a [TrendReport],
    pub generated_at: DateTime<Utc>,
}

pub struct DashboardWriter<W: Write> {
    writer: W,
}

impl<W: Write> DashboardWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_dashboard(&mut self, view: &DashboardView<'_>) -> Result<()> {
        write!(self.writer, "{}", render_dashboard(view))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Render and write a dashboard to `path`.
pub fn write_dashboard_file(path: &Path, view: &DashboardView<'_>) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|e| Error::export(path, e))?;
    DashboardWriter::new(std::io::BufWriter::new(file))
        .write_dashboard(view)
        .map_err(|e| match e {
            Error::Io(source) => Error::export(path, source),
            other => other,
        })
}

fn format_value(metric: MetricName, snapshot: &Snapshot) -> String {
    match metric {
        MetricName::OpenDefects => snapshot.open_defects.to_string(),
        MetricName::CriticalDefects => snapshot.critical_defects.to_string(),
        MetricName::DefectDensity | MetricName::Productivity => {
            format!("{:.2}", snapshot.value(metric))
        }
        _ => format!("{:.1}%", snapshot.value(metric) * 100.0),
    }
}

fn summary_rows(snapshot: &Snapshot) -> String {
    MetricName::ALL
        .iter()
        .map(|metric| {
            format!(
                "            <tr><th>{}</th><td>{}</td></tr>",
                metric.label(),
                format_value(*metric, snapshot)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn history_rows(history: &[Snapshot]) -> String {
    history
        .iter()
        .map(|s| {
            format!(
                "            <tr><td>{}</td><td>{}</td><td>{:.1}%</td><td>{:.1}%</td></tr>",
                encode_text(&s.day),
                s.open_defects,
                s.approval_rate * 100.0,
                s.requirement_coverage * 100.0
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn criteria_rows(snapshot: &Snapshot) -> String {
    snapshot
        .exit_criteria
        .iter()
        .map(|c| {
            let (class, status) = if c.satisfied {
                ("ok", "OK")
            } else {
                ("pending", "Pending")
            };
            format!(
                "            <tr><td>{}</td><td class=\"{}\">{}</td><td>{}</td></tr>",
                encode_text(&c.name),
                class,
                status,
                encode_text(&c.detail)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trend_rows(trends: &[TrendReport]) -> String {
    trends
        .iter()
        .map(|t| {
            format!(
                "            <tr><td>{}</td><td>{}</td><td>{:+.3}</td></tr>",
                t.metric.label(),
                t.trend,
                t.delta
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_dashboard(view: &DashboardView<'_>) -> String {
    let snapshot = view.snapshot;
    let criteria_met = format!(
        "{}/{} met",
        snapshot.exit_criteria.satisfied_count(),
        snapshot.exit_criteria.len()
    );

    TEMPLATE
        .replace("{{{DAY}}}", &encode_text(&snapshot.day))
        .replace("{{{SUMMARY_ROWS}}}", &summary_rows(snapshot))
        .replace("{{{HISTORY_ROWS}}}", &history_rows(view.history))
        .replace("{{{CRITERIA_MET}}}", &criteria_met)
        .replace("{{{CRITERIA_ROWS}}}", &criteria_rows(snapshot))
        .replace("{{{TREND_ROWS}}}", &trend_rows(view.trends))
        .replace(
            "{{{GENERATED_AT}}}",
            &view.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
}
