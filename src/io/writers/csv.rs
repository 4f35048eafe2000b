//! CSV exports: the per-day summary table and the traceability matrix.

use crate::core::{Error, Result, Snapshot, TraceabilityRow};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const SUMMARY_COLUMNS: [&str; 11] = [
    "day",
    "open_defects",
    "critical_defects",
    "resolution_rate",
    "defect_density",
    "escape_rate",
    "productivity",
    "approval_rate",
    "automation_rate",
    "requirement_coverage",
    "exit_criteria_met",
];

#[derive(Serialize)]
struct SummaryRow<'a> {
    day: &'a str,
    open_defects: usize,
    critical_defects: usize,
    resolution_rate: f64,
    defect_density: f64,
    escape_rate: f64,
    productivity: f64,
    approval_rate: f64,
    automation_rate: f64,
    requirement_coverage: f64,
    exit_criteria_met: usize,
}

impl<'a> From<&'a Snapshot> for SummaryRow<'a> {
    fn from(s: &'a Snapshot) -> Self {
        Self {
            day: &s.day,
            open_defects: s.open_defects,
            critical_defects: s.critical_defects,
            resolution_rate: s.resolution_rate,
            defect_density: s.defect_density,
            escape_rate: s.escape_rate,
            productivity: s.productivity,
            approval_rate: s.approval_rate,
            automation_rate: s.automation_rate,
            requirement_coverage: s.requirement_coverage,
            exit_criteria_met: s.exit_criteria.satisfied_count(),
        }
    }
}

/// One row per snapshot, in history order.
pub fn write_summary<W: Write>(writer: W, history: &[Snapshot]) -> std::result::Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    // serialize only emits the header alongside the first record
    if history.is_empty() {
        csv_writer.write_record(SUMMARY_COLUMNS)?;
    }
    for snapshot in history {
        csv_writer.serialize(SummaryRow::from(snapshot))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_traceability<W: Write>(
    writer: W,
    rows: &[TraceabilityRow],
) -> std::result::Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_summary_file(path: &Path, history: &[Snapshot]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::export(path, e))?;
    write_summary(file, history).map_err(|e| export_error(path, e))
}

pub fn write_traceability_file(path: &Path, rows: &[TraceabilityRow]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::export(path, e))?;
    write_traceability(file, rows).map_err(|e| export_error(path, e))
}

fn export_error(path: &Path, err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => Error::export(path, source),
        kind => Error::export(path, std::io::Error::other(format!("{:?}", kind))),
    }
}
