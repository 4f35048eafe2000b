pub mod csv;
pub mod html;
pub mod json;
pub mod terminal;

pub use self::csv::{write_summary, write_summary_file, write_traceability, write_traceability_file};
pub use html::{render_dashboard, write_dashboard_file, DashboardView, DashboardWriter};
pub use json::JsonWriter;
pub use terminal::TerminalWriter;

use crate::core::{CoverageSummary, CurrentSummary, ExitVerdicts, Result, Snapshot};
use crate::metrics::{MetricsEngine, TrendReport};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

/// Everything a report needs from a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub summary: Option<CurrentSummary>,
    pub history: Vec<Snapshot>,
    pub exit_criteria: ExitVerdicts,
    pub trends: Vec<TrendReport>,
    pub coverage: CoverageSummary,
    pub mean_resolution_days: f64,
    pub artifacts: Vec<PathBuf>,
}

impl MetricsReport {
    pub fn from_engine(engine: &MetricsEngine) -> Self {
        Self {
            summary: engine.current_summary(),
            history: engine.history().to_vec(),
            exit_criteria: engine.exit_criteria(),
            trends: engine.trend_summary(),
            coverage: engine.coverage(),
            mean_resolution_days: engine.mean_resolution_days(),
            artifacts: Vec::new(),
        }
    }

    pub fn with_artifacts(mut self, artifacts: Vec<PathBuf>) -> Self {
        self.artifacts = artifacts;
        self
    }

    pub fn ready_for_release(&self) -> bool {
        self.exit_criteria.all_satisfied()
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &MetricsReport) -> Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
