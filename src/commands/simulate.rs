//! Replay the most recent days of a defect dataset through the engine.
//!
//! Day `i` (zero-based) registers the defects discovered on the i-th of the
//! last N distinct dates together with scenario row `min(i, len - 1)`.

use crate::cli;
use crate::config::{load_config, QaMetricsConfig};
use crate::core::{DefectRecord, Error, Result};
use crate::io::writers::{
    write_dashboard_file, write_summary_file, write_traceability_file, DashboardView,
};
use crate::io::{self, create_writer, group_by_day, recent_days, MetricsReport};
use crate::metrics::MetricsEngine;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct SimulateConfig {
    pub dataset: PathBuf,
    pub config: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub days: Option<usize>,
    pub format: cli::OutputFormat,
}

/// Engine state after a replay plus the files it produced.
pub struct SimulationRun {
    pub engine: MetricsEngine,
    pub artifacts: Vec<PathBuf>,
}

/// Register up to `days` dataset days; when `output_dir` is given, write a
/// dashboard per day and the summary and traceability CSVs at the end.
pub fn run_simulation(
    config: &QaMetricsConfig,
    records: Vec<DefectRecord>,
    days: usize,
    output_dir: Option<&Path>,
) -> Result<SimulationRun> {
    let mut engine = MetricsEngine::new(config);
    let mut artifacts = Vec::new();

    if let Some(dir) = output_dir {
        io::ensure_dir(dir)?;
    }

    let selected = recent_days(group_by_day(records), days);
    if selected.is_empty() {
        warn!("dataset contains no defect days; nothing to register");
    }

    for (index, (date, defects)) in selected.into_iter().enumerate() {
        let execution = config.simulation.execution_for(index).ok_or_else(|| {
            Error::Configuration("simulation scenario has no execution rows".to_string())
        })?;
        let label = date.to_string();
        engine.register_day(&label, defects, execution)?;

        if let Some(dir) = output_dir {
            let path = dir.join(format!("dashboard_day_{}.html", index + 1));
            write_dashboard(&engine, &path)?;
            info!(path = %path.display(), day = %label, "wrote dashboard");
            artifacts.push(path);
        }
    }

    if let Some(dir) = output_dir {
        let summary = dir.join(&config.output.summary_file);
        write_summary_file(&summary, engine.history())?;
        info!(path = %summary.display(), "wrote metrics summary");
        artifacts.push(summary);

        let traceability = dir.join(&config.output.traceability_file);
        write_traceability_file(&traceability, &engine.traceability())?;
        info!(path = %traceability.display(), "wrote traceability matrix");
        artifacts.push(traceability);
    }

    Ok(SimulationRun { engine, artifacts })
}

fn write_dashboard(engine: &MetricsEngine, path: &Path) -> Result<()> {
    let Some(snapshot) = engine.latest() else {
        return Ok(());
    };
    let trends = engine.trend_summary();
    write_dashboard_file(
        path,
        &DashboardView {
            snapshot,
            history: engine.history(),
            trends: &trends,
            generated_at: Utc::now(),
        },
    )
}

pub fn handle_simulate(config: SimulateConfig) -> anyhow::Result<()> {
    let settings = load_config(config.config.as_deref())?;
    let records = io::read_defects(&config.dataset)?;
    let days = config.days.unwrap_or(settings.simulation.days);
    let output_dir = config
        .output_dir
        .clone()
        .unwrap_or_else(|| settings.output.dashboard_dir.clone());

    let run = run_simulation(&settings, records, days, Some(&output_dir))?;
    let report = MetricsReport::from_engine(&run.engine).with_artifacts(run.artifacts);

    let stdout = std::io::stdout();
    let mut writer = create_writer(config.format.into(), stdout.lock());
    writer.write_report(&report)?;
    Ok(())
}
