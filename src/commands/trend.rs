use super::simulate::run_simulation;
use crate::config::load_config;
use crate::core::MetricName;
use crate::io;
use crate::metrics::TrendReport;
use colored::*;
use std::path::PathBuf;

pub struct TrendConfig {
    pub dataset: PathBuf,
    pub metric: MetricName,
    pub window: Option<usize>,
    pub config: Option<PathBuf>,
    pub days: Option<usize>,
}

pub fn handle_trend(config: TrendConfig) -> anyhow::Result<()> {
    let settings = load_config(config.config.as_deref())?;
    let records = io::read_defects(&config.dataset)?;
    let days = config.days.unwrap_or(settings.simulation.days);

    let run = run_simulation(&settings, records, days, None)?;
    let window = config.window.unwrap_or(settings.trend.window);
    let report = run.engine.detect_trend(config.metric, window);

    println!("{}", format_trend(&report, window));
    Ok(())
}

fn format_trend(report: &TrendReport, window: usize) -> String {
    format!(
        "{} over the last {} day(s): {} ({:+.3})",
        report.metric.label().bold(),
        window.max(1),
        report.trend,
        report.delta
    )
}
