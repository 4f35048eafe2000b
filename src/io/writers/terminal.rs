use super::{MetricsReport, ReportWriter};
use crate::core::{ExitVerdicts, Result, Snapshot};
use crate::metrics::{Trend, TrendReport};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────";

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer, "{}", "           QA METRICS REPORT".bold().cyan())?;
        writeln!(self.writer, "{}", RULE.cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_history(&mut self, history: &[Snapshot]) -> Result<()> {
        writeln!(self.writer, "{}", "Daily snapshots".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        if history.is_empty() {
            writeln!(self.writer, "No days registered.")?;
            writeln!(self.writer)?;
            return Ok(());
        }
        writeln!(self.writer, "{}", history_table(history))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_coverage(&mut self, report: &MetricsReport) -> Result<()> {
        let coverage = &report.coverage;
        writeln!(self.writer, "{}", "Coverage".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        writeln!(self.writer, "  Cases:        {}", percent(coverage.cases_pct))?;
        writeln!(self.writer, "  Requirements: {}", percent(coverage.requirements_pct))?;
        writeln!(self.writer, "  Automation:   {}", percent(coverage.automation_pct))?;
        writeln!(
            self.writer,
            "  Mean resolution time: {:.1} days",
            report.mean_resolution_days
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_exit_criteria(&mut self, verdicts: &ExitVerdicts) -> Result<()> {
        writeln!(
            self.writer,
            "{} ({}/{} met)",
            "Exit criteria".bold(),
            verdicts.satisfied_count(),
            verdicts.len()
        )?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        for criterion in verdicts {
            let status = if criterion.satisfied {
                "OK".green().bold()
            } else {
                "Pending".red().bold()
            };
            writeln!(
                self.writer,
                "  [{}] {} ({})",
                status, criterion.name, criterion.detail
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trends(&mut self, trends: &[TrendReport]) -> Result<()> {
        writeln!(self.writer, "{}", "Trends".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        for report in trends {
            let trend = match report.trend {
                Trend::Rising => report.trend.to_string().yellow(),
                Trend::Falling => report.trend.to_string().blue(),
                Trend::Stable | Trend::NoData => report.trend.to_string().normal(),
            };
            writeln!(
                self.writer,
                "  {}: {} ({:+.3})",
                report.metric.label(),
                trend,
                report.delta
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_artifacts(&mut self, report: &MetricsReport) -> Result<()> {
        if report.artifacts.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "{}", "Artifacts".bold())?;
        writeln!(self.writer, "{}", THIN_RULE)?;
        for path in &report.artifacts {
            writeln!(self.writer, "  {}", path.display())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_release_status(&mut self, report: &MetricsReport) -> Result<()> {
        if report.ready_for_release() {
            writeln!(self.writer, "{}", "✓ Ready for release".green().bold())?;
        } else {
            writeln!(self.writer, "{}", "✗ Not ready for release".red().bold())?;
        }
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &MetricsReport) -> Result<()> {
        self.write_header()?;
        self.write_history(&report.history)?;
        self.write_coverage(report)?;
        self.write_exit_criteria(&report.exit_criteria)?;
        self.write_trends(&report.trends)?;
        self.write_artifacts(report)?;
        self.write_release_status(report)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn history_table(history: &[Snapshot]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Day",
            "Open",
            "Critical",
            "Resolution",
            "Escape",
            "Productivity",
            "Approval",
            "Automation",
            "Req. coverage",
            "Criteria",
        ]);

    for s in history {
        table.add_row(vec![
            s.day.clone(),
            s.open_defects.to_string(),
            s.critical_defects.to_string(),
            percent(s.resolution_rate),
            percent(s.escape_rate),
            format!("{:.2}", s.productivity),
            percent(s.approval_rate),
            percent(s.automation_rate),
            percent(s.requirement_coverage),
            format!(
                "{}/{}",
                s.exit_criteria.satisfied_count(),
                s.exit_criteria.len()
            ),
        ]);
    }
    table
}
