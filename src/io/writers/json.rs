use super::{MetricsReport, ReportWriter};
use crate::core::Result;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &MetricsReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DailyExecution;
    use crate::metrics::MetricsEngine;

    #[test]
    fn test_json_report_shape() {
        let mut engine = MetricsEngine::default();
        engine
            .register_day("2024-03-01", Vec::new(), DailyExecution::new(40, 36, 32, 4, 20))
            .unwrap();

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&MetricsReport::from_engine(&engine))
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["history"][0]["approval_rate"], 0.889);
        assert_eq!(value["exit_criteria"][0]["kind"], "critical_closed");
        assert_eq!(value["trends"][0]["trend"], "stable");
        assert_eq!(value["summary"]["last_update"], "2024-03-01");
    }
}
