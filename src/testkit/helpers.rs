//! Factory functions for test data.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`DefectBuilder`] | Build a [`DefectRecord`] fluently |
//! | [`snapshot_with`] | Zeroed [`Snapshot`] with selected fields set |
//! | [`DATASET_HEADER`] | Header row of the defect dataset CSV |

use crate::core::{
    DefectRecord, DefectState, Environment, ExitVerdicts, Severity, Snapshot,
};
use chrono::NaiveDate;

/// Header row of the defect dataset CSV.
pub const DATASET_HEADER: &str =
    "defecto_id,fecha,modulo,severidad,tipo,estado,reportado_por,dias_abierto,prioridad,ambiente,ciclo,version";

/// Fluent builder for defect records.
///
/// Defaults to an open, medium-severity QA defect in module `Reservas`
/// discovered on 2024-03-01.
#[derive(Debug, Clone)]
pub struct DefectBuilder {
    record: DefectRecord,
}

impl DefectBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: DefectRecord {
                id: id.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
                module: "Reservas".to_string(),
                severity: Severity::Medium,
                defect_type: "Funcional".to_string(),
                state: DefectState::Open,
                reporter: "QA Team".to_string(),
                days_open: 1,
                priority: "P2".to_string(),
                environment: Environment::Qa,
                cycle: "Sprint 1".to_string(),
                version: "v1.0".to_string(),
            },
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.record.date = date;
        self
    }

    pub fn module(mut self, module: &str) -> Self {
        self.record.module = module.to_string();
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.record.severity = severity;
        self
    }

    pub fn state(mut self, state: DefectState) -> Self {
        self.record.state = state;
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.record.environment = environment;
        self
    }

    pub fn days_open(mut self, days: u32) -> Self {
        self.record.days_open = days;
        self
    }

    pub fn build(self) -> DefectRecord {
        self.record
    }
}

/// Snapshot with every indicator at zero, adjusted by `f`.
pub fn snapshot_with(f: impl FnOnce(&mut Snapshot)) -> Snapshot {
    let mut snapshot = Snapshot {
        day: "2024-03-01".to_string(),
        open_defects: 0,
        critical_defects: 0,
        resolution_rate: 0.0,
        defect_density: 0.0,
        escape_rate: 0.0,
        productivity: 0.0,
        approval_rate: 0.0,
        automation_rate: 0.0,
        requirement_coverage: 0.0,
        exit_criteria: ExitVerdicts::default(),
    };
    f(&mut snapshot);
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_are_valid() {
        let record = DefectBuilder::new("D1").build();
        assert!(record.missing_field().is_none());
        assert!(record.is_open());
    }

    #[test]
    fn test_header_matches_record_fields() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(DefectBuilder::new("D1").build()).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().next(), Some(DATASET_HEADER));
    }
}
