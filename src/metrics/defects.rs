//! Append-only defect ledger and its point-in-time aggregates.

use super::precision::{round_ratio, round_score, safe_ratio};
use crate::core::{DefectRecord, Environment, Severity};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DefectLedger {
    records: Vec<DefectRecord>,
}

impl DefectLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch. Callers validate the batch first; the ledger never
    /// rejects or rewrites records.
    pub fn append(&mut self, records: impl IntoIterator<Item = DefectRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[DefectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_open()).count()
    }

    pub fn critical_open_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.severity == Severity::Critical && r.is_open())
            .count()
    }

    fn resolved(&self) -> impl Iterator<Item = &DefectRecord> {
        self.records.iter().filter(|r| r.state.is_resolved())
    }

    pub fn resolution_rate(&self) -> f64 {
        let resolved = self.resolved().count();
        round_ratio(safe_ratio(resolved as f64, self.records.len() as f64))
    }

    /// Mean number of records per module that has at least one record.
    pub fn density_by_module(&self) -> f64 {
        let mut per_module: HashMap<&str, usize> = HashMap::new();
        for record in &self.records {
            *per_module.entry(record.module.as_str()).or_default() += 1;
        }
        round_score(safe_ratio(
            self.records.len() as f64,
            per_module.len() as f64,
        ))
    }

    pub fn escape_rate(&self) -> f64 {
        let escaped = self
            .records
            .iter()
            .filter(|r| r.environment == Environment::Production)
            .count();
        round_ratio(safe_ratio(escaped as f64, self.records.len() as f64))
    }

    pub fn mean_resolution_days(&self) -> f64 {
        let (count, days) = self
            .resolved()
            .fold((0usize, 0u64), |(count, days), r| {
                (count + 1, days + u64::from(r.days_open))
            });
        round_score(safe_ratio(days as f64, count as f64))
    }
}
