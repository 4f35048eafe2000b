//! Per-day execution counters and the cumulative rates derived from them.

use super::precision::{round_ratio, round_score, safe_ratio};
use crate::core::{DailyExecution, ExecutionRow};

#[derive(Debug, Clone, Default)]
pub struct ExecutionLedger {
    rows: Vec<ExecutionRow>,
}

impl ExecutionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, day: impl Into<String>, counts: DailyExecution) {
        self.rows.push(ExecutionRow {
            day: day.into(),
            counts,
        });
    }

    pub fn rows(&self) -> &[ExecutionRow] {
        &self.rows
    }

    fn sum_by(&self, field: impl Fn(&DailyExecution) -> u32) -> u64 {
        self.rows.iter().map(|r| u64::from(field(&r.counts))).sum()
    }

    /// Approved over executed across every registered day.
    pub fn approval_rate(&self) -> f64 {
        let executed = self.sum_by(|c| c.executed);
        let approved = self.sum_by(|c| c.approved);
        round_ratio(safe_ratio(approved as f64, executed as f64))
    }

    /// Automated cases so far over the planned-case constant.
    pub fn automation_rate(&self, total_planned_cases: u32) -> f64 {
        let automated = self.sum_by(|c| c.automated);
        round_ratio(safe_ratio(automated as f64, f64::from(total_planned_cases)))
    }

    /// Cases executed today per available tester.
    pub fn productivity(executed_today: u32, testers_available: u32) -> f64 {
        round_score(safe_ratio(
            f64::from(executed_today),
            f64::from(testers_available),
        ))
    }
}
