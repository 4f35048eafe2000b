//! Requirement coverage tracking.
//!
//! Holds the fixed requirement catalog and distributes each day's approved
//! test cases across requirements that still have room.
//!
//! # Allocation policy
//!
//! Allocation is a single greedy pass in catalog order. Every pending row
//! receives `min(space, max(1, remaining / pending_at_start))`, so earlier
//! rows absorb the rounding surplus and whatever is left after the pass is
//! discarded. The distribution is intentionally non-uniform and
//! reproducible: reordering the catalog changes the outcome.

use super::precision::{round_ratio, safe_ratio};
use crate::core::{RequirementRow, TraceabilityRow};

/// Catalog entries as `(id, description, priority, total cases)`, in the
/// same Spanish vocabulary as the dataset.
const CATALOG: [(&str, &str, &str, u32); 10] = [
    ("REQ-001", "Busqueda por fechas", "Alta", 12),
    ("REQ-002", "Filtrado por tipo de habitacion", "Alta", 10),
    ("REQ-003", "Reserva consolidada", "Critica", 18),
    ("REQ-004", "Simulador de pago", "Critica", 15),
    ("REQ-005", "Notificaciones email", "Media", 8),
    ("REQ-006", "Historial de reservas", "Media", 9),
    ("REQ-007", "Autenticacion y sesiones", "Critica", 14),
    ("REQ-008", "Dashboard administrativo", "Media", 7),
    ("REQ-009", "Politicas de cancelacion", "Baja", 6),
    ("REQ-010", "Reporte ocupacion", "Alta", 11),
];

#[derive(Debug, Clone)]
pub struct RequirementCoverageTracker {
    rows: Vec<RequirementRow>,
}

impl Default for RequirementCoverageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequirementCoverageTracker {
    pub fn new() -> Self {
        Self::with_rows(
            CATALOG
                .iter()
                .map(|(id, description, priority, total)| {
                    RequirementRow::new(id, description, priority, *total)
                })
                .collect(),
        )
    }

    /// Build a tracker over an arbitrary catalog. Approved counts are
    /// clamped to each row's target.
    pub fn with_rows(rows: Vec<RequirementRow>) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.approved = row.approved.min(row.total);
                row
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[RequirementRow] {
        &self.rows
    }

    pub fn remaining_space(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.remaining())).sum()
    }

    /// Distribute today's approved cases and return how many were placed.
    pub fn allocate(&mut self, approved_today: u32) -> u32 {
        if approved_today == 0 {
            return 0;
        }

        let pending: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_pending())
            .map(|(idx, _)| idx)
            .collect();

        if pending.is_empty() {
            return 0;
        }

        let pending_count = pending.len() as u32;
        let mut remaining = approved_today;
        for idx in pending {
            if remaining == 0 {
                break;
            }
            let row = &mut self.rows[idx];
            let share = (remaining / pending_count).max(1);
            let increment = row.remaining().min(share);
            row.approved += increment;
            remaining -= increment;
        }

        approved_today - remaining
    }

    /// Fraction of requirements whose target is fully approved.
    pub fn coverage_pct(&self) -> f64 {
        let covered = self.rows.iter().filter(|r| r.is_covered()).count();
        round_ratio(safe_ratio(covered as f64, self.rows.len() as f64))
    }

    /// Approved cases over target cases across the whole catalog.
    pub fn cases_coverage_pct(&self) -> f64 {
        let total: u64 = self.rows.iter().map(|r| u64::from(r.total)).sum();
        let approved: u64 = self.rows.iter().map(|r| u64::from(r.approved)).sum();
        round_ratio(safe_ratio(approved as f64, total as f64))
    }

    pub fn export_traceability(&self) -> Vec<TraceabilityRow> {
        self.rows
            .iter()
            .map(|row| TraceabilityRow {
                id: row.id.clone(),
                description: row.description.clone(),
                priority: row.priority.clone(),
                total: row.total,
                approved: row.approved,
                coverage: round_ratio(safe_ratio(row.approved as f64, row.total as f64)),
            })
            .collect()
    }
}
