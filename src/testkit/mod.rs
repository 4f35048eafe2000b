//! Testing infrastructure for qametrics.
//!
//! - **Builders**: [`DefectBuilder`] and [`snapshot_with`] for engine inputs
//!   and evaluator fixtures
//! - **Assertion macros**: [`crate::assert_result_err!`] and
//!   [`crate::assert_contains_error!`]
//!
//! # Quick Start
//!
//! ```rust
//! use qametrics::core::{DailyExecution, Severity};
//! use qametrics::metrics::MetricsEngine;
//! use qametrics::testkit::DefectBuilder;
//!
//! let mut engine = MetricsEngine::default();
//! let defect = DefectBuilder::new("D0001").severity(Severity::Critical).build();
//! let snapshot = engine
//!     .register_day("2024-03-01", vec![defect], DailyExecution::new(40, 36, 32, 4, 20))
//!     .unwrap();
//! assert_eq!(snapshot.critical_defects, 1);
//! ```

pub mod assertions;
pub mod helpers;

pub use helpers::{snapshot_with, DefectBuilder, DATASET_HEADER};
