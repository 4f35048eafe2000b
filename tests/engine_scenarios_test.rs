//! End-to-end behavior of the metrics engine across several registered days.

use pretty_assertions::assert_eq;
use qametrics::core::{CriterionKind, DailyExecution, DefectState, Environment, Severity};
use qametrics::testkit::DefectBuilder;
use qametrics::{Error, MetricName, MetricsEngine, Trend};

#[test]
fn test_two_day_release_scenario() -> anyhow::Result<()> {
    let mut engine = MetricsEngine::default();

    let day1 = engine.register_day("day-1", Vec::new(), DailyExecution::new(40, 36, 32, 4, 20))?;
    assert_eq!(day1.approval_rate, 0.889);
    assert_eq!(day1.open_defects, 0);
    assert_eq!(day1.resolution_rate, 0.0);
    assert_eq!(day1.productivity, 7.2);
    assert_eq!(day1.automation_rate, 0.091);

    let critical = DefectBuilder::new("D0003")
        .module("Pagos")
        .severity(Severity::Critical)
        .state(DefectState::Open)
        .environment(Environment::Production)
        .build();
    let day2 = engine.register_day("day-2", vec![critical], DailyExecution::new(45, 42, 39, 3, 25))?;

    assert_eq!(day2.critical_defects, 1);
    assert_eq!(day2.escape_rate, 1.0);
    assert_eq!(day2.approval_rate, 0.91);
    assert!(!day2.exit_criteria.is_satisfied(CriterionKind::CriticalClosed));
    assert!(!day2.exit_criteria.is_satisfied(CriterionKind::EscapeRate));
    assert!(day2.exit_criteria.is_satisfied(CriterionKind::OpenDefects));

    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current_summary().map(|s| s.last_update), Some("day-2".to_string()));
    Ok(())
}

#[test]
fn test_failed_registrations_do_not_grow_history() {
    let mut engine = MetricsEngine::default();
    engine
        .register_day("day-1", Vec::new(), DailyExecution::new(40, 36, 32, 4, 20))
        .unwrap();

    let blank_module = DefectBuilder::new("D1").module("").build();
    let result = engine.register_day(
        "day-2",
        vec![DefectBuilder::new("D0").build(), blank_module],
        DailyExecution::new(45, 42, 39, 3, 25),
    );
    assert!(matches!(result, Err(Error::Validation(_))));

    let result = engine.register_day("  ", Vec::new(), DailyExecution::default());
    assert!(matches!(result, Err(Error::Validation(_))));

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.defects().len(), 0);
    assert_eq!(engine.executions().rows().len(), 1);
    assert_eq!(engine.coverage().cases_pct, 0.155);
}

#[test]
fn test_resolution_improves_over_days() {
    let mut engine = MetricsEngine::default();
    let execution = DailyExecution::new(50, 48, 46, 2, 35);

    engine
        .register_day(
            "day-1",
            vec![
                DefectBuilder::new("D1").build(),
                DefectBuilder::new("D2").module("Pagos").build(),
            ],
            execution,
        )
        .unwrap();
    let last = engine
        .register_day(
            "day-2",
            vec![DefectBuilder::new("D3")
                .state(DefectState::Resolved)
                .days_open(3)
                .build()],
            execution,
        )
        .unwrap();

    assert_eq!(last.open_defects, 2);
    assert_eq!(last.resolution_rate, 0.333);
    assert_eq!(last.defect_density, 1.5);
    assert_eq!(engine.mean_resolution_days(), 3.0);

    let trend = engine.detect_trend(MetricName::ResolutionRate, 3);
    assert_eq!(trend.trend, Trend::Rising);
    assert_eq!(trend.delta, 0.333);
}

#[test]
fn test_trend_edges() {
    let mut engine = MetricsEngine::default();
    assert_eq!(
        engine.detect_trend(MetricName::OpenDefects, 3).trend,
        Trend::NoData
    );

    engine
        .register_day("day-1", Vec::new(), DailyExecution::new(40, 36, 32, 4, 20))
        .unwrap();
    let report = engine.detect_trend(MetricName::OpenDefects, 3);
    assert_eq!(report.trend, Trend::Stable);
    assert_eq!(report.delta, 0.0);
}
