use chrono::NaiveDate;

use opspulse::config::ScoringConfig;
use opspulse::report::{self, AlertPolicy};
use opspulse::scoring::{
    ActivityEntry, ActivityStore, BehavioralEntry, EmployeeId, ScoreCalculator, StandardsRegistry,
};

fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid evaluation date")
}

fn log(store: &ActivityStore, id: &str, task: &str, count: u32) {
    store
        .add(ActivityEntry::new(
            EmployeeId::new(id),
            eval_date(),
            task,
            count,
        ))
        .expect("valid activity");
}

fn log_behavior(store: &ActivityStore, id: &str, idle_hours: f64, conduct_flag: bool) {
    store
        .add_behavioral(BehavioralEntry {
            employee_id: EmployeeId::new(id),
            date: eval_date(),
            idle_hours,
            conduct_flag,
        })
        .expect("valid behavioral entry");
}

/// The documented single-date team scenario: five employees whose final
/// scores land on {156.25, 110.25, 95.00, 68.75, 25.00}.
fn team_store() -> ActivityStore {
    let store = ActivityStore::new();

    // 650 points, clean behavior -> 156.25
    log(&store, "ace", "Authorization Created", 14);
    log(&store, "ace", "Eligibility Check", 1);

    // 450 points, 1h idle -> 110.25
    log(&store, "brook", "Authorization Created", 10);
    log_behavior(&store, "brook", 1.0, false);

    // 380 points, 0.5h idle -> 95.00
    log(&store, "casey", "Authorization Created", 8);
    log(&store, "casey", "Appeal", 2);
    log_behavior(&store, "casey", 0.5, false);

    // 270 points, 2h idle -> 68.75
    log(&store, "devon", "Claims Processing", 9);
    log_behavior(&store, "devon", 2.0, false);

    // 100 points, 2.5h idle plus conduct flag -> 25.00
    log(&store, "emery", "Pharmacy Call", 10);
    log_behavior(&store, "emery", 2.5, true);

    store
}

#[test]
fn team_scenario_produces_documented_leaderboard_order() {
    let registry = StandardsRegistry::seed_default();
    let calculator = ScoreCalculator::new(ScoringConfig::default()).expect("valid config");

    let run = calculator
        .calculate_for_date(eval_date(), &registry, &team_store())
        .expect("run succeeds");
    assert!(run.warnings.is_empty());

    let ranked = report::rank(&run.records);
    let finals: Vec<f64> = ranked.iter().map(|r| r.final_percent).collect();
    let expected = [156.25, 110.25, 95.0, 68.75, 25.0];
    assert_eq!(finals.len(), expected.len());
    for (actual, want) in finals.iter().zip(expected) {
        assert!(
            (actual - want).abs() < 1e-9,
            "expected {want}, got {actual} in {finals:?}"
        );
    }

    let order: Vec<&str> = ranked.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(order, ["ace", "brook", "casey", "devon", "emery"]);
}

#[test]
fn only_the_critical_record_is_alerted_at_default_threshold() {
    let registry = StandardsRegistry::seed_default();
    let calculator = ScoreCalculator::new(ScoringConfig::default()).expect("valid config");

    let run = calculator
        .calculate_for_date(eval_date(), &registry, &team_store())
        .expect("run succeeds");

    let alerts = report::scan(&run.records, &AlertPolicy::default());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].record.employee_id.as_str(), "emery");
    assert!((alerts[0].shortfall - 25.0).abs() < 1e-9);
}

#[test]
fn leaderboard_view_carries_ranks_and_rating_labels() {
    let registry = StandardsRegistry::seed_default();
    let calculator = ScoreCalculator::new(ScoringConfig::default()).expect("valid config");

    let run = calculator
        .calculate_for_date(eval_date(), &registry, &team_store())
        .expect("run succeeds");

    let entries = report::leaderboard(&run.records);
    assert_eq!(entries[0].rank, 1);
    assert_eq!(entries[0].rating_label, "Excellent");
    assert_eq!(entries[2].rating_label, "Excellent"); // 95.0 is >= 90
    assert_eq!(entries[3].rating_label, "Needs Improvement");
    assert_eq!(entries[4].rating_label, "Critical");

    let json = serde_json::to_value(&entries[4]).expect("entry serializes");
    assert_eq!(json["employee_id"], "emery");
    assert_eq!(json["rating"], "critical");
}

#[test]
fn statistics_summarize_the_team_run() {
    let registry = StandardsRegistry::seed_default();
    let calculator = ScoreCalculator::new(ScoringConfig::default()).expect("valid config");

    let run = calculator
        .calculate_for_date(eval_date(), &registry, &team_store())
        .expect("run succeeds");

    let stats = report::ScoreStatistics::from_records(&run.records).expect("non-empty");
    assert_eq!(stats.count, 5);
    assert!((stats.median - 95.0).abs() < 1e-9);
    assert!((stats.min - 25.0).abs() < 1e-9);
    assert!((stats.max - 156.25).abs() < 1e-9);
    assert!((stats.mean - 91.05).abs() < 1e-9);
    assert!(stats.std_dev.expect("n >= 2") > 0.0);
}

#[test]
fn csv_export_projects_one_row_per_record() {
    let registry = StandardsRegistry::seed_default();
    let calculator = ScoreCalculator::new(ScoringConfig::default()).expect("valid config");

    let run = calculator
        .calculate_for_date(eval_date(), &registry, &team_store())
        .expect("run succeeds");
    let ranked = report::rank(&run.records);

    let csv = report::to_csv_string(&ranked).expect("export succeeds");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6, "header plus five rows");
    assert!(lines[0].starts_with("Emp_ID,Date,"));
    assert!(lines[1].starts_with("ace,2025-07-14,650.0,"));
    assert!(lines[5].starts_with("emery,2025-07-14,100.0,"));
}
