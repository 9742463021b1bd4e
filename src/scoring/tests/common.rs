use chrono::NaiveDate;

use crate::config::ScoringConfig;
use crate::scoring::calculator::ScoreCalculator;
use crate::scoring::domain::{ActivityEntry, BehavioralEntry, EmployeeId};
use crate::scoring::standards::StandardsRegistry;
use crate::scoring::store::ActivityStore;

pub(super) fn eval_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid evaluation date")
}

pub(super) fn registry() -> StandardsRegistry {
    StandardsRegistry::seed_default()
}

pub(super) fn calculator() -> ScoreCalculator {
    ScoreCalculator::new(ScoringConfig::default()).expect("default config is valid")
}

pub(super) fn employee(id: &str) -> EmployeeId {
    EmployeeId::new(id)
}

pub(super) fn log_activity(
    store: &ActivityStore,
    id: &str,
    date: NaiveDate,
    task_name: &str,
    count: u32,
) {
    store
        .add(ActivityEntry::new(employee(id), date, task_name, count))
        .expect("fixture activity is valid");
}

pub(super) fn log_behavioral(
    store: &ActivityStore,
    id: &str,
    date: NaiveDate,
    idle_hours: f64,
    conduct_flag: bool,
) {
    store
        .add_behavioral(BehavioralEntry {
            employee_id: employee(id),
            date,
            idle_hours,
            conduct_flag,
        })
        .expect("fixture behavioral entry is valid");
}
