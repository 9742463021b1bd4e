use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ConfigurationError, ScoringConfig};

use super::domain::{ActivityEntry, BehavioralEntry, EmployeeId, PerformanceRecord};
use super::standards::StandardsRegistry;
use super::store::{ActivityStore, InvalidEntryError};

/// Non-fatal data-quality finding: an activity entry referenced a task with
/// no registered standard. The entry contributed zero points; the run still
/// completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownTaskWarning {
    pub task_name: String,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
}

/// Fatal calculation failures. Data-quality issues are not errors; they are
/// collected as [`UnknownTaskWarning`]s on the run.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("invalid input reached the calculator: {0}")]
    InvalidInput(#[from] InvalidEntryError),
}

/// Output of one per-date calculation: the record set plus the data-quality
/// warnings gathered along the way. Warnings belong to the run, not to a
/// record, and are deduplicated per (employee, task).
#[derive(Debug, Clone, Serialize)]
pub struct CalculationRun {
    pub date: NaiveDate,
    pub records: Vec<PerformanceRecord>,
    pub warnings: Vec<UnknownTaskWarning>,
}

/// Behavioral inputs after duplicate resolution. The `Default` value is the
/// documented "no behavioral entry" path: zero idle hours, no conduct flag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BehavioralInputs {
    pub idle_hours: f64,
    pub conduct_flag: bool,
}

impl BehavioralInputs {
    /// Merge possibly-duplicated daily rows max-per-field: worst observed
    /// idle time wins, and any flagged row flags the day. Row order never
    /// matters.
    pub fn resolve(entries: &[BehavioralEntry]) -> Self {
        entries.iter().fold(Self::default(), |merged, entry| Self {
            idle_hours: merged.idle_hours.max(entry.idle_hours),
            conduct_flag: merged.conduct_flag || entry.conduct_flag,
        })
    }
}

/// Pure, deterministic mapping from (date, standards, activity) to
/// performance records.
///
/// Tunables are fixed at construction; recomputing with different weights or
/// targets means a new calculator, so historical runs stay reproducible.
pub struct ScoreCalculator {
    config: ScoringConfig,
}

impl ScoreCalculator {
    /// Build a calculator, rejecting unusable tunables up front. A
    /// non-positive daily target would divide by zero in every record, so it
    /// is a [`ConfigurationError`] here rather than a latent NaN later.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compute one record per employee with at least one activity entry on
    /// `date`. Employees without entries produce no record: absence means
    /// "no data", which downstream reporting must keep distinct from an
    /// explicit zero score.
    ///
    /// Output ordering is unspecified; callers that need a ranking sort via
    /// [`crate::report::leaderboard`].
    pub fn calculate_for_date(
        &self,
        date: NaiveDate,
        standards: &StandardsRegistry,
        store: &ActivityStore,
    ) -> Result<CalculationRun, CalculationError> {
        let entries = store.activities_on(date, None);
        let employees: BTreeSet<EmployeeId> = entries
            .iter()
            .map(|entry| entry.employee_id.clone())
            .collect();

        let mut records = Vec::with_capacity(employees.len());
        let mut warnings = Vec::new();

        for employee in employees {
            let own_entries: Vec<&ActivityEntry> = entries
                .iter()
                .filter(|entry| entry.employee_id == employee)
                .collect();
            let behavioral = store.behavioral_on(date, Some(&employee));
            let record = self.score_employee(
                standards,
                &employee,
                date,
                &own_entries,
                &behavioral,
                &mut warnings,
            )?;
            records.push(record);
        }

        debug!(
            date = %date,
            records = records.len(),
            warnings = warnings.len(),
            "performance calculation run complete"
        );

        Ok(CalculationRun {
            date,
            records,
            warnings,
        })
    }

    /// Compute the record for a single employee on `date`, or `None` if they
    /// logged no activity that day.
    pub fn calculate_for_employee(
        &self,
        employee: &EmployeeId,
        date: NaiveDate,
        standards: &StandardsRegistry,
        store: &ActivityStore,
    ) -> Result<Option<(PerformanceRecord, Vec<UnknownTaskWarning>)>, CalculationError> {
        let entries = store.activities_on(date, Some(employee));
        if entries.is_empty() {
            return Ok(None);
        }
        let refs: Vec<&ActivityEntry> = entries.iter().collect();
        let behavioral = store.behavioral_on(date, Some(employee));
        let mut warnings = Vec::new();
        let record = self.score_employee(standards, employee, date, &refs, &behavioral, &mut warnings)?;
        Ok(Some((record, warnings)))
    }

    /// Run the per-date calculation for every activity date in the inclusive
    /// range, keyed chronologically.
    pub fn calculate_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        standards: &StandardsRegistry,
        store: &ActivityStore,
    ) -> Result<BTreeMap<NaiveDate, CalculationRun>, CalculationError> {
        let mut runs = BTreeMap::new();
        for date in store.dates_between(start, end) {
            runs.insert(date, self.calculate_for_date(date, standards, store)?);
        }
        Ok(runs)
    }

    fn score_employee(
        &self,
        standards: &StandardsRegistry,
        employee: &EmployeeId,
        date: NaiveDate,
        entries: &[&ActivityEntry],
        behavioral: &[BehavioralEntry],
        warnings: &mut Vec<UnknownTaskWarning>,
    ) -> Result<PerformanceRecord, CalculationError> {
        let mut total_task_points = 0.0;

        for entry in entries {
            // Upstream validation should make this unreachable; reject rather
            // than clamp so a store bypass cannot hide.
            if entry.count == 0 {
                return Err(InvalidEntryError::NonPositiveCount {
                    task_name: entry.task_name.clone(),
                    count: entry.count,
                }
                .into());
            }

            match standards.get(&entry.task_name) {
                Some(standard) => total_task_points += standard.points_for(entry.count),
                None => {
                    warn!(
                        task_name = %entry.task_name,
                        employee = %employee,
                        date = %date,
                        "activity references unregistered task; contributes 0 points"
                    );
                    let warning = UnknownTaskWarning {
                        task_name: entry.task_name.clone(),
                        employee_id: employee.clone(),
                        date,
                    };
                    if !warnings.contains(&warning) {
                        warnings.push(warning);
                    }
                }
            }
        }

        for entry in behavioral {
            if !entry.idle_hours.is_finite() || entry.idle_hours < 0.0 {
                return Err(InvalidEntryError::InvalidIdleHours {
                    idle_hours: entry.idle_hours,
                }
                .into());
            }
        }
        let inputs = BehavioralInputs::resolve(behavioral);

        let config = &self.config;
        let productivity_percent = (total_task_points / config.daily_target_points) * 100.0;
        let weighted_productivity = productivity_percent * config.productivity_weight;

        let behavior_raw = (100.0
            - inputs.idle_hours * config.idle_penalty_per_hour
            - if inputs.conduct_flag {
                config.conduct_penalty
            } else {
                0.0
            })
        .max(0.0);
        let weighted_behavior = behavior_raw * config.behavior_weight;

        Ok(PerformanceRecord {
            employee_id: employee.clone(),
            date,
            total_task_points,
            task_count: entries.len(),
            productivity_percent,
            weighted_productivity,
            behavior_raw,
            weighted_behavior,
            final_percent: weighted_productivity + weighted_behavior,
            idle_hours: inputs.idle_hours,
            conduct_flag: inputs.conduct_flag,
        })
    }
}
