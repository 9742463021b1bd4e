use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use super::domain::{ActivityEntry, BehavioralEntry, EmployeeId};

/// Raised at the store boundary for malformed input, so downstream
/// calculation never has to guess what a zero-count or anonymous entry meant.
#[derive(Debug, thiserror::Error)]
pub enum InvalidEntryError {
    #[error("activity count must be positive, got {count} for task '{task_name}'")]
    NonPositiveCount { task_name: String, count: u32 },
    #[error("employee id must not be empty")]
    EmptyEmployeeId,
    #[error("task name must not be empty")]
    EmptyTaskName,
    #[error("idle hours must be a non-negative finite number, got {idle_hours}")]
    InvalidIdleHours { idle_hours: f64 },
}

/// Append-only store of activity and behavioral entries.
///
/// Queries hold a single read guard for their whole scan and bulk inserts
/// validate everything before taking the write lock, so a concurrent
/// calculation sees either all of a batch or none of it.
#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: RwLock<Vec<ActivityEntry>>,
    behavioral: RwLock<Vec<BehavioralEntry>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one activity entry. Entries for the same (employee, date, task)
    /// accumulate; nothing is deduplicated or overwritten.
    pub fn add(&self, entry: ActivityEntry) -> Result<(), InvalidEntryError> {
        validate_activity(&entry)?;
        self.activities_write().push(entry);
        Ok(())
    }

    /// Append a batch of entries, all-or-none: if any entry is invalid the
    /// store is left untouched.
    pub fn add_bulk(&self, entries: Vec<ActivityEntry>) -> Result<(), InvalidEntryError> {
        for entry in &entries {
            validate_activity(entry)?;
        }
        self.activities_write().extend(entries);
        Ok(())
    }

    /// Append a daily behavioral entry. Duplicates per (employee, date) are
    /// permitted here; the calculator resolves them when it reads.
    pub fn add_behavioral(&self, entry: BehavioralEntry) -> Result<(), InvalidEntryError> {
        if entry.employee_id.as_str().trim().is_empty() {
            return Err(InvalidEntryError::EmptyEmployeeId);
        }
        if !entry.idle_hours.is_finite() || entry.idle_hours < 0.0 {
            return Err(InvalidEntryError::InvalidIdleHours {
                idle_hours: entry.idle_hours,
            });
        }
        self.behavioral_write().push(entry);
        Ok(())
    }

    /// Activity entries for an exact date, optionally narrowed to one
    /// employee.
    pub fn activities_on(&self, date: NaiveDate, employee: Option<&EmployeeId>) -> Vec<ActivityEntry> {
        self.activities_read()
            .iter()
            .filter(|entry| entry.date == date)
            .filter(|entry| employee.map_or(true, |id| &entry.employee_id == id))
            .cloned()
            .collect()
    }

    /// Activity entries within an inclusive date range, for trend and
    /// multi-date reporting.
    pub fn activities_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee: Option<&EmployeeId>,
    ) -> Vec<ActivityEntry> {
        self.activities_read()
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .filter(|entry| employee.map_or(true, |id| &entry.employee_id == id))
            .cloned()
            .collect()
    }

    /// Behavioral entries for an exact date, optionally narrowed to one
    /// employee.
    pub fn behavioral_on(
        &self,
        date: NaiveDate,
        employee: Option<&EmployeeId>,
    ) -> Vec<BehavioralEntry> {
        self.behavioral
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .iter()
            .filter(|entry| entry.date == date)
            .filter(|entry| employee.map_or(true, |id| &entry.employee_id == id))
            .cloned()
            .collect()
    }

    /// Distinct dates with at least one activity entry in the inclusive
    /// range, sorted ascending.
    pub fn dates_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let guard = self.activities_read();
        let mut dates: Vec<NaiveDate> = guard
            .iter()
            .filter(|entry| entry.date >= start && entry.date <= end)
            .map(|entry| entry.date)
            .collect();
        dates.sort_unstable();
        dates.dedup();
        dates
    }

    pub fn activity_count(&self) -> usize {
        self.activities_read().len()
    }

    fn activities_read(&self) -> RwLockReadGuard<'_, Vec<ActivityEntry>> {
        self.activities.read().unwrap_or_else(|err| err.into_inner())
    }

    fn activities_write(&self) -> RwLockWriteGuard<'_, Vec<ActivityEntry>> {
        self.activities
            .write()
            .unwrap_or_else(|err| err.into_inner())
    }

    fn behavioral_write(&self) -> RwLockWriteGuard<'_, Vec<BehavioralEntry>> {
        self.behavioral
            .write()
            .unwrap_or_else(|err| err.into_inner())
    }
}

fn validate_activity(entry: &ActivityEntry) -> Result<(), InvalidEntryError> {
    if entry.employee_id.as_str().trim().is_empty() {
        return Err(InvalidEntryError::EmptyEmployeeId);
    }
    if entry.task_name.trim().is_empty() {
        return Err(InvalidEntryError::EmptyTaskName);
    }
    if entry.count == 0 {
        return Err(InvalidEntryError::NonPositiveCount {
            task_name: entry.task_name.clone(),
            count: entry.count,
        });
    }
    Ok(())
}
