use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::domain::{EffortCategory, TaskStandard};

/// Raised by [`StandardsRegistry::add`] when a task name is already present.
/// `replace` is the explicit upsert alternative.
#[derive(Debug, thiserror::Error)]
#[error("task standard '{task_name}' already registered")]
pub struct DuplicateTaskError {
    pub task_name: String,
}

/// Name-keyed registry of task standards. Reads are concurrent; the
/// occasional administrative write serializes against them, so a calculation
/// run always sees a consistent table.
#[derive(Debug, Default)]
pub struct StandardsRegistry {
    standards: RwLock<HashMap<String, TaskStandard>>,
}

impl StandardsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-loaded with the documented standard table, handy for
    /// demos and tests.
    pub fn seed_default() -> Self {
        let registry = Self::new();
        for (name, category, base_score, target_daily) in [
            ("Authorization Created", EffortCategory::Ec1, 45.0, 10),
            ("Authorization Status/FU", EffortCategory::Ec1, 25.0, 15),
            ("Appeal", EffortCategory::Ec1, 10.0, 5),
            ("Eligibility Check", EffortCategory::Ec2, 20.0, 25),
            ("Medication Refill", EffortCategory::Ec2, 20.0, 30),
            ("Pharmacy Call", EffortCategory::Ec2, 10.0, 10),
            ("Patient Outreach", EffortCategory::Ec3, 15.0, 20),
            ("Insurance Verification", EffortCategory::Ec2, 25.0, 15),
            ("Claims Processing", EffortCategory::Ec4, 30.0, 12),
            ("Document Upload", EffortCategory::Ec5, 10.0, 2),
        ] {
            registry.replace(TaskStandard {
                task_id: format!("task-{}", name.to_lowercase().replace([' ', '/'], "-")),
                task_name: name.to_string(),
                category,
                base_score,
                target_daily,
            });
        }
        registry
    }

    /// Register a new standard. Fails if the task name is already present so
    /// a data-entry slip cannot silently overwrite scoring parameters.
    pub fn add(&self, standard: TaskStandard) -> Result<(), DuplicateTaskError> {
        let mut standards = self.write_guard();
        if standards.contains_key(&standard.task_name) {
            return Err(DuplicateTaskError {
                task_name: standard.task_name,
            });
        }
        standards.insert(standard.task_name.clone(), standard);
        Ok(())
    }

    /// Insert or overwrite a standard. The explicit counterpart to `add`.
    pub fn replace(&self, standard: TaskStandard) {
        self.write_guard()
            .insert(standard.task_name.clone(), standard);
    }

    /// Look up a standard by task name. `None` is a real outcome the caller
    /// must handle, never a zero-valued default.
    pub fn get(&self, task_name: &str) -> Option<TaskStandard> {
        self.read_guard().get(task_name).cloned()
    }

    /// All registered standards, ordered by task name for stable reports.
    pub fn all(&self) -> Vec<TaskStandard> {
        let mut all: Vec<TaskStandard> = self.read_guard().values().cloned().collect();
        all.sort_by(|a, b| a.task_name.cmp(&b.task_name));
        all
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<String, TaskStandard>> {
        self.standards.read().unwrap_or_else(|err| err.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<String, TaskStandard>> {
        self.standards.write().unwrap_or_else(|err| err.into_inner())
    }
}
