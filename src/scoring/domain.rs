use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for employees tracked by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Closed set of effort categories a task standard may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffortCategory {
    #[serde(rename = "EC-1")]
    Ec1,
    #[serde(rename = "EC-2")]
    Ec2,
    #[serde(rename = "EC-3")]
    Ec3,
    #[serde(rename = "EC-4")]
    Ec4,
    #[serde(rename = "EC-5")]
    Ec5,
}

impl EffortCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ec1 => "EC-1",
            Self::Ec2 => "EC-2",
            Self::Ec3 => "EC-3",
            Self::Ec4 => "EC-4",
            Self::Ec5 => "EC-5",
        }
    }
}

impl fmt::Display for EffortCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a category tag falls outside the closed EC-1..EC-5 set.
#[derive(Debug, thiserror::Error)]
#[error("unknown effort category '{0}'")]
pub struct UnknownCategoryError(pub String);

impl FromStr for EffortCategory {
    type Err = UnknownCategoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "EC-1" => Ok(Self::Ec1),
            "EC-2" => Ok(Self::Ec2),
            "EC-3" => Ok(Self::Ec3),
            "EC-4" => Ok(Self::Ec4),
            "EC-5" => Ok(Self::Ec5),
            other => Err(UnknownCategoryError(other.to_string())),
        }
    }
}

/// Scoring parameters for one task type. `task_name` is the lookup key used
/// by activity entries; `target_daily` is informational and never feeds the
/// score formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStandard {
    pub task_id: String,
    pub task_name: String,
    pub category: EffortCategory,
    pub base_score: f64,
    pub target_daily: u32,
}

impl TaskStandard {
    /// Points awarded for `count` completions of this task.
    pub fn points_for(&self, count: u32) -> f64 {
        f64::from(count) * self.base_score
    }
}

/// One logged activity: who did what, how many times, on which day.
/// Multiple entries for the same (employee, date, task) are additive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub task_name: String,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ActivityEntry {
    pub fn new(
        employee_id: EmployeeId,
        date: NaiveDate,
        task_name: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            employee_id,
            date,
            task_name: task_name.into(),
            count,
            reference_id: None,
            duration_minutes: None,
            note: None,
        }
    }
}

/// Daily behavioral metric for one employee. At most one authoritative row is
/// expected per (employee, date); duplicates are merged max-per-field by the
/// calculator when it reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehavioralEntry {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub idle_hours: f64,
    pub conduct_flag: bool,
}

/// Computed performance artifact for one employee on one date. Immutable once
/// created; recomputation replaces the record for the same key wholesale.
///
/// `task_count` is the number of distinct logged entries, not the sum of
/// their counts. `final_percent` is deliberately uncapped: beating the daily
/// target legitimately reads above 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub total_task_points: f64,
    pub task_count: usize,
    pub productivity_percent: f64,
    pub weighted_productivity: f64,
    pub behavior_raw: f64,
    pub weighted_behavior: f64,
    pub final_percent: f64,
    pub idle_hours: f64,
    pub conduct_flag: bool,
}

impl PerformanceRecord {
    pub fn rating(&self) -> PerformanceRating {
        PerformanceRating::from_percent(self.final_percent)
    }
}

/// Categorical band for a final performance percentage. Lower bounds are
/// inclusive: exactly 90.0 is Excellent, exactly 50.0 is Needs Improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl PerformanceRating {
    pub fn from_percent(final_percent: f64) -> Self {
        if final_percent >= 90.0 {
            Self::Excellent
        } else if final_percent >= 70.0 {
            Self::Good
        } else if final_percent >= 50.0 {
            Self::NeedsImprovement
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Critical => "Critical",
        }
    }
}
