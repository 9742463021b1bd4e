use chrono::NaiveDate;
use serde::Serialize;

use crate::scoring::{EmployeeId, PerformanceRating};

/// One ranked row of a single-date leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub total_task_points: f64,
    pub task_count: usize,
    pub weighted_productivity: f64,
    pub weighted_behavior: f64,
    pub final_percent: f64,
    pub rating: PerformanceRating,
    pub rating_label: &'static str,
}

/// Serializable projection of a flagged record.
#[derive(Debug, Clone, Serialize)]
pub struct AlertView {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub final_percent: f64,
    pub shortfall: f64,
    pub dominant_factor: &'static str,
    pub rating_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_hours: Option<f64>,
    pub conduct_flag: bool,
}

/// One point of a trend series. `final_percent` is `None` on dates with no
/// record: an explicit gap, never interpolated or zero-filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub final_percent: Option<f64>,
}
