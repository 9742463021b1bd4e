use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::scoring::{EmployeeId, PerformanceRecord};

use super::views::TrendPoint;

/// Chronological per-day series of one employee's `final_percent` across an
/// inclusive date range. Days without a record appear as explicit gaps
/// (`final_percent: None`); a gap means "no data", never "scored zero".
pub fn series(
    records: &[PerformanceRecord],
    employee: &EmployeeId,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TrendPoint> {
    let by_date: BTreeMap<NaiveDate, f64> = records
        .iter()
        .filter(|record| &record.employee_id == employee)
        .filter(|record| record.date >= start && record.date <= end)
        .map(|record| (record.date, record.final_percent))
        .collect();

    start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| TrendPoint {
            date,
            final_percent: by_date.get(&date).copied(),
        })
        .collect()
}

/// Mean of each record metric over a set, the unit both sides of a
/// comparison are reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricMeans {
    pub total_task_points: f64,
    pub productivity_percent: f64,
    pub weighted_productivity: f64,
    pub behavior_raw: f64,
    pub weighted_behavior: f64,
    pub final_percent: f64,
}

impl MetricMeans {
    pub fn from_records(records: &[PerformanceRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f64;
        let sum = |f: fn(&PerformanceRecord) -> f64| records.iter().map(f).sum::<f64>() / n;
        Some(Self {
            total_task_points: sum(|r| r.total_task_points),
            productivity_percent: sum(|r| r.productivity_percent),
            weighted_productivity: sum(|r| r.weighted_productivity),
            behavior_raw: sum(|r| r.behavior_raw),
            weighted_behavior: sum(|r| r.weighted_behavior),
            final_percent: sum(|r| r.final_percent),
        })
    }
}

/// Per-metric deltas between two record sets (comparison minus baseline),
/// for period-over-period or employee-vs-employee views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricDeltas {
    pub baseline: MetricMeans,
    pub comparison: MetricMeans,
    pub total_task_points: f64,
    pub productivity_percent: f64,
    pub weighted_productivity: f64,
    pub behavior_raw: f64,
    pub weighted_behavior: f64,
    pub final_percent: f64,
}

/// `None` when either side is empty; a delta against nothing is meaningless.
pub fn compare(
    baseline: &[PerformanceRecord],
    comparison: &[PerformanceRecord],
) -> Option<MetricDeltas> {
    let base = MetricMeans::from_records(baseline)?;
    let other = MetricMeans::from_records(comparison)?;
    Some(MetricDeltas {
        baseline: base,
        comparison: other,
        total_task_points: other.total_task_points - base.total_task_points,
        productivity_percent: other.productivity_percent - base.productivity_percent,
        weighted_productivity: other.weighted_productivity - base.weighted_productivity,
        behavior_raw: other.behavior_raw - base.behavior_raw,
        weighted_behavior: other.weighted_behavior - base.weighted_behavior,
        final_percent: other.final_percent - base.final_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee: &str, date: NaiveDate, final_percent: f64) -> PerformanceRecord {
        PerformanceRecord {
            employee_id: EmployeeId::new(employee),
            date,
            total_task_points: final_percent * 4.0,
            task_count: 1,
            productivity_percent: final_percent,
            weighted_productivity: final_percent * 0.9,
            behavior_raw: 100.0,
            weighted_behavior: 10.0,
            final_percent,
            idle_hours: 0.0,
            conduct_flag: false,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).expect("valid date")
    }

    #[test]
    fn series_preserves_gaps_without_filling() {
        let employee = EmployeeId::new("e1");
        let records = vec![
            record("e1", day(1), 95.0),
            record("e1", day(3), 88.0),
            record("e2", day(2), 70.0),
        ];

        let points = series(&records, &employee, day(1), day(4));

        assert_eq!(points.len(), 4);
        assert_eq!(points[0].final_percent, Some(95.0));
        assert_eq!(points[1].final_percent, None);
        assert_eq!(points[2].final_percent, Some(88.0));
        assert_eq!(points[3].final_percent, None);
        assert!(points.windows(2).all(|pair| pair[0].date < pair[1].date));
    }

    #[test]
    fn compare_reports_mean_deltas() {
        let week_one = vec![record("e1", day(1), 80.0), record("e2", day(1), 60.0)];
        let week_two = vec![record("e1", day(8), 90.0), record("e2", day(8), 74.0)];

        let deltas = compare(&week_one, &week_two).expect("both sides non-empty");

        assert!((deltas.final_percent - 12.0).abs() < 1e-9);
        assert!((deltas.baseline.final_percent - 70.0).abs() < 1e-9);
        assert!((deltas.comparison.final_percent - 82.0).abs() < 1e-9);
    }

    #[test]
    fn compare_requires_both_sides() {
        let records = vec![record("e1", day(1), 80.0)];
        assert!(compare(&records, &[]).is_none());
        assert!(compare(&[], &records).is_none());
    }
}
