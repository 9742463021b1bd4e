use serde::Serialize;

use crate::scoring::PerformanceRecord;

use super::views::AlertView;

/// Thresholds governing the alert scan. The ceilings are the maxima each
/// weighted component can reach under the configuration that produced the
/// records (90 and 10 under the default weights); they anchor the dominant-
/// factor heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertPolicy {
    pub threshold: f64,
    pub productivity_ceiling: f64,
    pub behavior_ceiling: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            productivity_ceiling: 90.0,
            behavior_ceiling: 10.0,
        }
    }
}

/// The component judged responsible for a flagged record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertFactor {
    LowProductivity,
    HighIdleTime,
    ConductFlag,
}

impl AlertFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowProductivity => "low productivity",
            Self::HighIdleTime => "high idle time",
            Self::ConductFlag => "conduct flag",
        }
    }
}

/// A record that fell below the alert threshold, with the shortfall and the
/// dominant negative contributor.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceAlert {
    pub record: PerformanceRecord,
    pub shortfall: f64,
    pub dominant_factor: AlertFactor,
}

impl PerformanceAlert {
    pub fn to_view(&self) -> AlertView {
        AlertView {
            employee_id: self.record.employee_id.clone(),
            date: self.record.date,
            final_percent: self.record.final_percent,
            shortfall: self.shortfall,
            dominant_factor: self.dominant_factor.label(),
            rating_label: self.record.rating().label(),
            idle_hours: (self.record.idle_hours > 0.0).then_some(self.record.idle_hours),
            conduct_flag: self.record.conduct_flag,
        }
    }
}

/// Flag every record whose `final_percent` sits below the policy threshold.
/// The input ordering is preserved; callers wanting worst-first can rank
/// beforehand.
pub fn scan(records: &[PerformanceRecord], policy: &AlertPolicy) -> Vec<PerformanceAlert> {
    records
        .iter()
        .filter(|record| record.final_percent < policy.threshold)
        .map(|record| PerformanceAlert {
            record: record.clone(),
            shortfall: policy.threshold - record.final_percent,
            dominant_factor: dominant_factor(record, policy),
        })
        .collect()
}

/// The dominant contributor is whichever weighted component is proportionally
/// further below its ceiling. A behavior-dominant alert refines to the
/// conduct flag when one was raised, otherwise to idle time. An exact
/// proportional tie attributes productivity, the component carrying most of
/// the weight.
fn dominant_factor(record: &PerformanceRecord, policy: &AlertPolicy) -> AlertFactor {
    let productivity_gap = relative_gap(record.weighted_productivity, policy.productivity_ceiling);
    let behavior_gap = relative_gap(record.weighted_behavior, policy.behavior_ceiling);

    if behavior_gap > productivity_gap {
        if record.conduct_flag {
            AlertFactor::ConductFlag
        } else {
            AlertFactor::HighIdleTime
        }
    } else {
        AlertFactor::LowProductivity
    }
}

fn relative_gap(value: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    ((ceiling - value) / ceiling).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::scoring::EmployeeId;

    fn record(
        employee: &str,
        weighted_productivity: f64,
        weighted_behavior: f64,
        idle_hours: f64,
        conduct_flag: bool,
    ) -> PerformanceRecord {
        PerformanceRecord {
            employee_id: EmployeeId::new(employee),
            date: NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid date"),
            total_task_points: 0.0,
            task_count: 1,
            productivity_percent: weighted_productivity / 0.9,
            weighted_productivity,
            behavior_raw: weighted_behavior / 0.1,
            weighted_behavior,
            final_percent: weighted_productivity + weighted_behavior,
            idle_hours,
            conduct_flag,
        }
    }

    #[test]
    fn records_above_threshold_are_not_flagged() {
        let records = [record("e1", 85.5, 9.5, 0.5, false)];
        assert!(scan(&records, &AlertPolicy::default()).is_empty());
    }

    #[test]
    fn low_productivity_dominates_when_behavior_is_healthy() {
        // productivity gap (30/90 earned) far exceeds the full behavior score
        let records = [record("e1", 30.0, 10.0, 0.0, false)];
        let alerts = scan(&records, &AlertPolicy::default());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].dominant_factor, AlertFactor::LowProductivity);
        assert!((alerts[0].shortfall - 10.0).abs() < 1e-9);
    }

    #[test]
    fn behavior_dominant_alert_names_idle_time() {
        // behavior nearly zeroed by idle hours while productivity is half way
        let records = [record("e1", 45.0, 1.0, 4.5, false)];
        let alerts = scan(&records, &AlertPolicy::default());
        assert_eq!(alerts[0].dominant_factor, AlertFactor::HighIdleTime);
    }

    #[test]
    fn behavior_dominant_alert_prefers_conduct_flag_when_raised() {
        let records = [record("e1", 45.0, 2.0, 1.0, true)];
        let alerts = scan(&records, &AlertPolicy::default());
        assert_eq!(alerts[0].dominant_factor, AlertFactor::ConductFlag);
    }

    #[test]
    fn exact_proportional_tie_attributes_productivity() {
        // both components at 25% of their ceiling
        let records = [record("e1", 22.5, 2.5, 2.5, true)];
        let alerts = scan(&records, &AlertPolicy::default());
        assert_eq!(alerts[0].dominant_factor, AlertFactor::LowProductivity);
    }
}
