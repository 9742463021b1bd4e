use serde::Serialize;

use crate::scoring::PerformanceRecord;

/// Aggregate statistics over the `final_percent` of a record set.
///
/// `std_dev` is the sample standard deviation and is `None` for fewer than
/// two records rather than a zero or a NaN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
}

impl ScoreStatistics {
    /// `None` for an empty record set; there is nothing meaningful to report.
    pub fn from_records(records: &[PerformanceRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut values: Vec<f64> = records.iter().map(|r| r.final_percent).collect();
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        let median = if count % 2 == 1 {
            values[count / 2]
        } else {
            (values[count / 2 - 1] + values[count / 2]) / 2.0
        };

        let std_dev = if count >= 2 {
            let variance = values
                .iter()
                .map(|value| {
                    let diff = value - mean;
                    diff * diff
                })
                .sum::<f64>()
                / (count - 1) as f64;
            Some(variance.sqrt())
        } else {
            None
        };

        Some(Self {
            count,
            mean,
            median,
            min: values[0],
            max: values[count - 1],
            std_dev,
        })
    }
}
