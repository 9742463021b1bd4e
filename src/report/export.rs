use std::io::Write;

use serde::Serialize;

use crate::scoring::PerformanceRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error during export: {0}")]
    Io(#[from] std::io::Error),
    #[error("exported bytes were not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Flat CSV projection of a performance record. Column names follow the
/// established report layout so downstream spreadsheets keep working.
#[derive(Debug, Serialize)]
struct ScoreRow<'a> {
    #[serde(rename = "Emp_ID")]
    employee_id: &'a str,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Total_Task_Points")]
    total_task_points: f64,
    #[serde(rename = "Task_Count")]
    task_count: usize,
    #[serde(rename = "Productivity_%")]
    productivity_percent: f64,
    #[serde(rename = "Weighted_Prod_Score")]
    weighted_productivity: f64,
    #[serde(rename = "Behavior_Score_Raw")]
    behavior_raw: f64,
    #[serde(rename = "Weighted_Behavior_Score")]
    weighted_behavior: f64,
    #[serde(rename = "Final_Performance_%")]
    final_percent: f64,
    #[serde(rename = "Idle_Hours")]
    idle_hours: f64,
    #[serde(rename = "Conduct_Flag")]
    conduct_flag: u8,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl<'a> ScoreRow<'a> {
    fn from_record(record: &'a PerformanceRecord) -> Self {
        Self {
            employee_id: record.employee_id.as_str(),
            date: record.date.to_string(),
            total_task_points: round2(record.total_task_points),
            task_count: record.task_count,
            productivity_percent: round2(record.productivity_percent),
            weighted_productivity: round2(record.weighted_productivity),
            behavior_raw: round2(record.behavior_raw),
            weighted_behavior: round2(record.weighted_behavior),
            final_percent: round2(record.final_percent),
            idle_hours: record.idle_hours,
            conduct_flag: u8::from(record.conduct_flag),
        }
    }
}

/// Write the record set as CSV rows, headers included.
pub fn write_csv<W: Write>(writer: W, records: &[PerformanceRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(ScoreRow::from_record(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Convenience wrapper producing the CSV document as a `String`.
pub fn to_csv_string(records: &[PerformanceRecord]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(String::from_utf8(buffer)?)
}
