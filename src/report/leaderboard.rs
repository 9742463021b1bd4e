use std::cmp::Ordering;

use crate::scoring::PerformanceRecord;

use super::views::LeaderboardEntry;

/// Deterministic leaderboard ordering: `final_percent` descending, ties by
/// `total_task_points` descending, then `employee_id` ascending so repeated
/// runs always agree.
fn ranking_order(a: &PerformanceRecord, b: &PerformanceRecord) -> Ordering {
    b.final_percent
        .total_cmp(&a.final_percent)
        .then_with(|| b.total_task_points.total_cmp(&a.total_task_points))
        .then_with(|| a.employee_id.cmp(&b.employee_id))
}

/// Sort a single-date record set into leaderboard order. The input slice is
/// left untouched.
pub fn rank(records: &[PerformanceRecord]) -> Vec<PerformanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(ranking_order);
    sorted
}

/// Ranked, rating-labelled projection of a single-date record set, ready for
/// field projection by any transport.
pub fn leaderboard(records: &[PerformanceRecord]) -> Vec<LeaderboardEntry> {
    rank(records)
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let rating = record.rating();
            LeaderboardEntry {
                rank: index + 1,
                employee_id: record.employee_id,
                date: record.date,
                total_task_points: record.total_task_points,
                task_count: record.task_count,
                weighted_productivity: record.weighted_productivity,
                weighted_behavior: record.weighted_behavior,
                final_percent: record.final_percent,
                rating,
                rating_label: rating.label(),
            }
        })
        .collect()
}
