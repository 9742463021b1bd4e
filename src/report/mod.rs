//! Derived views over computed performance records: leaderboards, rating
//! buckets, statistics, alerts, trends, comparisons, and the CSV adapter.
//!
//! Everything here is a pure function over `&[PerformanceRecord]`. The
//! aggregator never mutates the records it is given and depends only on the
//! record shape, not on the registry or store that produced them.

pub mod alerts;
pub mod export;
pub mod leaderboard;
pub mod statistics;
pub mod trend;
pub mod views;

pub use alerts::{scan, AlertFactor, AlertPolicy, PerformanceAlert};
pub use export::{to_csv_string, write_csv, ExportError};
pub use leaderboard::{leaderboard, rank};
pub use statistics::ScoreStatistics;
pub use trend::{compare, series, MetricDeltas, MetricMeans};
pub use views::{AlertView, LeaderboardEntry, TrendPoint};
