//! Performance scoring and reporting engine.
//!
//! The crate turns raw activity logs and daily behavioral metrics into
//! per-employee, per-date [`scoring::PerformanceRecord`]s using a weighted
//! productivity-plus-behavior model, then derives leaderboards, statistics,
//! trends, and alerts from the record set. Persistence, transport, and
//! authorization are the surrounding application's concern: it owns the
//! [`scoring::StandardsRegistry`] and [`scoring::ActivityStore`], hands the
//! engine read access, and consumes the records the engine allocates.

pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod telemetry;

pub use config::{EngineConfig, ScoringConfig};
pub use error::EngineError;
pub use scoring::{
    ActivityEntry, ActivityStore, BehavioralEntry, CalculationRun, EmployeeId, PerformanceRecord,
    ScoreCalculator, StandardsRegistry, TaskStandard,
};
