//! The scoring core: domain types, the standards registry, the activity
//! store, and the score calculator that ties them together.

pub mod calculator;
pub mod domain;
pub mod standards;
pub mod store;

#[cfg(test)]
mod tests;

pub use calculator::{
    BehavioralInputs, CalculationError, CalculationRun, ScoreCalculator, UnknownTaskWarning,
};
pub use domain::{
    ActivityEntry, BehavioralEntry, EffortCategory, EmployeeId, PerformanceRating,
    PerformanceRecord, TaskStandard, UnknownCategoryError,
};
pub use standards::{DuplicateTaskError, StandardsRegistry};
pub use store::{ActivityStore, InvalidEntryError};
