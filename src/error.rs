use crate::config::ConfigurationError;
use crate::report::ExportError;
use crate::scoring::{CalculationError, DuplicateTaskError, InvalidEntryError};
use crate::telemetry::TelemetryError;

/// Crate-level error aggregating every fatal failure mode, so embedding
/// applications can hold one error type at their boundary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    DuplicateTask(#[from] DuplicateTaskError),
    #[error(transparent)]
    InvalidEntry(#[from] InvalidEntryError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
