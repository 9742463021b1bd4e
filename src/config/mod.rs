use std::env;

use serde::{Deserialize, Serialize};

/// Invalid tunable values. Fatal: the caller must fix the configuration and
/// retry; the engine never runs on a guessed-at config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("daily target points must be a positive finite number, got {value}")]
    NonPositiveDailyTarget { value: f64 },
    #[error("{name} must be a non-negative finite number, got {value}")]
    NegativeTunable { name: &'static str, value: f64 },
    #[error("environment variable {key} has unparseable value '{value}'")]
    InvalidEnvValue { key: &'static str, value: String },
}

/// The five scoring tunables. Applied uniformly to every record a calculator
/// instance computes; a what-if run (say, target 500 instead of 400) is a new
/// config and a new calculator, never a mutation.
///
/// The weights are not forced to sum to 1.0. That is a caller convention; the
/// documented sample outputs already exceed 100%, so the engine never clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub daily_target_points: f64,
    pub productivity_weight: f64,
    pub behavior_weight: f64,
    pub idle_penalty_per_hour: f64,
    pub conduct_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            daily_target_points: 400.0,
            productivity_weight: 0.90,
            behavior_weight: 0.10,
            idle_penalty_per_hour: 10.0,
            conduct_penalty: 50.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.daily_target_points.is_finite() || self.daily_target_points <= 0.0 {
            return Err(ConfigurationError::NonPositiveDailyTarget {
                value: self.daily_target_points,
            });
        }
        for (name, value) in [
            ("productivity_weight", self.productivity_weight),
            ("behavior_weight", self.behavior_weight),
            ("idle_penalty_per_hour", self.idle_penalty_per_hour),
            ("conduct_penalty", self.conduct_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::NegativeTunable { name, value });
            }
        }
        Ok(())
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Top-level engine configuration loaded from the environment.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl EngineConfig {
    /// Read `OPSPULSE_*` variables (via `.env` when present), falling back to
    /// the documented defaults for anything unset.
    pub fn load() -> Result<Self, ConfigurationError> {
        dotenvy::dotenv().ok();

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            daily_target_points: env_f64(
                "OPSPULSE_DAILY_TARGET_POINTS",
                defaults.daily_target_points,
            )?,
            productivity_weight: env_f64(
                "OPSPULSE_PRODUCTIVITY_WEIGHT",
                defaults.productivity_weight,
            )?,
            behavior_weight: env_f64("OPSPULSE_BEHAVIOR_WEIGHT", defaults.behavior_weight)?,
            idle_penalty_per_hour: env_f64(
                "OPSPULSE_IDLE_PENALTY_PER_HOUR",
                defaults.idle_penalty_per_hour,
            )?,
            conduct_penalty: env_f64("OPSPULSE_CONDUCT_PENALTY", defaults.conduct_penalty)?,
        };
        scoring.validate()?;

        let log_level = env::var("OPSPULSE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            scoring,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn env_f64(key: &'static str, default: f64) -> Result<f64, ConfigurationError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigurationError::InvalidEnvValue { key, value }),
        Err(_) => Ok(default),
    }
}
