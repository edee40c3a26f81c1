//! # Configuration
//!
//! Layered settings for the optimizer and its logging.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. An optional settings file (format from its extension)
//! 3. `SYNDICATE__*` environment variables, also read from a `.env` file,
//!    e.g. `SYNDICATE__OPTIMIZER__LENDER_PENALTY=0.05`
//!
//! # Examples
//!
//! ```
//! use syndicate_optimizer::config::AppConfig;
//! use rust_decimal::Decimal;
//!
//! let config = AppConfig::from_toml(
//!     r#"
//!     [optimizer]
//!     lender_penalty = "0.05"
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.optimizer.lender_penalty, Decimal::new(5, 2));
//! assert_eq!(config.telemetry.level, "info");
//! ```

use crate::application::error::ApplicationError;
use crate::application::services::feasibility::{
    DEFAULT_LENDER_PENALTY, DEFAULT_MIN_COVERAGE_RATIO, FeasibilityEvaluator,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SYNDICATE";

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for ApplicationError {
    fn from(err: ConfigError) -> Self {
        ApplicationError::configuration(err.to_string())
    }
}

/// Optimizer parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerSettings {
    /// Score penalty per lender.
    pub lender_penalty: Decimal,
    /// Fraction of the target that must be covered, in `(0, 1]`.
    pub min_coverage_ratio: Decimal,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            lender_penalty: DEFAULT_LENDER_PENALTY,
            min_coverage_ratio: DEFAULT_MIN_COVERAGE_RATIO,
        }
    }
}

impl OptimizerSettings {
    /// Builds the evaluator these settings describe.
    #[must_use]
    pub fn evaluator(&self) -> FeasibilityEvaluator {
        FeasibilityEvaluator::new(self.lender_penalty, self.min_coverage_ratio)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetrySettings {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `syndicate_optimizer=debug`.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Optimizer parameters.
    pub optimizer: OptimizerSettings,
    /// Logging settings.
    pub telemetry: TelemetrySettings,
}

impl AppConfig {
    /// Loads settings from defaults, `path` (if given) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source cannot be read, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(dotenv) = dotenvy::dotenv() {
            tracing::debug!(path = %dotenv.display(), "loaded .env file");
        }

        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        );

        Self::from_builder(builder)
    }

    /// Parses settings from a TOML document, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` on malformed input, or
    /// `ConfigError::Invalid` if a value is out of range.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml));
        Self::from_builder(builder)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ratio = self.optimizer.min_coverage_ratio;
        if ratio <= Decimal::ZERO || ratio > Decimal::ONE {
            return Err(ConfigError::Invalid(format!(
                "optimizer.min_coverage_ratio must be in (0, 1], got {ratio}"
            )));
        }
        if self.optimizer.lender_penalty.is_sign_negative() {
            return Err(ConfigError::Invalid(format!(
                "optimizer.lender_penalty must not be negative, got {}",
                self.optimizer.lender_penalty
            )));
        }
        if self.telemetry.level.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "telemetry.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.optimizer.lender_penalty, Decimal::new(1, 2));
        assert_eq!(config.optimizer.min_coverage_ratio, Decimal::new(99, 2));
        assert_eq!(config.telemetry.level, "info");
        assert!(!config.telemetry.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = AppConfig::from_toml(
            r#"
            [optimizer]
            min_coverage_ratio = "1"

            [telemetry]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.optimizer.min_coverage_ratio, Decimal::ONE);
        assert_eq!(config.optimizer.lender_penalty, DEFAULT_LENDER_PENALTY);
        assert!(config.telemetry.json);
    }

    #[test]
    fn evaluator_uses_settings() {
        let settings = OptimizerSettings {
            lender_penalty: Decimal::new(5, 2),
            min_coverage_ratio: Decimal::new(95, 2),
        };
        let evaluator = settings.evaluator();
        assert_eq!(evaluator.lender_penalty(), Decimal::new(5, 2));
        assert_eq!(evaluator.min_coverage_ratio(), Decimal::new(95, 2));
    }

    #[test]
    fn ratio_above_one_is_rejected() {
        let err = AppConfig::from_toml("[optimizer]\nmin_coverage_ratio = \"1.5\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("min_coverage_ratio"));
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let err = AppConfig::from_toml("[optimizer]\nmin_coverage_ratio = \"0\"").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn negative_penalty_is_rejected() {
        let err = AppConfig::from_toml("[optimizer]\nlender_penalty = \"-0.01\"").unwrap_err();
        assert!(err.to_string().contains("lender_penalty"));
    }

    #[test]
    fn malformed_document_is_load_error() {
        let err = AppConfig::from_toml("[optimizer\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn converts_to_application_error() {
        let err: ApplicationError = ConfigError::Invalid("bad".into()).into();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
