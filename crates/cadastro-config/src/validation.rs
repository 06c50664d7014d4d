//! Configuration validation module.
//!
//! Collects every problem in a configuration instead of stopping at the first.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Application name is empty.
    EmptyAppName,
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// A seed user has a blank name.
    BlankSeedName { index: usize },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAppName => write!(f, "Application name must not be empty"),
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: trace, debug, info, warn, error)",
                    value
                )
            }
            Self::BlankSeedName { index } => {
                write!(f, "Seed user #{} has a blank name", index)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.app.name.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyAppName);
        }

        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }

        // Underage seeds are left to the service, which owns that rule.
        for (index, user) in config.seed.users.iter().enumerate() {
            if user.nome.trim().is_empty() {
                errors.push(ConfigValidationError::BlankSeedName { index });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
