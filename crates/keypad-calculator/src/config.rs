//! Widget configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`WidgetConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON text could not be parsed
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds an unusable value
    #[error("Invalid configuration value for `{field}`: {message}")]
    InvalidValue {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid value error
    #[must_use]
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Presentation settings for the calculator widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// How long failure notices stay visible, in milliseconds
    pub notification_duration_ms: u64,
    /// Leading text of every failure notice
    pub invalid_prefix: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            notification_duration_ms: Self::DEFAULT_NOTIFICATION_MS,
            invalid_prefix: Self::DEFAULT_INVALID_PREFIX.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Default notice lifetime
    pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;
    /// Default notice prefix
    pub const DEFAULT_INVALID_PREFIX: &'static str = "Invalid Expression";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the notice lifetime
    #[must_use]
    pub const fn with_notification_duration_ms(mut self, millis: u64) -> Self {
        self.notification_duration_ms = millis;
        self
    }

    /// Set the notice prefix
    #[must_use]
    pub fn with_invalid_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.invalid_prefix = prefix.into();
        self
    }

    /// Notice lifetime as a [`Duration`]
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Parses and validates a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects a zero duration and an empty prefix
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notification_duration_ms == 0 {
            return Err(ConfigError::invalid_value(
                "notification_duration_ms",
                "must be greater than zero",
            ));
        }
        if self.invalid_prefix.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "invalid_prefix",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
