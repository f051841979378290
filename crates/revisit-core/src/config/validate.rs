//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_size == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_size must be > 0".into(),
            ));
        }
        if self.limits.head_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.head_timeout_ms must be > 0".into(),
            ));
        }
        if self.limits.post_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.post_timeout_ms must be > 0".into(),
            ));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}
