//! Configuration for the SES model.
//!
//! The model has no transport to configure. What it does have is a choice of
//! how strictly request invariants are enforced before a payload is encoded,
//! and the service limits those checks compare against.
//!
//! - [`ValidationMode::Strict`] rejects a request with any violation.
//! - [`ValidationMode::Permissive`] logs violations and lets the service decide,
//!   which is how the classic SDK behaved.

pub mod error;

pub use error::ConfigError;

use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the validation mode.
pub const ENV_VALIDATION_MODE: &str = "SES_MODEL_VALIDATION";

/// Environment variable overriding the per-message recipient limit.
pub const ENV_MAX_RECIPIENTS: &str = "SES_MODEL_MAX_RECIPIENTS";

/// Combined To/Cc/Bcc recipient limit per message.
pub const DEFAULT_MAX_RECIPIENTS: usize = 50;

/// Destination limit for a single `SendBulkTemplatedEmail` call.
pub const DEFAULT_MAX_BULK_DESTINATIONS: usize = 50;

/// How request invariants are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationMode {
    /// Violations fail the request locally.
    #[default]
    Strict,
    /// Violations are logged and the request proceeds.
    Permissive,
}

impl ValidationMode {
    /// Returns the configuration string for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Strict => "strict",
            ValidationMode::Permissive => "permissive",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationMode::Strict),
            "permissive" => Ok(ValidationMode::Permissive),
            other => Err(ConfigError::Invalid {
                message: format!("unknown validation mode '{}'", other),
            }),
        }
    }
}

/// Configuration for validating and encoding SES model values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// How violations are handled.
    pub validation_mode: ValidationMode,

    /// Maximum combined To/Cc/Bcc recipients per message.
    pub max_recipients: usize,

    /// Maximum destinations per bulk send.
    pub max_bulk_destinations: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Strict,
            max_recipients: DEFAULT_MAX_RECIPIENTS,
            max_bulk_destinations: DEFAULT_MAX_BULK_DESTINATIONS,
        }
    }
}

impl ModelConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use integrations_aws_ses_model::config::{ModelConfig, ValidationMode};
    ///
    /// let config = ModelConfig::builder()
    ///     .validation_mode(ValidationMode::Permissive)
    ///     .max_recipients(10)
    ///     .build()?;
    /// assert_eq!(config.max_recipients, 10);
    /// # Ok::<(), integrations_aws_ses_model::config::ConfigError>(())
    /// ```
    pub fn builder() -> ModelConfigBuilder {
        ModelConfigBuilder::default()
    }

    /// Configuration that only logs violations.
    pub fn permissive() -> Self {
        Self {
            validation_mode: ValidationMode::Permissive,
            ..Self::default()
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Reads `SES_MODEL_VALIDATION` (`strict` or `permissive`) and
    /// `SES_MODEL_MAX_RECIPIENTS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from any variable source.
    ///
    /// [`from_env`](Self::from_env) uses the process environment; tests pass a
    /// closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(raw) = lookup(ENV_VALIDATION_MODE) {
            let mode = raw.parse().map_err(|_| ConfigError::Environment {
                variable: ENV_VALIDATION_MODE.to_string(),
                value: raw.clone(),
                message: "expected 'strict' or 'permissive'".to_string(),
            })?;
            builder = builder.validation_mode(mode);
        }

        if let Some(raw) = lookup(ENV_MAX_RECIPIENTS) {
            let max = raw.trim().parse().map_err(|_| ConfigError::Environment {
                variable: ENV_MAX_RECIPIENTS.to_string(),
                value: raw.clone(),
                message: "expected a positive integer".to_string(),
            })?;
            builder = builder.max_recipients(max);
        }

        builder.build()
    }

    /// Returns true when violations should fail the request.
    pub fn is_strict(&self) -> bool {
        self.validation_mode == ValidationMode::Strict
    }
}

/// Builder for [`ModelConfig`].
#[derive(Debug, Default)]
pub struct ModelConfigBuilder {
    validation_mode: Option<ValidationMode>,
    max_recipients: Option<usize>,
    max_bulk_destinations: Option<usize>,
}

impl ModelConfigBuilder {
    /// Set the validation mode.
    pub fn validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = Some(mode);
        self
    }

    /// Set the per-message recipient limit.
    pub fn max_recipients(mut self, max: usize) -> Self {
        self.max_recipients = Some(max);
        self
    }

    /// Set the bulk destination limit.
    pub fn max_bulk_destinations(mut self, max: usize) -> Self {
        self.max_bulk_destinations = Some(max);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if a limit is zero.
    pub fn build(self) -> Result<ModelConfig, ConfigError> {
        let defaults = ModelConfig::default();
        let config = ModelConfig {
            validation_mode: self.validation_mode.unwrap_or(defaults.validation_mode),
            max_recipients: self.max_recipients.unwrap_or(defaults.max_recipients),
            max_bulk_destinations: self
                .max_bulk_destinations
                .unwrap_or(defaults.max_bulk_destinations),
        };

        if config.max_recipients == 0 {
            return Err(ConfigError::Invalid {
                message: "max_recipients must be greater than zero".to_string(),
            });
        }
        if config.max_bulk_destinations == 0 {
            return Err(ConfigError::Invalid {
                message: "max_bulk_destinations must be greater than zero".to_string(),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ModelConfig::default();
        assert!(config.is_strict());
        assert_eq!(config.max_recipients, 50);
        assert_eq!(config.max_bulk_destinations, 50);
    }

    #[test]
    fn test_builder_rejects_zero_limit() {
        let result = ModelConfig::builder().max_recipients(0).build();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_from_lookup_empty() {
        let config = ModelConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ModelConfig::default());
    }

    #[test]
    fn test_from_lookup_values() {
        let config = ModelConfig::from_lookup(lookup_from(&[
            (ENV_VALIDATION_MODE, "Permissive"),
            (ENV_MAX_RECIPIENTS, " 25 "),
        ]))
        .unwrap();

        assert_eq!(config.validation_mode, ValidationMode::Permissive);
        assert_eq!(config.max_recipients, 25);
    }

    #[test]
    fn test_from_lookup_bad_mode() {
        let err = ModelConfig::from_lookup(lookup_from(&[(ENV_VALIDATION_MODE, "lenient")]))
            .unwrap_err();

        match err {
            ConfigError::Environment { variable, value, .. } => {
                assert_eq!(variable, ENV_VALIDATION_MODE);
                assert_eq!(value, "lenient");
            }
            other => panic!("Expected Environment error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_lookup_bad_number() {
        let err =
            ModelConfig::from_lookup(lookup_from(&[(ENV_MAX_RECIPIENTS, "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Environment { .. }));
    }

    #[test]
    fn test_validation_mode_round_trip() {
        for mode in [ValidationMode::Strict, ValidationMode::Permissive] {
            assert_eq!(mode.as_str().parse::<ValidationMode>().unwrap(), mode);
        }
    }
}
