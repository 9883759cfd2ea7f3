//! Configuration error types for the SES model.

use thiserror::Error;

/// Errors that can occur while building a [`ModelConfig`](super::ModelConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration value or combination.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the configuration issue.
        message: String,
    },

    /// An environment variable held a value that could not be parsed.
    #[error("Environment error: {variable}={value:?} ({message})")]
    Environment {
        /// The variable that was read.
        variable: String,
        /// The raw value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
}
