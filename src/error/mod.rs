//! Error types for the SES model crate.
//!
//! Errors fall into two groups:
//! - Local errors raised while constructing, validating or encoding a model
//!   value (unknown enum literals, malformed variant records, builder and
//!   validation failures, serde failures).
//! - [`ServiceError`], the typed form of an error document returned by SES,
//!   produced by [`map_service_error`].
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_model::error::SesError;
//! use integrations_aws_ses_model::types::BounceType;
//!
//! let err = "Bogus".parse::<BounceType>().unwrap_err();
//! assert!(matches!(err, SesError::UnknownVariant { .. }));
//! assert_eq!(err.to_string(), "Unknown BounceType value: Bogus");
//! ```

mod mapping;
mod service;

pub use mapping::{map_service_error, parse_error_response, AwsErrorResponse};
pub use service::{ServiceError, ServiceErrorKind};

use crate::builders::BuilderError;
use crate::config::ConfigError;
use crate::validation::Violation;
use thiserror::Error;

/// Top-level error type for the SES model crate.
#[derive(Debug, Error)]
pub enum SesError {
    /// A single field failed a local check.
    #[error("Validation error: {message}")]
    Validation {
        /// Description of the validation error.
        message: String,
        /// Optional field name that failed validation.
        field: Option<String>,
    },

    /// A request failed one or more invariant checks in strict mode.
    #[error("Validation failed with {} violation(s)", .violations.len())]
    ValidationFailed {
        /// Every violation found, in discovery order.
        violations: Vec<Violation>,
    },

    /// A string did not match any literal of a constrained enumeration.
    #[error("Unknown {type_name} value: {value}")]
    UnknownVariant {
        /// The enumeration the value was parsed into.
        type_name: &'static str,
        /// The rejected literal.
        value: String,
    },

    /// A variant record did not carry exactly one variant.
    #[error("{type_name} must carry exactly one variant, found {count}")]
    InvalidVariantCount {
        /// The union type being built.
        type_name: &'static str,
        /// How many variants were populated.
        count: usize,
    },

    /// Serializing or deserializing a payload failed.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
    },

    /// A builder was finished in an invalid state.
    #[error(transparent)]
    Builder(#[from] BuilderError),

    /// Model configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An error document returned by SES.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl SesError {
    /// Create a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SesError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Returns true if the error came back from the service and may succeed on retry.
    ///
    /// Local errors are never retryable: resending the same value fails the same way.
    pub fn is_retryable(&self) -> bool {
        match self {
            SesError::Service(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Returns the SES error code if this is a service error.
    ///
    /// ```rust
    /// use integrations_aws_ses_model::error::{map_service_error, parse_error_response, SesError};
    ///
    /// let doc = r#"{"Code": "MessageRejected", "Message": "Email address is not verified."}"#;
    /// let err: SesError = map_service_error(&parse_error_response(doc).unwrap(), 400).into();
    /// assert_eq!(err.error_code(), Some("MessageRejected"));
    /// ```
    pub fn error_code(&self) -> Option<&str> {
        match self {
            SesError::Service(err) => Some(err.error_code()),
            _ => None,
        }
    }

    /// Returns the AWS request ID if available.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SesError::Service(err) => err.request_id.as_deref(),
            _ => None,
        }
    }

    /// Returns the violations of a failed validation, or an empty slice.
    pub fn violations(&self) -> &[Violation] {
        match self {
            SesError::ValidationFailed { violations } => violations,
            _ => &[],
        }
    }
}

/// Result type alias for SES model operations.
pub type SesResult<T> = Result<T, SesError>;

impl From<serde_json::Error> for SesError {
    fn from(err: serde_json::Error) -> Self {
        SesError::Serialization {
            message: err.to_string(),
        }
    }
}
