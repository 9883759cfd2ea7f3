//! Typed SES service errors.
//!
//! SES reports failures as an error document carrying a code, a message and,
//! for some codes, one extra member naming the offending resource. Each code
//! the classic API documents gets a [`ServiceErrorKind`] variant; the extra
//! member becomes a field of that variant.

use std::fmt;
use thiserror::Error;

/// Error returned by the SES service for a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ServiceError {
    /// Which documented error this is.
    pub kind: ServiceErrorKind,
    /// Human-readable message from the service.
    pub message: String,
    /// AWS request ID for debugging.
    pub request_id: Option<String>,
    /// HTTP status the error arrived with.
    pub status_code: u16,
}

impl ServiceError {
    /// Create a service error without a request ID.
    pub fn new(kind: ServiceErrorKind, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            request_id: None,
            status_code,
        }
    }

    /// Attach the AWS request ID.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// The literal SES error code.
    pub fn error_code(&self) -> &str {
        self.kind.code()
    }

    /// Returns true for throttling and server-side (5xx) failures.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ServiceErrorKind::Throttling)
            || matches!(self.status_code, 500..=599)
    }

    /// The unverified sender, if this is a `FromEmailAddressNotVerified` error.
    pub fn from_email_address(&self) -> Option<&str> {
        match &self.kind {
            ServiceErrorKind::FromEmailAddressNotVerified { from_email_address } => {
                from_email_address.as_deref()
            }
            _ => None,
        }
    }
}

/// The documented SES classic API error codes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    /// The sender address of a custom verification email is not verified.
    FromEmailAddressNotVerified {
        /// The address that failed verification.
        from_email_address: Option<String>,
    },
    /// A resource with this name already exists.
    AlreadyExists {
        /// Name of the existing resource.
        name: Option<String>,
    },
    /// The resource is in use and cannot be deleted.
    CannotDelete {
        /// Name of the resource.
        name: Option<String>,
    },
    /// The configuration set does not exist.
    ConfigurationSetDoesNotExist {
        /// Name of the missing configuration set.
        configuration_set_name: Option<String>,
    },
    /// The custom verification email template does not exist.
    CustomVerificationEmailTemplateDoesNotExist {
        /// Name of the missing template.
        template_name: Option<String>,
    },
    /// A custom verification email template with this name already exists.
    CustomVerificationEmailTemplateAlreadyExists {
        /// Name of the existing template.
        template_name: Option<String>,
    },
    /// The custom verification template content is invalid.
    CustomVerificationEmailInvalidContent,
    /// SES cannot invoke the Lambda function.
    InvalidLambdaFunction {
        /// ARN of the function.
        function_arn: Option<String>,
    },
    /// SES cannot write to the S3 bucket or use the KMS key.
    InvalidS3Configuration {
        /// Name of the bucket.
        bucket: Option<String>,
    },
    /// SES cannot publish to the SNS topic.
    InvalidSnsTopic {
        /// ARN of the topic.
        topic: Option<String>,
    },
    /// The sending authorization policy is malformed.
    InvalidPolicy,
    /// The tracking options are invalid.
    InvalidTrackingOptions,
    /// Tracking options already exist for the configuration set.
    TrackingOptionsAlreadyExists {
        /// Configuration set name.
        configuration_set_name: Option<String>,
    },
    /// No tracking options exist for the configuration set.
    TrackingOptionsDoesNotExist {
        /// Configuration set name.
        configuration_set_name: Option<String>,
    },
    /// An event destination with this name already exists.
    EventDestinationAlreadyExists {
        /// Configuration set name.
        configuration_set_name: Option<String>,
        /// Event destination name.
        event_destination_name: Option<String>,
    },
    /// A resource limit was exceeded.
    LimitExceeded,
    /// The MAIL FROM domain is not verified.
    MailFromDomainNotVerified,
    /// The message was rejected.
    MessageRejected,
    /// The receipt rule does not exist.
    RuleDoesNotExist {
        /// Name of the rule.
        name: Option<String>,
    },
    /// The receipt rule set does not exist.
    RuleSetDoesNotExist {
        /// Name of the rule set.
        name: Option<String>,
    },
    /// The email template does not exist.
    TemplateDoesNotExist {
        /// Name of the template.
        template_name: Option<String>,
    },
    /// The account is still in the sandbox.
    ProductionAccessNotGranted,
    /// Sending is paused for the account.
    AccountSendingPaused,
    /// Sending is paused for the configuration set.
    ConfigurationSetSendingPaused {
        /// Configuration set name.
        configuration_set_name: Option<String>,
    },
    /// The request rate was throttled.
    Throttling,
    /// Any code not listed above.
    Unknown {
        /// The literal code.
        code: String,
    },
}

impl ServiceErrorKind {
    /// The literal SES error code for this kind.
    pub fn code(&self) -> &str {
        match self {
            ServiceErrorKind::FromEmailAddressNotVerified { .. } => "FromEmailAddressNotVerified",
            ServiceErrorKind::AlreadyExists { .. } => "AlreadyExists",
            ServiceErrorKind::CannotDelete { .. } => "CannotDelete",
            ServiceErrorKind::ConfigurationSetDoesNotExist { .. } => "ConfigurationSetDoesNotExist",
            ServiceErrorKind::CustomVerificationEmailTemplateDoesNotExist { .. } => {
                "CustomVerificationEmailTemplateDoesNotExist"
            }
            ServiceErrorKind::CustomVerificationEmailTemplateAlreadyExists { .. } => {
                "CustomVerificationEmailTemplateAlreadyExists"
            }
            ServiceErrorKind::CustomVerificationEmailInvalidContent => {
                "CustomVerificationEmailInvalidContent"
            }
            ServiceErrorKind::InvalidLambdaFunction { .. } => "InvalidLambdaFunction",
            ServiceErrorKind::InvalidS3Configuration { .. } => "InvalidS3Configuration",
            ServiceErrorKind::InvalidSnsTopic { .. } => "InvalidSnsTopic",
            ServiceErrorKind::InvalidPolicy => "InvalidPolicy",
            ServiceErrorKind::InvalidTrackingOptions => "InvalidTrackingOptions",
            ServiceErrorKind::TrackingOptionsAlreadyExists { .. } => "TrackingOptionsAlreadyExistsException",
            ServiceErrorKind::TrackingOptionsDoesNotExist { .. } => "TrackingOptionsDoesNotExistException",
            ServiceErrorKind::EventDestinationAlreadyExists { .. } => "EventDestinationAlreadyExists",
            ServiceErrorKind::LimitExceeded => "LimitExceeded",
            ServiceErrorKind::MailFromDomainNotVerified => "MailFromDomainNotVerifiedException",
            ServiceErrorKind::MessageRejected => "MessageRejected",
            ServiceErrorKind::RuleDoesNotExist { .. } => "RuleDoesNotExist",
            ServiceErrorKind::RuleSetDoesNotExist { .. } => "RuleSetDoesNotExist",
            ServiceErrorKind::TemplateDoesNotExist { .. } => "TemplateDoesNotExist",
            ServiceErrorKind::ProductionAccessNotGranted => "ProductionAccessNotGranted",
            ServiceErrorKind::AccountSendingPaused => "AccountSendingPausedException",
            ServiceErrorKind::ConfigurationSetSendingPaused { .. } => {
                "ConfigurationSetSendingPausedException"
            }
            ServiceErrorKind::Throttling => "Throttling",
            ServiceErrorKind::Unknown { code } => code,
        }
    }
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_email_address_accessor() {
        let err = ServiceError::new(
            ServiceErrorKind::FromEmailAddressNotVerified {
                from_email_address: Some("sender@example.com".to_string()),
            },
            "Email address is not verified.",
            400,
        );
        assert_eq!(err.from_email_address(), Some("sender@example.com"));
        assert_eq!(err.error_code(), "FromEmailAddressNotVerified");

        let other = ServiceError::new(ServiceErrorKind::InvalidPolicy, "bad policy", 400);
        assert_eq!(other.from_email_address(), None);
    }

    #[test]
    fn test_retryable_by_status() {
        let unknown = ServiceError::new(
            ServiceErrorKind::Unknown {
                code: "InternalFailure".to_string(),
            },
            "boom",
            500,
        );
        assert!(unknown.is_retryable());
        assert_eq!(unknown.error_code(), "InternalFailure");

        let client = ServiceError::new(ServiceErrorKind::LimitExceeded, "limit", 400);
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_display() {
        let err = ServiceError::new(
            ServiceErrorKind::RuleSetDoesNotExist {
                name: Some("default".to_string()),
            },
            "Rule set does not exist: default",
            400,
        );
        assert_eq!(
            err.to_string(),
            "RuleSetDoesNotExist: Rule set does not exist: default"
        );
    }
}
