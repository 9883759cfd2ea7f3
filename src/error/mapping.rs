//! SES error document parsing and mapping.
//!
//! This module turns the error document SES returns for a failed call into a
//! typed [`ServiceError`]:
//!
//! - Parse the document with [`parse_error_response`]
//! - Map the code (and any extra member) with [`map_service_error`]
//!
//! # Error Document Format
//!
//! ```json
//! {
//!   "Code": "FromEmailAddressNotVerified",
//!   "Message": "Email address is not verified.",
//!   "FromEmailAddress": "sender@example.com",
//!   "RequestId": "abc-123-def-456"
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_model::error::{map_service_error, parse_error_response};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let body = r#"{"Code": "RuleSetDoesNotExist", "Message": "missing", "Name": "inbound"}"#;
//! let error = map_service_error(&parse_error_response(body)?, 400);
//! assert_eq!(error.error_code(), "RuleSetDoesNotExist");
//! # Ok(())
//! # }
//! ```

use super::{ServiceError, ServiceErrorKind, SesError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsed SES error document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AwsErrorResponse {
    /// The error code.
    ///
    /// Accepted as `Code`, `__type` or `Type`. A namespace prefix
    /// (e.g. "com.amazonaws.ses#MessageRejected") is stripped.
    #[serde(rename = "Code", alias = "__type", alias = "Type", alias = "code")]
    pub error_type: String,

    /// Human-readable error message.
    #[serde(rename = "Message", alias = "message", default)]
    pub message: String,

    /// AWS request ID for debugging and support.
    #[serde(
        rename = "RequestId",
        alias = "requestId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub request_id: Option<String>,

    /// Any other members, such as `FromEmailAddress` or `Name`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AwsErrorResponse {
    /// Create an error document with just a code and message.
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
            request_id: None,
            extra: BTreeMap::new(),
        }
    }

    /// Add an extra member.
    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra
            .insert(name.into(), serde_json::Value::String(value.into()));
        self
    }

    /// Look up an extra member as a string.
    pub fn member(&self, name: &str) -> Option<String> {
        self.extra
            .get(name)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}

/// Parse an SES error document from a JSON string.
///
/// # Errors
///
/// Returns [`SesError::Serialization`] if the JSON cannot be parsed.
pub fn parse_error_response(body: &str) -> Result<AwsErrorResponse, SesError> {
    let mut response: AwsErrorResponse = serde_json::from_str(body)?;

    // "com.amazonaws.ses#MessageRejected" -> "MessageRejected"
    if let Some(hash_pos) = response.error_type.rfind('#') {
        response.error_type = response.error_type[hash_pos + 1..].to_string();
    }

    Ok(response)
}

/// Map a parsed error document to a [`ServiceError`].
///
/// Codes are matched with and without their `Exception` suffix, since SES
/// reports a few codes (e.g. `MailFromDomainNotVerifiedException`) in the
/// long form. Unlisted codes map to [`ServiceErrorKind::Unknown`].
pub fn map_service_error(error: &AwsErrorResponse, status_code: u16) -> ServiceError {
    let code = error.error_type.as_str();
    let normalized = code.strip_suffix("Exception").unwrap_or(code);

    let kind = match normalized {
        "FromEmailAddressNotVerified" => ServiceErrorKind::FromEmailAddressNotVerified {
            from_email_address: error.member("FromEmailAddress"),
        },
        "AlreadyExists" => ServiceErrorKind::AlreadyExists {
            name: error.member("Name"),
        },
        "CannotDelete" => ServiceErrorKind::CannotDelete {
            name: error.member("Name"),
        },
        "ConfigurationSetDoesNotExist" => ServiceErrorKind::ConfigurationSetDoesNotExist {
            configuration_set_name: error.member("ConfigurationSetName"),
        },
        "CustomVerificationEmailTemplateDoesNotExist" => {
            ServiceErrorKind::CustomVerificationEmailTemplateDoesNotExist {
                template_name: error.member("CustomVerificationEmailTemplateName"),
            }
        }
        "CustomVerificationEmailTemplateAlreadyExists" => {
            ServiceErrorKind::CustomVerificationEmailTemplateAlreadyExists {
                template_name: error.member("CustomVerificationEmailTemplateName"),
            }
        }
        "CustomVerificationEmailInvalidContent" => {
            ServiceErrorKind::CustomVerificationEmailInvalidContent
        }
        "InvalidLambdaFunction" => ServiceErrorKind::InvalidLambdaFunction {
            function_arn: error.member("FunctionArn"),
        },
        "InvalidS3Configuration" => ServiceErrorKind::InvalidS3Configuration {
            bucket: error.member("Bucket"),
        },
        "InvalidSnsTopic" => ServiceErrorKind::InvalidSnsTopic {
            topic: error.member("Topic"),
        },
        "InvalidPolicy" => ServiceErrorKind::InvalidPolicy,
        "InvalidTrackingOptions" => ServiceErrorKind::InvalidTrackingOptions,
        "TrackingOptionsAlreadyExists" => ServiceErrorKind::TrackingOptionsAlreadyExists {
            configuration_set_name: error.member("ConfigurationSetName"),
        },
        "TrackingOptionsDoesNotExist" => ServiceErrorKind::TrackingOptionsDoesNotExist {
            configuration_set_name: error.member("ConfigurationSetName"),
        },
        "EventDestinationAlreadyExists" => ServiceErrorKind::EventDestinationAlreadyExists {
            configuration_set_name: error.member("ConfigurationSetName"),
            event_destination_name: error.member("EventDestinationName"),
        },
        "LimitExceeded" => ServiceErrorKind::LimitExceeded,
        "MailFromDomainNotVerified" => ServiceErrorKind::MailFromDomainNotVerified,
        "MessageRejected" => ServiceErrorKind::MessageRejected,
        "RuleDoesNotExist" => ServiceErrorKind::RuleDoesNotExist {
            name: error.member("Name"),
        },
        "RuleSetDoesNotExist" => ServiceErrorKind::RuleSetDoesNotExist {
            name: error.member("Name"),
        },
        "TemplateDoesNotExist" => ServiceErrorKind::TemplateDoesNotExist {
            template_name: error.member("TemplateName"),
        },
        "ProductionAccessNotGranted" => ServiceErrorKind::ProductionAccessNotGranted,
        "AccountSendingPaused" => ServiceErrorKind::AccountSendingPaused,
        "ConfigurationSetSendingPaused" => ServiceErrorKind::ConfigurationSetSendingPaused {
            configuration_set_name: error.member("ConfigurationSetName"),
        },
        "Throttling" | "TooManyRequests" => ServiceErrorKind::Throttling,
        _ => ServiceErrorKind::Unknown {
            code: code.to_string(),
        },
    };

    ServiceError {
        kind,
        message: error.message.clone(),
        request_id: error.request_id.clone(),
        status_code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_response_basic() {
        let json = r#"{"Code": "MessageRejected", "Message": "Invalid email"}"#;
        let result = parse_error_response(json).unwrap();

        assert_eq!(result.error_type, "MessageRejected");
        assert_eq!(result.message, "Invalid email");
        assert_eq!(result.request_id, None);
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_parse_error_response_aliases() {
        let json = r#"{
            "__type": "com.amazonaws.ses#LimitExceeded",
            "message": "Too many rule sets",
            "requestId": "abc-123-def"
        }"#;
        let result = parse_error_response(json).unwrap();

        assert_eq!(result.error_type, "LimitExceeded");
        assert_eq!(result.request_id.as_deref(), Some("abc-123-def"));
    }

    #[test]
    fn test_parse_error_response_invalid() {
        assert!(matches!(
            parse_error_response("not json"),
            Err(SesError::Serialization { .. })
        ));
    }

    #[test]
    fn test_map_from_email_address_not_verified() {
        let json = r#"{
            "Code": "FromEmailAddressNotVerified",
            "Message": "Email address is not verified.",
            "FromEmailAddress": "sender@example.com",
            "RequestId": "req-1"
        }"#;
        let error = map_service_error(&parse_error_response(json).unwrap(), 400);

        assert_eq!(error.from_email_address(), Some("sender@example.com"));
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_map_exception_suffix() {
        let response = AwsErrorResponse::new("MailFromDomainNotVerifiedException", "not verified");
        let error = map_service_error(&response, 400);
        assert_eq!(error.kind, ServiceErrorKind::MailFromDomainNotVerified);

        let response = AwsErrorResponse::new("TrackingOptionsAlreadyExistsException", "exists")
            .with_member("ConfigurationSetName", "marketing");
        let error = map_service_error(&response, 400);
        assert_eq!(
            error.kind,
            ServiceErrorKind::TrackingOptionsAlreadyExists {
                configuration_set_name: Some("marketing".to_string())
            }
        );
    }

    #[test]
    fn test_map_event_destination_members() {
        let response = AwsErrorResponse::new("EventDestinationAlreadyExists", "exists")
            .with_member("ConfigurationSetName", "tx")
            .with_member("EventDestinationName", "firehose");
        let error = map_service_error(&response, 400);

        assert_eq!(
            error.kind,
            ServiceErrorKind::EventDestinationAlreadyExists {
                configuration_set_name: Some("tx".to_string()),
                event_destination_name: Some("firehose".to_string()),
            }
        );
    }

    #[test]
    fn test_map_throttling() {
        let error = map_service_error(&AwsErrorResponse::new("Throttling", "Rate exceeded"), 400);
        assert_eq!(error.kind, ServiceErrorKind::Throttling);
        assert!(error.is_retryable());
    }

    #[test]
    fn test_map_unknown_code() {
        let error = map_service_error(
            &AwsErrorResponse::new("ServiceUnavailable", "try later"),
            503,
        );
        assert_eq!(
            error.kind,
            ServiceErrorKind::Unknown {
                code: "ServiceUnavailable".to_string()
            }
        );
        assert!(error.is_retryable());
    }

    #[test]
    fn test_missing_member_is_none() {
        let error = map_service_error(&AwsErrorResponse::new("InvalidSnsTopic", "bad"), 400);
        assert_eq!(error.kind, ServiceErrorKind::InvalidSnsTopic { topic: None });
    }
}
