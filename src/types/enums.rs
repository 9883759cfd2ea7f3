//! Constrained string enumerations used across SES shapes.
//!
//! Every enumeration serializes to the exact literal SES uses on the wire,
//! and parsing rejects any other string with [`SesError::UnknownVariant`].

use crate::error::SesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! ses_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $literal:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the SES API string representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(SesError::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = SesError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

ses_enum! {
    /// Reason a recipient bounced, for recipients without DSN fields.
    pub enum BounceType {
        /// The address does not exist.
        DoesNotExist => "DoesNotExist",
        /// The message exceeds the recipient's size limit.
        MessageTooLarge => "MessageTooLarge",
        /// The recipient's mailbox is full.
        ExceededQuota => "ExceededQuota",
        /// The content was rejected.
        ContentRejected => "ContentRejected",
        /// No specific reason.
        Undefined => "Undefined",
        /// A transient failure.
        TemporaryFailure => "TemporaryFailure",
    }
}

ses_enum! {
    /// The RFC 3464 `Action` of a per-recipient DSN block.
    pub enum DsnAction {
        /// Delivery failed.
        Failed => "failed",
        /// Delivery is delayed.
        Delayed => "delayed",
        /// Delivery succeeded.
        Delivered => "delivered",
        /// The message was relayed onward.
        Relayed => "relayed",
        /// The message was expanded to multiple recipients.
        Expanded => "expanded",
    }
}

ses_enum! {
    /// Where a CloudWatch dimension value is taken from.
    pub enum DimensionValueSource {
        /// A message tag supplied at send time.
        MessageTag => "messageTag",
        /// A header of the message.
        EmailHeader => "emailHeader",
        /// A tag on a tracked link.
        LinkTag => "linkTag",
    }
}

ses_enum! {
    /// Verification state of an identity or its DKIM records.
    pub enum VerificationStatus {
        /// Verification pending.
        Pending => "Pending",
        /// Verification successful.
        Success => "Success",
        /// Verification failed.
        Failed => "Failed",
        /// Temporary failure.
        TemporaryFailure => "TemporaryFailure",
        /// Verification not started.
        NotStarted => "NotStarted",
    }
}

impl VerificationStatus {
    /// Check if the verification is complete and successful.
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Success)
    }

    /// Check if the verification is pending.
    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            VerificationStatus::Pending | VerificationStatus::NotStarted
        )
    }
}

ses_enum! {
    /// Kind of feedback notification.
    pub enum NotificationType {
        /// Bounce notifications.
        Bounce => "Bounce",
        /// Complaint notifications.
        Complaint => "Complaint",
        /// Delivery notifications.
        Delivery => "Delivery",
    }
}

ses_enum! {
    /// Type of identity.
    pub enum IdentityType {
        /// An email address.
        EmailAddress => "EmailAddress",
        /// A domain.
        Domain => "Domain",
    }
}

ses_enum! {
    /// Sending events that can be published to an event destination.
    pub enum EventType {
        /// The send request succeeded.
        Send => "send",
        /// SES rejected the message.
        Reject => "reject",
        /// The message hard bounced.
        Bounce => "bounce",
        /// The recipient complained.
        Complaint => "complaint",
        /// The message was delivered.
        Delivery => "delivery",
        /// The recipient opened the message.
        Open => "open",
        /// The recipient clicked a link.
        Click => "click",
        /// A template failed to render.
        RenderingFailure => "renderingFailure",
    }
}

ses_enum! {
    /// Status of a custom MAIL FROM domain.
    pub enum CustomMailFromStatus {
        /// Verification pending.
        Pending => "Pending",
        /// MX record found and verified.
        Success => "Success",
        /// Verification failed.
        Failed => "Failed",
        /// Temporary failure.
        TemporaryFailure => "TemporaryFailure",
    }
}

ses_enum! {
    /// Behavior when the custom MAIL FROM MX record is missing.
    pub enum BehaviorOnMxFailure {
        /// Fall back to amazonses.com.
        UseDefaultValue => "UseDefaultValue",
        /// Reject the message.
        RejectMessage => "RejectMessage",
    }
}

ses_enum! {
    /// How a receipt rule invokes a Lambda function.
    pub enum InvocationType {
        /// Asynchronous invocation.
        Event => "Event",
        /// Synchronous invocation whose result controls the mail flow.
        RequestResponse => "RequestResponse",
    }
}

ses_enum! {
    /// Encoding of the message body published by an SNS receipt action.
    pub enum SnsActionEncoding {
        /// UTF-8 text.
        Utf8 => "UTF-8",
        /// Base64.
        Base64 => "Base64",
    }
}

ses_enum! {
    /// What a stop action stops evaluating.
    pub enum StopScope {
        /// The rest of the receipt rule set.
        RuleSet => "RuleSet",
    }
}

ses_enum! {
    /// Whether inbound mail must arrive over TLS.
    pub enum TlsPolicy {
        /// Reject messages not sent over TLS.
        Require => "Require",
        /// Accept messages with or without TLS.
        Optional => "Optional",
    }
}

ses_enum! {
    /// Whether a receipt IP filter blocks or allows its range.
    pub enum ReceiptFilterPolicy {
        /// Reject mail from the range.
        Block => "Block",
        /// Accept mail from the range.
        Allow => "Allow",
    }
}

ses_enum! {
    /// Sections of a configuration set returned by `DescribeConfigurationSet`.
    pub enum ConfigurationSetAttribute {
        /// Event destinations.
        EventDestinations => "eventDestinations",
        /// Open and click tracking options.
        TrackingOptions => "trackingOptions",
        /// Delivery options.
        DeliveryOptions => "deliveryOptions",
        /// Reputation options.
        ReputationOptions => "reputationOptions",
    }
}

ses_enum! {
    /// Per-destination outcome of a bulk templated send.
    pub enum BulkEmailStatus {
        /// Sent.
        Success => "Success",
        /// Rejected.
        MessageRejected => "MessageRejected",
        /// The MAIL FROM domain is not verified.
        MailFromDomainNotVerified => "MailFromDomainNotVerified",
        /// The configuration set does not exist.
        ConfigurationSetDoesNotExist => "ConfigurationSetDoesNotExist",
        /// The template does not exist.
        TemplateDoesNotExist => "TemplateDoesNotExist",
        /// The account is suspended.
        AccountSuspended => "AccountSuspended",
        /// The account is throttled.
        AccountThrottled => "AccountThrottled",
        /// The daily quota was exceeded.
        AccountDailyQuotaExceeded => "AccountDailyQuotaExceeded",
        /// The dedicated IP pool does not exist.
        InvalidSendingPoolName => "InvalidSendingPoolName",
        /// Sending is paused for the account.
        AccountSendingPaused => "AccountSendingPaused",
        /// Sending is paused for the configuration set.
        ConfigurationSetSendingPaused => "ConfigurationSetSendingPaused",
        /// A parameter value was invalid.
        InvalidParameterValue => "InvalidParameterValue",
        /// A transient failure.
        TransientFailure => "TransientFailure",
        /// A non-transient failure.
        Failed => "Failed",
    }
}

impl BulkEmailStatus {
    /// Returns true if the destination was sent.
    pub fn is_success(&self) -> bool {
        matches!(self, BulkEmailStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_round_trip() {
        for value in BounceType::ALL {
            assert_eq!(value.as_str().parse::<BounceType>().unwrap(), *value);
        }
        for value in EventType::ALL {
            assert_eq!(EventType::try_from(value.as_str()).unwrap(), *value);
        }
    }

    #[test]
    fn test_unknown_literal_rejected() {
        let err = "Hard".parse::<BounceType>().unwrap_err();
        match err {
            SesError::UnknownVariant { type_name, value } => {
                assert_eq!(type_name, "BounceType");
                assert_eq!(value, "Hard");
            }
            other => panic!("Expected UnknownVariant, got {:?}", other),
        }
    }

    #[test]
    fn test_literals_are_case_sensitive() {
        assert!("Failed".parse::<DsnAction>().is_err());
        assert_eq!("failed".parse::<DsnAction>().unwrap(), DsnAction::Failed);
    }

    #[test]
    fn test_serde_uses_literal() {
        let json = serde_json::to_string(&SnsActionEncoding::Utf8).unwrap();
        assert_eq!(json, "\"UTF-8\"");

        let parsed: DimensionValueSource = serde_json::from_str("\"linkTag\"").unwrap();
        assert_eq!(parsed, DimensionValueSource::LinkTag);

        assert!(serde_json::from_str::<TlsPolicy>("\"Sometimes\"").is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(EventType::RenderingFailure.to_string(), "renderingFailure");
        assert_eq!(String::from(StopScope::RuleSet), "RuleSet");
    }

    #[test]
    fn test_verification_status_helpers() {
        assert!(VerificationStatus::Success.is_verified());
        assert!(VerificationStatus::NotStarted.is_pending());
        assert!(!VerificationStatus::Failed.is_pending());
    }
}
