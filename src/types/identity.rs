//! Identity attribute records returned by the `GetIdentity*Attributes` actions.
//!
//! Each action returns a map from identity (address or domain) to one of these
//! records.

use super::{BehaviorOnMxFailure, CustomMailFromStatus, IdentityType, VerificationStatus};
use serde::{Deserialize, Serialize};

impl IdentityType {
    /// Classify an identity string: anything containing `@` is an address.
    pub fn of(identity: &str) -> Self {
        if identity.contains('@') {
            IdentityType::EmailAddress
        } else {
            IdentityType::Domain
        }
    }
}

/// Verification state of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityVerificationAttributes {
    /// Verification status.
    pub verification_status: VerificationStatus,
    /// TXT record value for domain verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_token: Option<String>,
}

/// Easy DKIM state of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityDkimAttributes {
    /// Whether DKIM signing is enabled.
    pub dkim_enabled: bool,
    /// Whether SES found the DKIM CNAME records.
    pub dkim_verification_status: VerificationStatus,
    /// CNAME tokens to publish, in the order SES returned them.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dkim_tokens: Vec<String>,
}

impl IdentityDkimAttributes {
    /// The CNAME records to publish for `domain`, one per token.
    ///
    /// ```rust
    /// use integrations_aws_ses_model::types::{IdentityDkimAttributes, VerificationStatus};
    ///
    /// let attrs = IdentityDkimAttributes {
    ///     dkim_enabled: true,
    ///     dkim_verification_status: VerificationStatus::Pending,
    ///     dkim_tokens: vec!["abc".to_string()],
    /// };
    /// assert_eq!(
    ///     attrs.cname_records("example.com"),
    ///     vec![("abc._domainkey.example.com".to_string(), "abc.dkim.amazonses.com".to_string())]
    /// );
    /// ```
    pub fn cname_records(&self, domain: &str) -> Vec<(String, String)> {
        self.dkim_tokens
            .iter()
            .map(|token| {
                (
                    format!("{}._domainkey.{}", token, domain),
                    format!("{}.dkim.amazonses.com", token),
                )
            })
            .collect()
    }
}

/// Custom MAIL FROM domain state of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityMailFromDomainAttributes {
    /// The custom MAIL FROM domain; empty when none is configured.
    #[serde(default)]
    pub mail_from_domain: String,
    /// Whether the MX record was found.
    pub mail_from_domain_status: CustomMailFromStatus,
    /// What SES does when the MX record is missing.
    #[serde(rename = "BehaviorOnMXFailure")]
    pub behavior_on_mx_failure: BehaviorOnMxFailure,
}

/// Feedback notification settings of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityNotificationAttributes {
    /// Topic receiving bounce notifications.
    #[serde(default)]
    pub bounce_topic: String,
    /// Topic receiving complaint notifications.
    #[serde(default)]
    pub complaint_topic: String,
    /// Topic receiving delivery notifications.
    #[serde(default)]
    pub delivery_topic: String,
    /// Whether bounces and complaints are also forwarded by email.
    pub forwarding_enabled: bool,
    /// Whether bounce notifications include the original headers.
    #[serde(default)]
    pub headers_in_bounce_notifications_enabled: bool,
    /// Whether complaint notifications include the original headers.
    #[serde(default)]
    pub headers_in_complaint_notifications_enabled: bool,
    /// Whether delivery notifications include the original headers.
    #[serde(default)]
    pub headers_in_delivery_notifications_enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_type_of() {
        assert_eq!(IdentityType::of("user@example.com"), IdentityType::EmailAddress);
        assert_eq!(IdentityType::of("example.com"), IdentityType::Domain);
    }

    #[test]
    fn test_dkim_tokens_keep_order() {
        let json = r#"{
            "DkimEnabled": true,
            "DkimVerificationStatus": "Success",
            "DkimTokens": ["t2", "t1", "t2"]
        }"#;
        let attrs: IdentityDkimAttributes = serde_json::from_str(json).unwrap();

        assert_eq!(attrs.dkim_tokens, vec!["t2", "t1", "t2"]);
        assert!(attrs.dkim_verification_status.is_verified());
        assert_eq!(attrs.cname_records("example.com").len(), 3);
    }

    #[test]
    fn test_mail_from_wire_names() {
        let attrs = IdentityMailFromDomainAttributes {
            mail_from_domain: "bounce.example.com".to_string(),
            mail_from_domain_status: CustomMailFromStatus::Pending,
            behavior_on_mx_failure: BehaviorOnMxFailure::RejectMessage,
        };
        let json = serde_json::to_value(&attrs).unwrap();

        assert_eq!(json["BehaviorOnMXFailure"], "RejectMessage");
        assert_eq!(json["MailFromDomainStatus"], "Pending");
    }

    #[test]
    fn test_notification_defaults() {
        let attrs: IdentityNotificationAttributes =
            serde_json::from_str(r#"{"ForwardingEnabled": true}"#).unwrap();

        assert!(attrs.forwarding_enabled);
        assert!(attrs.bounce_topic.is_empty());
        assert!(!attrs.headers_in_bounce_notifications_enabled);
    }

    #[test]
    fn test_verification_unknown_status_rejected() {
        let result = serde_json::from_str::<IdentityVerificationAttributes>(
            r#"{"VerificationStatus": "Verified"}"#,
        );
        assert!(result.is_err());
    }
}
