//! Bounce and delivery status notification (DSN) shapes.
//!
//! These are the building blocks of a `SendBounce` request: a message-level
//! [`MessageDsn`] plus one [`BouncedRecipientInfo`] per recipient. Each
//! recipient carries exactly one [`BounceReason`]: either a plain
//! [`BounceType`] or a full RFC 3464 [`RecipientDsnFields`] block.

use super::{BounceType, DsnAction};
use crate::error::{SesError, SesResult};
use crate::validation::{is_email_address, is_enhanced_status_code, Validate, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A name/value header field added to a DSN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtensionField {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl ExtensionField {
    /// Create a new extension field.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Validate for ExtensionField {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("name", &self.name);
        if self.value.contains(|c: char| c == '\r' || c == '\n') {
            v.push("value", "must not contain line breaks");
        }
    }
}

/// Message-level fields of a DSN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageDsn {
    /// The MTA that attempted delivery, e.g. `dns; mx.example.com`.
    pub reporting_mta: String,
    /// When the message arrived at the reporting MTA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<DateTime<Utc>>,
    /// Additional per-message header fields, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension_fields: Vec<ExtensionField>,
}

impl MessageDsn {
    /// Create a DSN block for the given reporting MTA.
    pub fn new(reporting_mta: impl Into<String>) -> Self {
        Self {
            reporting_mta: reporting_mta.into(),
            arrival_date: None,
            extension_fields: Vec::new(),
        }
    }

    /// Set the arrival date.
    pub fn with_arrival_date(mut self, arrival_date: DateTime<Utc>) -> Self {
        self.arrival_date = Some(arrival_date);
        self
    }

    /// Append an extension field.
    pub fn add_extension_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extension_fields.push(ExtensionField::new(name, value));
        self
    }
}

impl Validate for MessageDsn {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("reporting_mta", &self.reporting_mta);
        v.check_each("extension_fields", &self.extension_fields);
    }
}

/// Per-recipient fields of a DSN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientDsnFields {
    /// The final recipient, if it differs from the bounced address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_recipient: Option<String>,
    /// What the reporting MTA did with the message.
    pub action: DsnAction,
    /// The MTA that attempted delivery to this recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_mta: Option<String>,
    /// RFC 3463 enhanced status code, e.g. `5.1.1`.
    pub status: String,
    /// Diagnostic text from the remote MTA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic_code: Option<String>,
    /// When delivery to this recipient was last attempted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt_date: Option<DateTime<Utc>>,
    /// Additional per-recipient header fields, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extension_fields: Vec<ExtensionField>,
}

impl RecipientDsnFields {
    /// Create DSN fields with the required action and status.
    pub fn new(action: DsnAction, status: impl Into<String>) -> Self {
        Self {
            final_recipient: None,
            action,
            remote_mta: None,
            status: status.into(),
            diagnostic_code: None,
            last_attempt_date: None,
            extension_fields: Vec::new(),
        }
    }

    /// Set the action.
    pub fn with_action(mut self, action: DsnAction) -> Self {
        self.action = action;
        self
    }

    /// Set the action from its literal (`failed`, `delayed`, ...).
    pub fn try_action(self, action: &str) -> SesResult<Self> {
        Ok(self.with_action(action.parse()?))
    }

    /// Set the final recipient.
    pub fn with_final_recipient(mut self, final_recipient: impl Into<String>) -> Self {
        self.final_recipient = Some(final_recipient.into());
        self
    }

    /// Set the remote MTA.
    pub fn with_remote_mta(mut self, remote_mta: impl Into<String>) -> Self {
        self.remote_mta = Some(remote_mta.into());
        self
    }

    /// Set the diagnostic code.
    pub fn with_diagnostic_code(mut self, diagnostic_code: impl Into<String>) -> Self {
        self.diagnostic_code = Some(diagnostic_code.into());
        self
    }

    /// Set the last attempt date.
    pub fn with_last_attempt_date(mut self, last_attempt_date: DateTime<Utc>) -> Self {
        self.last_attempt_date = Some(last_attempt_date);
        self
    }

    /// Append an extension field.
    pub fn add_extension_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extension_fields.push(ExtensionField::new(name, value));
        self
    }
}

impl Validate for RecipientDsnFields {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_enhanced_status_code(&self.status) {
            v.push("status", format!("'{}' is not an x.y.z status code", self.status));
        }
        v.require_if_set("final_recipient", self.final_recipient.as_deref());
        v.require_if_set("remote_mta", self.remote_mta.as_deref());
        v.check_each("extension_fields", &self.extension_fields);
    }
}

/// Why a recipient bounced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BounceReason {
    /// A bounce type; SES generates the DSN fields.
    BounceType(BounceType),
    /// Explicit DSN fields.
    DsnFields(RecipientDsnFields),
}

impl From<BounceType> for BounceReason {
    fn from(value: BounceType) -> Self {
        BounceReason::BounceType(value)
    }
}

impl From<RecipientDsnFields> for BounceReason {
    fn from(value: RecipientDsnFields) -> Self {
        BounceReason::DsnFields(value)
    }
}

/// A recipient of the original message that is being bounced.
///
/// ```rust
/// use integrations_aws_ses_model::types::{BounceType, BouncedRecipientInfo};
///
/// let info = BouncedRecipientInfo::new("a@example.com", BounceType::MessageTooLarge);
/// assert_eq!(info.bounce_type().map(|t| t.as_str()), Some("MessageTooLarge"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BouncedRecipientInfoShape", into = "BouncedRecipientInfoShape")]
pub struct BouncedRecipientInfo {
    /// The bounced address.
    pub recipient: String,
    /// Sending-authorization ARN for the recipient's identity.
    pub recipient_arn: Option<String>,
    /// Bounce type or DSN fields.
    pub reason: BounceReason,
}

impl BouncedRecipientInfo {
    /// Create a bounced recipient.
    pub fn new(recipient: impl Into<String>, reason: impl Into<BounceReason>) -> Self {
        Self {
            recipient: recipient.into(),
            recipient_arn: None,
            reason: reason.into(),
        }
    }

    /// Set the recipient ARN.
    pub fn with_recipient_arn(mut self, arn: impl Into<String>) -> Self {
        self.recipient_arn = Some(arn.into());
        self
    }

    /// Use a bounce type, replacing any DSN fields.
    pub fn with_bounce_type(mut self, bounce_type: BounceType) -> Self {
        self.reason = BounceReason::BounceType(bounce_type);
        self
    }

    /// Use a bounce type given as its literal.
    pub fn try_bounce_type(self, bounce_type: &str) -> SesResult<Self> {
        Ok(self.with_bounce_type(bounce_type.parse()?))
    }

    /// Use explicit DSN fields, replacing any bounce type.
    pub fn with_dsn_fields(mut self, fields: RecipientDsnFields) -> Self {
        self.reason = BounceReason::DsnFields(fields);
        self
    }

    /// The bounce type, if the reason is one.
    pub fn bounce_type(&self) -> Option<BounceType> {
        match &self.reason {
            BounceReason::BounceType(bounce_type) => Some(*bounce_type),
            BounceReason::DsnFields(_) => None,
        }
    }

    /// The DSN fields, if the reason is explicit.
    pub fn dsn_fields(&self) -> Option<&RecipientDsnFields> {
        match &self.reason {
            BounceReason::DsnFields(fields) => Some(fields),
            BounceReason::BounceType(_) => None,
        }
    }
}

impl Validate for BouncedRecipientInfo {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_email_address(&self.recipient) {
            v.push("recipient", format!("'{}' is not an email address", self.recipient));
        }
        v.require_if_set("recipient_arn", self.recipient_arn.as_deref());
        if let BounceReason::DsnFields(fields) = &self.reason {
            v.check("recipient_dsn_fields", fields);
        }
    }
}

/// Wire layout of [`BouncedRecipientInfo`]: both reasons as optional siblings.
///
/// The service expects exactly one of `BounceType` and `RecipientDsnFields`.
/// This shape accepts any combination so that such documents can be read and
/// inspected; converting to [`BouncedRecipientInfo`] enforces the rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BouncedRecipientInfoShape {
    /// The bounced address.
    pub recipient: String,
    /// Sending-authorization ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_arn: Option<String>,
    /// Bounce type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_type: Option<BounceType>,
    /// DSN fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_dsn_fields: Option<RecipientDsnFields>,
}

impl TryFrom<BouncedRecipientInfoShape> for BouncedRecipientInfo {
    type Error = SesError;

    fn try_from(shape: BouncedRecipientInfoShape) -> Result<Self, Self::Error> {
        let reason = match (shape.bounce_type, shape.recipient_dsn_fields) {
            (Some(bounce_type), None) => BounceReason::BounceType(bounce_type),
            (None, Some(fields)) => BounceReason::DsnFields(fields),
            (bounce_type, fields) => {
                let count = usize::from(bounce_type.is_some()) + usize::from(fields.is_some());
                tracing::debug!(
                    recipient = %shape.recipient,
                    count,
                    "bounced recipient must carry one bounce reason"
                );
                return Err(SesError::InvalidVariantCount {
                    type_name: "BouncedRecipientInfo",
                    count,
                });
            }
        };

        Ok(Self {
            recipient: shape.recipient,
            recipient_arn: shape.recipient_arn,
            reason,
        })
    }
}

impl From<BouncedRecipientInfo> for BouncedRecipientInfoShape {
    fn from(info: BouncedRecipientInfo) -> Self {
        let (bounce_type, recipient_dsn_fields) = match info.reason {
            BounceReason::BounceType(bounce_type) => (Some(bounce_type), None),
            BounceReason::DsnFields(fields) => (None, Some(fields)),
        };
        Self {
            recipient: info.recipient,
            recipient_arn: info.recipient_arn,
            bounce_type,
            recipient_dsn_fields,
        }
    }
}
