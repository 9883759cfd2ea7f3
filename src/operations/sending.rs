//! Sending actions: formatted, raw, templated and bulk email, bounces,
//! verification emails, and the sending quota and statistics queries.

use crate::types::{
    BounceType, BouncedRecipientInfo, BulkEmailDestination, BulkEmailDestinationStatus,
    Destination, Message, MessageDsn, MessageTag, RawMessage, SendDataPoint,
};
use crate::validation::{Validate, Validator};
use serde::{Deserialize, Serialize};

fn check_sender(v: &mut Validator<'_>, reply_to: &[String], configuration_set: Option<&str>) {
    for (index, address) in reply_to.iter().enumerate() {
        v.email_address(&format!("reply_to_addresses[{}]", index), address);
    }
    if let Some(name) = configuration_set {
        v.resource_name("configuration_set_name", name);
    }
}

/// Send a formatted email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailRequest {
    /// Sender address; may include a display name.
    pub source: String,
    /// Recipients.
    pub destination: Destination,
    /// Subject and body.
    pub message: Message,
    /// Reply-to addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to_addresses: Vec<String>,
    /// Address that receives bounces and complaints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
    /// Sending-authorization ARN for `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// Sending-authorization ARN for `return_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path_arn: Option<String>,
    /// Message tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<MessageTag>,
    /// Configuration set to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
}

impl Validate for SendEmailRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("source", &self.source);
        v.check("destination", &self.destination);
        v.check("message", &self.message);
        check_sender(v, &self.reply_to_addresses, self.configuration_set_name.as_deref());
        v.check_each("tags", &self.tags);
    }
}

/// Result of `SendEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailResult {
    /// Message ID assigned by SES.
    pub message_id: String,
}

/// Send a raw MIME message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendRawEmailRequest {
    /// Sender; if absent the `From` header of the message is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Envelope recipients; if empty the message headers are used.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub destinations: Vec<String>,
    /// The MIME message.
    pub raw_message: RawMessage,
    /// Sending-authorization ARN for the `From` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_arn: Option<String>,
    /// Sending-authorization ARN for `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// Sending-authorization ARN for the `Return-Path` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path_arn: Option<String>,
    /// Message tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<MessageTag>,
    /// Configuration set to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
}

impl SendRawEmailRequest {
    /// Create a request for a raw message.
    pub fn new(raw_message: RawMessage) -> Self {
        Self {
            source: None,
            destinations: Vec::new(),
            raw_message,
            from_arn: None,
            source_arn: None,
            return_path_arn: None,
            tags: Vec::new(),
            configuration_set_name: None,
        }
    }
}

impl Validate for SendRawEmailRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        if let Some(source) = &self.source {
            v.email_address("source", source);
        }
        let max = v.config().max_recipients;
        v.limit("destinations", &self.destinations, max);
        for (index, address) in self.destinations.iter().enumerate() {
            v.email_address(&format!("destinations[{}]", index), address);
        }
        v.check("raw_message", &self.raw_message);
        check_sender(v, &[], self.configuration_set_name.as_deref());
        v.check_each("tags", &self.tags);
    }
}

/// Result of `SendRawEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendRawEmailResult {
    /// Message ID assigned by SES.
    pub message_id: String,
}

/// Send an email rendered from a stored template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendTemplatedEmailRequest {
    /// Sender address.
    pub source: String,
    /// Recipients.
    pub destination: Destination,
    /// Reply-to addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to_addresses: Vec<String>,
    /// Address that receives bounces and complaints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
    /// Sending-authorization ARN for `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// Sending-authorization ARN for `return_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path_arn: Option<String>,
    /// Message tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<MessageTag>,
    /// Configuration set to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
    /// Template name.
    pub template: String,
    /// Template ARN, when sending on behalf of another account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_arn: Option<String>,
    /// Replacement values as a JSON object.
    pub template_data: String,
}

impl Validate for SendTemplatedEmailRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("source", &self.source);
        v.check("destination", &self.destination);
        check_sender(v, &self.reply_to_addresses, self.configuration_set_name.as_deref());
        v.check_each("tags", &self.tags);
        v.require("template", &self.template);
        v.json_document("template_data", &self.template_data);
    }
}

/// Result of `SendTemplatedEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendTemplatedEmailResult {
    /// Message ID assigned by SES.
    pub message_id: String,
}

/// Send a template to many destinations in one call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendBulkTemplatedEmailRequest {
    /// Sender address.
    pub source: String,
    /// Sending-authorization ARN for `source`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// Reply-to addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reply_to_addresses: Vec<String>,
    /// Address that receives bounces and complaints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path: Option<String>,
    /// Sending-authorization ARN for `return_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_path_arn: Option<String>,
    /// Configuration set to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
    /// Tags applied to destinations without their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_tags: Vec<MessageTag>,
    /// Template name.
    pub template: String,
    /// Template ARN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_arn: Option<String>,
    /// Replacement values for destinations without their own.
    pub default_template_data: String,
    /// Destinations, in order; results come back in the same order.
    pub destinations: Vec<BulkEmailDestination>,
}

impl Validate for SendBulkTemplatedEmailRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("source", &self.source);
        check_sender(v, &self.reply_to_addresses, self.configuration_set_name.as_deref());
        v.check_each("default_tags", &self.default_tags);
        v.require("template", &self.template);
        v.json_document("default_template_data", &self.default_template_data);
        v.require_non_empty("destinations", &self.destinations);
        let max = v.config().max_bulk_destinations;
        v.limit("destinations", &self.destinations, max);
        v.check_each("destinations", &self.destinations);
    }
}

/// Result of `SendBulkTemplatedEmail`: one status per destination, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendBulkTemplatedEmailResult {
    /// Per-destination outcomes.
    #[serde(default)]
    pub status: Vec<BulkEmailDestinationStatus>,
}

impl SendBulkTemplatedEmailResult {
    /// Number of destinations that were sent.
    pub fn success_count(&self) -> usize {
        self.status.iter().filter(|s| s.is_success()).count()
    }
}

/// Generate a bounce for a message received through SES.
///
/// Use [`SendBounceBuilder`](crate::builders::SendBounceBuilder) to assemble
/// one with its required fields checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendBounceRequest {
    /// ID of the message being bounced.
    pub original_message_id: String,
    /// Address the bounce is sent from.
    pub bounce_sender: String,
    /// Human-readable explanation included in the bounce.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// Message-level DSN fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_dsn: Option<MessageDsn>,
    /// Recipients being bounced, in order.
    pub bounced_recipient_info_list: Vec<BouncedRecipientInfo>,
    /// Sending-authorization ARN for `bounce_sender`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_sender_arn: Option<String>,
}

impl SendBounceRequest {
    /// Create a bounce request with the required fields.
    pub fn new(
        original_message_id: impl Into<String>,
        bounce_sender: impl Into<String>,
        bounced_recipient_info_list: Vec<BouncedRecipientInfo>,
    ) -> Self {
        Self {
            original_message_id: original_message_id.into(),
            bounce_sender: bounce_sender.into(),
            explanation: None,
            message_dsn: None,
            bounced_recipient_info_list,
            bounce_sender_arn: None,
        }
    }

    /// Returns the bounce types of recipients that use one, in order.
    pub fn bounce_types(&self) -> Vec<BounceType> {
        self.bounced_recipient_info_list
            .iter()
            .filter_map(BouncedRecipientInfo::bounce_type)
            .collect()
    }
}

impl Validate for SendBounceRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("original_message_id", &self.original_message_id);
        v.email_address("bounce_sender", &self.bounce_sender);
        v.require_if_set("bounce_sender_arn", self.bounce_sender_arn.as_deref());
        v.require_non_empty("bounced_recipient_info_list", &self.bounced_recipient_info_list);
        v.check_each("bounced_recipient_info_list", &self.bounced_recipient_info_list);
        v.check_opt("message_dsn", self.message_dsn.as_ref());
    }
}

/// Result of `SendBounce`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendBounceResult {
    /// Message ID of the bounce.
    pub message_id: String,
}

/// Send a verification email using a custom verification template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendCustomVerificationEmailRequest {
    /// Address to verify.
    pub email_address: String,
    /// Custom verification template.
    pub template_name: String,
    /// Configuration set to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set_name: Option<String>,
}

impl Validate for SendCustomVerificationEmailRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("email_address", &self.email_address);
        v.require("template_name", &self.template_name);
        check_sender(v, &[], self.configuration_set_name.as_deref());
    }
}

/// Result of `SendCustomVerificationEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendCustomVerificationEmailResult {
    /// Message ID of the verification email.
    pub message_id: String,
}

/// Read the account's sending limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetSendQuotaRequest {}

impl Validate for GetSendQuotaRequest {}

/// Result of `GetSendQuota`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSendQuotaResult {
    /// Messages allowed per 24 hours; `-1` means unlimited.
    #[serde(rename = "Max24HourSend", default)]
    pub max_24_hour_send: f64,
    /// Messages allowed per second.
    #[serde(default)]
    pub max_send_rate: f64,
    /// Messages sent in the last 24 hours.
    #[serde(default)]
    pub sent_last_24_hours: f64,
}

impl GetSendQuotaResult {
    /// Messages that can still be sent in the current 24-hour window.
    pub fn remaining(&self) -> Option<f64> {
        if self.max_24_hour_send < 0.0 {
            None
        } else {
            Some((self.max_24_hour_send - self.sent_last_24_hours).max(0.0))
        }
    }
}

/// Read sending statistics for the last two weeks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GetSendStatisticsRequest {}

impl Validate for GetSendStatisticsRequest {}

/// Result of `GetSendStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetSendStatisticsResult {
    /// Data points, one per 15-minute interval.
    #[serde(default)]
    pub send_data_points: Vec<SendDataPoint>,
}

ses_operation! {
    SendEmailRequest => "SendEmail", SendEmailResult;
    SendRawEmailRequest => "SendRawEmail", SendRawEmailResult;
    SendTemplatedEmailRequest => "SendTemplatedEmail", SendTemplatedEmailResult;
    SendBulkTemplatedEmailRequest => "SendBulkTemplatedEmail", SendBulkTemplatedEmailResult;
    SendBounceRequest => "SendBounce", SendBounceResult;
    SendCustomVerificationEmailRequest => "SendCustomVerificationEmail", SendCustomVerificationEmailResult;
    GetSendQuotaRequest => "GetSendQuota", GetSendQuotaResult;
    GetSendStatisticsRequest => "GetSendStatistics", GetSendStatisticsResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::types::{Body, DsnAction, RecipientDsnFields};
    use crate::validation::violations;

    fn send_email() -> SendEmailRequest {
        SendEmailRequest {
            source: "Sender <sender@example.com>".to_string(),
            destination: Destination::new().add_to("to@example.com"),
            message: Message::new("Hello", Body::text("Hi there")),
            reply_to_addresses: Vec::new(),
            return_path: None,
            source_arn: None,
            return_path_arn: None,
            tags: vec![MessageTag::new("campaign", "launch")],
            configuration_set_name: Some("marketing".to_string()),
        }
    }

    #[test]
    fn test_send_email_wire_layout() {
        let json = serde_json::to_value(send_email()).unwrap();

        assert_eq!(json["Source"], "Sender <sender@example.com>");
        assert_eq!(json["Destination"]["ToAddresses"][0], "to@example.com");
        assert_eq!(json["Message"]["Subject"]["Data"], "Hello");
        assert_eq!(json["Message"]["Body"]["Text"]["Data"], "Hi there");
        assert_eq!(json["Tags"][0]["Name"], "campaign");
        assert!(json.get("ReplyToAddresses").is_none());
    }

    #[test]
    fn test_send_email_valid() {
        assert!(violations(&send_email(), &ModelConfig::default()).is_empty());
    }

    #[test]
    fn test_send_email_bad_configuration_set() {
        let mut request = send_email();
        request.configuration_set_name = Some("has space".to_string());
        let found = violations(&request, &ModelConfig::default());
        assert_eq!(found[0].field, "configuration_set_name");
    }

    #[test]
    fn test_raw_email_destination_limit() {
        let config = ModelConfig::builder().max_recipients(1).build().unwrap();
        let mut request = SendRawEmailRequest::new(RawMessage::from_mime("Subject: x\r\n\r\ny"));
        request.destinations = vec!["a@example.com".into(), "b@example.com".into()];

        let found = violations(&request, &config);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "destinations");
    }

    #[test]
    fn test_templated_email_requires_json() {
        let request = SendTemplatedEmailRequest {
            source: "sender@example.com".to_string(),
            destination: Destination::new().add_to("to@example.com"),
            reply_to_addresses: Vec::new(),
            return_path: None,
            source_arn: None,
            return_path_arn: None,
            tags: Vec::new(),
            configuration_set_name: None,
            template: "welcome".to_string(),
            template_arn: None,
            template_data: "name=Ana".to_string(),
        };
        let found = violations(&request, &ModelConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "template_data");
    }

    #[test]
    fn test_send_bounce_field_paths() {
        let request = SendBounceRequest::new(
            "msg-1",
            "mailer@example.com",
            vec![
                BouncedRecipientInfo::new("a@example.com", BounceType::DoesNotExist),
                BouncedRecipientInfo::new(
                    "b@example.com",
                    RecipientDsnFields::new(DsnAction::Failed, "5.1"),
                ),
            ],
        );
        let found = violations(&request, &ModelConfig::default());

        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].field,
            "bounced_recipient_info_list[1].recipient_dsn_fields.status"
        );
    }

    #[test]
    fn test_send_bounce_types() {
        let request = SendBounceRequest::new(
            "msg-1",
            "mailer@example.com",
            vec![
                BouncedRecipientInfo::new("a@example.com", BounceType::DoesNotExist),
                BouncedRecipientInfo::new(
                    "b@example.com",
                    RecipientDsnFields::new(DsnAction::Failed, "5.1.1"),
                ),
                BouncedRecipientInfo::new("c@example.com", BounceType::ExceededQuota),
            ],
        );
        assert_eq!(
            request.bounce_types(),
            vec![BounceType::DoesNotExist, BounceType::ExceededQuota]
        );
    }

    #[test]
    fn test_send_quota_wire_names() {
        let result: GetSendQuotaResult = serde_json::from_str(
            r#"{"Max24HourSend": 200.0, "MaxSendRate": 1.0, "SentLast24Hours": 50.0}"#,
        )
        .unwrap();

        assert_eq!(result.max_24_hour_send, 200.0);
        assert_eq!(result.remaining(), Some(150.0));
    }

    #[test]
    fn test_bulk_result_success_count() {
        let result: SendBulkTemplatedEmailResult = serde_json::from_str(
            r#"{"Status": [
                {"Status": "Success", "MessageId": "m-1"},
                {"Status": "MessageRejected", "Error": "Address blacklisted."},
                {"Status": "Success", "MessageId": "m-2"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(result.success_count(), 2);
        assert_eq!(result.status[1].error.as_deref(), Some("Address blacklisted."));
    }
}
