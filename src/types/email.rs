//! Email message types for the classic SES API.

use super::BulkEmailStatus;
use crate::validation::{is_email_address, Validate, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Email destination (recipients).
///
/// Address lists keep insertion order and duplicates; SES delivers to each
/// entry as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// "To" recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_addresses: Vec<String>,
    /// "CC" recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cc_addresses: Vec<String>,
    /// "BCC" recipients.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bcc_addresses: Vec<String>,
}

impl Destination {
    /// Create a new destination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a "To" recipient.
    pub fn add_to(mut self, email: impl Into<String>) -> Self {
        self.to_addresses.push(email.into());
        self
    }

    /// Replace the "To" recipients.
    pub fn with_to(mut self, addresses: Vec<String>) -> Self {
        self.to_addresses = addresses;
        self
    }

    /// Add a "CC" recipient.
    pub fn add_cc(mut self, email: impl Into<String>) -> Self {
        self.cc_addresses.push(email.into());
        self
    }

    /// Replace the "CC" recipients.
    pub fn with_cc(mut self, addresses: Vec<String>) -> Self {
        self.cc_addresses = addresses;
        self
    }

    /// Add a "BCC" recipient.
    pub fn add_bcc(mut self, email: impl Into<String>) -> Self {
        self.bcc_addresses.push(email.into());
        self
    }

    /// Replace the "BCC" recipients.
    pub fn with_bcc(mut self, addresses: Vec<String>) -> Self {
        self.bcc_addresses = addresses;
        self
    }

    /// Get total number of recipients.
    pub fn recipient_count(&self) -> usize {
        self.to_addresses.len() + self.cc_addresses.len() + self.bcc_addresses.len()
    }

    /// Returns true if there are no recipients at all.
    pub fn is_empty(&self) -> bool {
        self.recipient_count() == 0
    }
}

impl Validate for Destination {
    fn validate(&self, v: &mut Validator<'_>) {
        if self.is_empty() {
            v.push("", "must have at least one recipient");
        }
        let max = v.config().max_recipients;
        if self.recipient_count() > max {
            v.push(
                "",
                format!("has {} recipients, at most {} allowed", self.recipient_count(), max),
            );
        }
        for (field, list) in [
            ("to_addresses", &self.to_addresses),
            ("cc_addresses", &self.cc_addresses),
            ("bcc_addresses", &self.bcc_addresses),
        ] {
            for (index, address) in list.iter().enumerate() {
                if !is_email_address(address) {
                    v.push(
                        &format!("{}[{}]", field, index),
                        format!("'{}' is not an email address", address),
                    );
                }
            }
        }
    }
}

/// Text with an optional character set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// Content data.
    pub data: String,
    /// Character set (defaults to UTF-8).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Content {
    /// Create new content with UTF-8 charset.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: Some("UTF-8".to_string()),
        }
    }

    /// Create content with custom charset.
    pub fn with_charset(data: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: Some(charset.into()),
        }
    }
}

/// Message body: text, HTML or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    /// Plain text part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Content>,
    /// HTML part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<Content>,
}

impl Body {
    /// A text-only body.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Content::new(text)),
            html: None,
        }
    }

    /// An HTML-only body.
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            text: None,
            html: Some(Content::new(html)),
        }
    }

    /// Set plain text part.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(Content::new(text));
        self
    }

    /// Set HTML part.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(Content::new(html));
        self
    }
}

impl Validate for Body {
    fn validate(&self, v: &mut Validator<'_>) {
        if self.text.is_none() && self.html.is_none() {
            v.push("", "must have a text or HTML part");
        }
    }
}

/// A formatted message: subject and body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    /// Subject line.
    pub subject: Content,
    /// Body.
    pub body: Body,
}

impl Message {
    /// Create a message.
    pub fn new(subject: impl Into<String>, body: Body) -> Self {
        Self {
            subject: Content::new(subject),
            body,
        }
    }
}

impl Validate for Message {
    fn validate(&self, v: &mut Validator<'_>) {
        if self.subject.data.contains(|c: char| c == '\r' || c == '\n') {
            v.push("subject", "must not contain line breaks");
        }
        v.check("body", &self.body);
    }
}

/// Raw MIME message. `Data` is base64 on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMessage {
    /// Raw MIME bytes, headers included.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl RawMessage {
    /// Create a new raw message.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create from a MIME string.
    pub fn from_mime(mime: impl Into<String>) -> Self {
        Self {
            data: mime.into().into_bytes(),
        }
    }
}

impl Validate for RawMessage {
    fn validate(&self, v: &mut Validator<'_>) {
        if self.data.is_empty() {
            v.push("data", "must not be empty");
        }
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// Message tag for categorization and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageTag {
    /// Tag name.
    pub name: String,
    /// Tag value.
    pub value: String,
}

impl MessageTag {
    /// Create a new message tag.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

fn is_tag_text(s: &str) -> bool {
    !s.is_empty()
        && s.len() < 256
        && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

impl Validate for MessageTag {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_tag_text(&self.name) {
            v.push("name", format!("'{}' is not a valid tag name", self.name));
        }
        if !is_tag_text(&self.value) {
            v.push("value", format!("'{}' is not a valid tag value", self.value));
        }
    }
}

/// One destination of a bulk templated send.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkEmailDestination {
    /// Recipients for this destination.
    pub destination: Destination,
    /// Tags that replace the default tags for this destination.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replacement_tags: Vec<MessageTag>,
    /// Template data (JSON) for this destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_template_data: Option<String>,
}

impl BulkEmailDestination {
    /// Create a new bulk destination.
    pub fn new(destination: Destination) -> Self {
        Self {
            destination,
            replacement_tags: Vec::new(),
            replacement_template_data: None,
        }
    }

    /// Set replacement template data.
    pub fn with_template_data(mut self, data: serde_json::Value) -> Self {
        self.replacement_template_data = Some(data.to_string());
        self
    }

    /// Add a replacement tag.
    pub fn add_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.replacement_tags.push(MessageTag::new(name, value));
        self
    }
}

impl Validate for BulkEmailDestination {
    fn validate(&self, v: &mut Validator<'_>) {
        v.check("destination", &self.destination);
        v.check_each("replacement_tags", &self.replacement_tags);
        if let Some(data) = &self.replacement_template_data {
            if serde_json::from_str::<serde_json::Value>(data).is_err() {
                v.push("replacement_template_data", "must be a JSON document");
            }
        }
    }
}

/// Outcome of one destination in a bulk send, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BulkEmailDestinationStatus {
    /// Status of the send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BulkEmailStatus>,
    /// Error text when the send failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Message ID when the send succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl BulkEmailDestinationStatus {
    /// Returns true if this destination was sent.
    pub fn is_success(&self) -> bool {
        self.status.map_or(false, |s| s.is_success())
    }
}

/// Sending activity over one 15-minute interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendDataPoint {
    /// Start of the interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Messages attempted.
    #[serde(default)]
    pub delivery_attempts: i64,
    /// Messages that bounced.
    #[serde(default)]
    pub bounces: i64,
    /// Complaints received.
    #[serde(default)]
    pub complaints: i64,
    /// Messages rejected by SES.
    #[serde(default)]
    pub rejects: i64,
}
