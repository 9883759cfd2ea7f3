//! Builder for `SendBounce` requests.

use crate::builders::{required, BuilderError};
use crate::operations::SendBounceRequest;
use crate::types::{BounceType, BouncedRecipientInfo, MessageDsn};

/// Builder for constructing [`SendBounceRequest`].
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_model::builders::SendBounceBuilder;
/// use integrations_aws_ses_model::types::{
///     BounceType, BouncedRecipientInfo, DsnAction, MessageDsn, RecipientDsnFields,
/// };
///
/// let request = SendBounceBuilder::new()
///     .original_message_id("00000138111222aa-33322211-cccc-cccc-cccc-ddddaaaa0680-000000")
///     .bounce_sender("mailer-daemon@example.com")
///     .explanation("Unknown mailbox")
///     .message_dsn(MessageDsn::new("dns; mta.example.com"))
///     .bounce("a@example.com", BounceType::DoesNotExist)
///     .add_recipient(BouncedRecipientInfo::new(
///         "b@example.com",
///         RecipientDsnFields::new(DsnAction::Failed, "5.1.1"),
///     ))
///     .build()?;
///
/// assert_eq!(request.bounced_recipient_info_list.len(), 2);
/// assert_eq!(request.bounce_types(), vec![BounceType::DoesNotExist]);
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct SendBounceBuilder {
    original_message_id: Option<String>,
    bounce_sender: Option<String>,
    bounce_sender_arn: Option<String>,
    explanation: Option<String>,
    message_dsn: Option<MessageDsn>,
    recipients: Vec<BouncedRecipientInfo>,
}

impl SendBounceBuilder {
    /// Create a new bounce builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message ID of the received message being bounced.
    pub fn original_message_id(mut self, id: impl Into<String>) -> Self {
        self.original_message_id = Some(id.into());
        self
    }

    /// Set the address the bounce is sent from.
    pub fn bounce_sender(mut self, email: impl Into<String>) -> Self {
        self.bounce_sender = Some(email.into());
        self
    }

    /// Set the sending-authorization ARN for the bounce sender.
    pub fn bounce_sender_arn(mut self, arn: impl Into<String>) -> Self {
        self.bounce_sender_arn = Some(arn.into());
        self
    }

    /// Set the human-readable explanation included in the bounce.
    pub fn explanation(mut self, text: impl Into<String>) -> Self {
        self.explanation = Some(text.into());
        self
    }

    /// Set the message-level DSN fields.
    pub fn message_dsn(mut self, dsn: MessageDsn) -> Self {
        self.message_dsn = Some(dsn);
        self
    }

    /// Add a bounced recipient.
    pub fn add_recipient(mut self, info: BouncedRecipientInfo) -> Self {
        self.recipients.push(info);
        self
    }

    /// Add a recipient bounced with the given type.
    pub fn bounce(self, recipient: impl Into<String>, bounce_type: BounceType) -> Self {
        self.add_recipient(BouncedRecipientInfo::new(recipient, bounce_type))
    }

    /// Build the [`SendBounceRequest`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `original_message_id` or `bounce_sender` is not set
    /// - [`BuilderError::MissingField`] if no recipients are added
    pub fn build(self) -> Result<SendBounceRequest, BuilderError> {
        let original_message_id = required("original_message_id", self.original_message_id)?;
        let bounce_sender = required("bounce_sender", self.bounce_sender)?;

        if self.recipients.is_empty() {
            return Err(BuilderError::missing_field("bounced_recipient_info_list"));
        }

        Ok(SendBounceRequest {
            original_message_id,
            bounce_sender,
            explanation: self.explanation,
            message_dsn: self.message_dsn,
            bounced_recipient_info_list: self.recipients,
            bounce_sender_arn: self.bounce_sender_arn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_order_preserved() {
        let request = SendBounceBuilder::new()
            .original_message_id("msg-1")
            .bounce_sender("mailer@example.com")
            .bounce("z@example.com", BounceType::ExceededQuota)
            .bounce("a@example.com", BounceType::DoesNotExist)
            .build()
            .unwrap();

        let recipients: Vec<&str> = request
            .bounced_recipient_info_list
            .iter()
            .map(|r| r.recipient.as_str())
            .collect();
        assert_eq!(recipients, vec!["z@example.com", "a@example.com"]);
        assert_eq!(
            request.bounce_types(),
            vec![BounceType::ExceededQuota, BounceType::DoesNotExist]
        );
    }

    #[test]
    fn test_optional_fields() {
        let request = SendBounceBuilder::new()
            .original_message_id("msg-1")
            .bounce_sender("mailer@example.com")
            .bounce_sender_arn("arn:aws:ses:us-east-1:123456789012:identity/example.com")
            .explanation("Gone")
            .bounce("a@example.com", BounceType::DoesNotExist)
            .build()
            .unwrap();

        assert_eq!(request.explanation.as_deref(), Some("Gone"));
        assert!(request.bounce_sender_arn.is_some());
        assert!(request.message_dsn.is_none());
    }

    #[test]
    fn test_missing_bounce_sender() {
        let result = SendBounceBuilder::new()
            .original_message_id("msg-1")
            .bounce("a@example.com", BounceType::DoesNotExist)
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("bounce_sender"));
    }

    #[test]
    fn test_missing_recipients() {
        let result = SendBounceBuilder::new()
            .original_message_id("msg-1")
            .bounce_sender("mailer@example.com")
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuilderError::missing_field("bounced_recipient_info_list")
        );
    }
}
