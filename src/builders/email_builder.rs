//! Email builder for constructing `SendEmail` requests.

use crate::builders::BuilderError;
use crate::operations::SendEmailRequest;
use crate::types::{Body, Content, Destination, Message, MessageTag};

/// Builder for constructing [`SendEmailRequest`] with a fluent API.
///
/// # Examples
///
/// ## Simple email with plain text and HTML
///
/// ```rust
/// use integrations_aws_ses_model::builders::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient@example.com")
///     .subject("Hello World")
///     .text("This is the plain text version")
///     .html("<p>This is the <strong>HTML</strong> version</p>")
///     .build()?;
///
/// assert_eq!(request.destination.to_addresses, vec!["recipient@example.com"]);
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
///
/// ## Email with CC, BCC, and reply-to
///
/// ```rust
/// use integrations_aws_ses_model::builders::EmailBuilder;
///
/// let request = EmailBuilder::new()
///     .from("sender@example.com")
///     .to("recipient1@example.com")
///     .to("recipient2@example.com")
///     .cc("cc@example.com")
///     .bcc("bcc@example.com")
///     .reply_to("replyto@example.com")
///     .subject("Meeting Invitation")
///     .html("<p>You're invited to our meeting</p>")
///     .build()?;
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    destination: Destination,
    subject: Option<String>,
    charset: Option<String>,
    text_body: Option<String>,
    html_body: Option<String>,
    reply_to: Vec<String>,
    return_path: Option<String>,
    source_arn: Option<String>,
    configuration_set: Option<String>,
    tags: Vec<MessageTag>,
}

impl EmailBuilder {
    /// Create a new email builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sender address.
    ///
    /// This is a required field. The address must be a verified identity,
    /// or be authorized through [`source_arn`](Self::source_arn).
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Add a "To" recipient.
    ///
    /// Can be called multiple times; recipients keep the order they were added in.
    pub fn to(mut self, email: impl Into<String>) -> Self {
        self.destination = self.destination.add_to(email);
        self
    }

    /// Add a "CC" recipient.
    pub fn cc(mut self, email: impl Into<String>) -> Self {
        self.destination = self.destination.add_cc(email);
        self
    }

    /// Add a "BCC" recipient.
    pub fn bcc(mut self, email: impl Into<String>) -> Self {
        self.destination = self.destination.add_bcc(email);
        self
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, email: impl Into<String>) -> Self {
        self.reply_to.push(email.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, text: impl Into<String>) -> Self {
        self.subject = Some(text.into());
        self
    }

    /// Set the character set used for the subject and both bodies.
    ///
    /// Defaults to UTF-8.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the plain text body.
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text_body = Some(body.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html_body = Some(body.into());
        self
    }

    /// Set the address bounces and complaints are returned to.
    pub fn return_path(mut self, email: impl Into<String>) -> Self {
        self.return_path = Some(email.into());
        self
    }

    /// Send on behalf of the identity with this sending-authorization ARN.
    pub fn source_arn(mut self, arn: impl Into<String>) -> Self {
        self.source_arn = Some(arn.into());
        self
    }

    /// Send through the named configuration set.
    pub fn configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Add a message tag, used by event publishing.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(MessageTag::new(name, value));
        self
    }

    /// Build the [`SendEmailRequest`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if `from` is not set
    /// - [`BuilderError::MissingField`] if no recipients are specified
    /// - [`BuilderError::MissingField`] if `subject` is not set
    /// - [`BuilderError::MissingField`] if neither `text` nor `html` is set
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        let source = self
            .from
            .ok_or_else(|| BuilderError::missing_field("from"))?;

        if self.destination.is_empty() {
            return Err(BuilderError::missing_field("recipients"));
        }

        let subject = self
            .subject
            .ok_or_else(|| BuilderError::missing_field("subject"))?;

        let charset = self.charset.as_deref();
        let body = Body {
            text: self.text_body.map(|data| content(charset, data)),
            html: self.html_body.map(|data| content(charset, data)),
        };
        if body.text.is_none() && body.html.is_none() {
            return Err(BuilderError::missing_field("body (text or html)"));
        }

        let message = Message {
            subject: content(charset, subject),
            body,
        };

        Ok(SendEmailRequest {
            source,
            destination: self.destination,
            message,
            reply_to_addresses: self.reply_to,
            return_path: self.return_path,
            source_arn: self.source_arn,
            return_path_arn: None,
            tags: self.tags,
            configuration_set_name: self.configuration_set,
        })
    }
}

fn content(charset: Option<&str>, data: String) -> Content {
    match charset {
        Some(charset) => Content::with_charset(data, charset),
        None => Content::new(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> EmailBuilder {
        EmailBuilder::new()
            .from("sender@example.com")
            .to("recipient@example.com")
            .subject("Test Email")
    }

    #[test]
    fn test_basic_email() {
        let request = minimal().text("This is a test email").build().unwrap();

        assert_eq!(request.source, "sender@example.com");
        assert_eq!(request.destination.recipient_count(), 1);
        assert_eq!(request.message.subject.data, "Test Email");
        assert!(request.message.body.text.is_some());
        assert!(request.message.body.html.is_none());
    }

    #[test]
    fn test_multipart_email() {
        let request = minimal()
            .text("Plain")
            .html("<p>HTML</p>")
            .build()
            .unwrap();

        assert_eq!(request.message.body.text.unwrap().data, "Plain");
        assert_eq!(request.message.body.html.unwrap().data, "<p>HTML</p>");
    }

    #[test]
    fn test_recipient_order_preserved() {
        let request = minimal()
            .to("b@example.com")
            .to("a@example.com")
            .cc("cc@example.com")
            .bcc("bcc@example.com")
            .text("Body")
            .build()
            .unwrap();

        assert_eq!(
            request.destination.to_addresses,
            vec!["recipient@example.com", "b@example.com", "a@example.com"]
        );
        assert_eq!(request.destination.recipient_count(), 5);
    }

    #[test]
    fn test_charset_applies_to_all_parts() {
        let request = minimal()
            .charset("ISO-8859-1")
            .text("Body")
            .build()
            .unwrap();

        assert_eq!(request.message.subject.charset.as_deref(), Some("ISO-8859-1"));
        assert_eq!(
            request.message.body.text.unwrap().charset.as_deref(),
            Some("ISO-8859-1")
        );
    }

    #[test]
    fn test_optional_fields() {
        let request = minimal()
            .text("Body")
            .reply_to("reply@example.com")
            .return_path("bounces@example.com")
            .configuration_set("marketing")
            .tag("campaign", "spring")
            .build()
            .unwrap();

        assert_eq!(request.reply_to_addresses, vec!["reply@example.com"]);
        assert_eq!(request.return_path.as_deref(), Some("bounces@example.com"));
        assert_eq!(request.configuration_set_name.as_deref(), Some("marketing"));
        assert_eq!(request.tags, vec![MessageTag::new("campaign", "spring")]);
    }

    #[test]
    fn test_missing_from() {
        let result = EmailBuilder::new()
            .to("recipient@example.com")
            .subject("Test")
            .text("Body")
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("from"));
    }

    #[test]
    fn test_missing_recipients() {
        let result = EmailBuilder::new()
            .from("sender@example.com")
            .subject("Test")
            .text("Body")
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("recipients"));
    }

    #[test]
    fn test_missing_subject() {
        let result = EmailBuilder::new()
            .from("sender@example.com")
            .to("recipient@example.com")
            .text("Body")
            .build();

        assert_eq!(result.unwrap_err(), BuilderError::missing_field("subject"));
    }

    #[test]
    fn test_missing_body() {
        let result = minimal().build();

        assert_eq!(
            result.unwrap_err(),
            BuilderError::missing_field("body (text or html)")
        );
    }
}
