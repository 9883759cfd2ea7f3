//! Builder for custom verification email templates.

use crate::builders::{required, BuilderError};
use crate::operations::CreateCustomVerificationEmailTemplateRequest;

/// Builder for constructing [`CreateCustomVerificationEmailTemplateRequest`].
///
/// # Examples
///
/// ```rust
/// use integrations_aws_ses_model::builders::CustomVerificationTemplateBuilder;
///
/// let request = CustomVerificationTemplateBuilder::new()
///     .name("welcome-verification")
///     .from("onboarding@example.com")
///     .subject("Please confirm your address")
///     .content("<p>Click the link below to confirm.</p>")
///     .success_redirect("https://example.com/verified")
///     .failure_redirect("https://example.com/verify-failed")
///     .build()?;
///
/// assert_eq!(request.template_name, "welcome-verification");
/// # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
/// ```
#[derive(Debug, Default)]
pub struct CustomVerificationTemplateBuilder {
    name: Option<String>,
    from: Option<String>,
    subject: Option<String>,
    content: Option<String>,
    success_redirect: Option<String>,
    failure_redirect: Option<String>,
}

impl CustomVerificationTemplateBuilder {
    /// Create a new template builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the template name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the address verification emails are sent from.
    pub fn from(mut self, email: impl Into<String>) -> Self {
        self.from = Some(email.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML content.
    pub fn content(mut self, html: impl Into<String>) -> Self {
        self.content = Some(html.into());
        self
    }

    /// Set where recipients land after verifying.
    pub fn success_redirect(mut self, url: impl Into<String>) -> Self {
        self.success_redirect = Some(url.into());
        self
    }

    /// Set where recipients land if verification fails.
    pub fn failure_redirect(mut self, url: impl Into<String>) -> Self {
        self.failure_redirect = Some(url.into());
        self
    }

    /// Build the [`CreateCustomVerificationEmailTemplateRequest`].
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingField`] if any field is not set
    /// - [`BuilderError::InvalidValue`] if any field is blank
    pub fn build(self) -> Result<CreateCustomVerificationEmailTemplateRequest, BuilderError> {
        Ok(CreateCustomVerificationEmailTemplateRequest {
            template_name: required("name", self.name)?,
            from_email_address: required("from", self.from)?,
            template_subject: required("subject", self.subject)?,
            template_content: required("content", self.content)?,
            success_redirection_url: required("success_redirect", self.success_redirect)?,
            failure_redirection_url: required("failure_redirect", self.failure_redirect)?,
        })
    }
}
