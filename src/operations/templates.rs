//! Custom verification email template actions.

use super::EmptyResult;
use crate::types::CustomVerificationEmailTemplate;
use crate::validation::{Validate, Validator};
use serde::{Deserialize, Serialize};

/// Upper bound on template content size accepted by SES.
pub const MAX_TEMPLATE_CONTENT_BYTES: usize = 10 * 1024 * 1024;

fn check_redirect(v: &mut Validator<'_>, field: &str, url: &str) {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        v.push(field, format!("'{}' is not an http(s) URL", url));
    }
}

fn check_content(v: &mut Validator<'_>, content: &str) {
    v.require("template_content", content);
    if content.len() > MAX_TEMPLATE_CONTENT_BYTES {
        v.push("template_content", "exceeds 10 MB");
    }
}

/// Create a custom verification email template.
///
/// Use [`CustomVerificationTemplateBuilder`](crate::builders::CustomVerificationTemplateBuilder)
/// to assemble one with required fields checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomVerificationEmailTemplateRequest {
    /// Template name.
    pub template_name: String,
    /// Sender of the verification email; must be verified.
    pub from_email_address: String,
    /// Subject line.
    pub template_subject: String,
    /// HTML body.
    pub template_content: String,
    /// Redirect after successful verification.
    #[serde(rename = "SuccessRedirectionURL")]
    pub success_redirection_url: String,
    /// Redirect after failed verification.
    #[serde(rename = "FailureRedirectionURL")]
    pub failure_redirection_url: String,
}

impl Validate for CreateCustomVerificationEmailTemplateRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.resource_name("template_name", &self.template_name);
        v.email_address("from_email_address", &self.from_email_address);
        v.require("template_subject", &self.template_subject);
        check_content(v, &self.template_content);
        check_redirect(v, "success_redirection_url", &self.success_redirection_url);
        check_redirect(v, "failure_redirection_url", &self.failure_redirection_url);
    }
}

/// Update some fields of a custom verification email template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCustomVerificationEmailTemplateRequest {
    /// Template name.
    pub template_name: String,
    /// New sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email_address: Option<String>,
    /// New subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_subject: Option<String>,
    /// New HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_content: Option<String>,
    /// New success redirect.
    #[serde(
        rename = "SuccessRedirectionURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub success_redirection_url: Option<String>,
    /// New failure redirect.
    #[serde(
        rename = "FailureRedirectionURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub failure_redirection_url: Option<String>,
}

impl UpdateCustomVerificationEmailTemplateRequest {
    /// Create an update that changes nothing yet.
    pub fn new(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            ..Default::default()
        }
    }

    /// Returns true if no field would change.
    pub fn is_noop(&self) -> bool {
        self.from_email_address.is_none()
            && self.template_subject.is_none()
            && self.template_content.is_none()
            && self.success_redirection_url.is_none()
            && self.failure_redirection_url.is_none()
    }
}

impl Validate for UpdateCustomVerificationEmailTemplateRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("template_name", &self.template_name);
        if let Some(address) = &self.from_email_address {
            v.email_address("from_email_address", address);
        }
        v.require_if_set("template_subject", self.template_subject.as_deref());
        if let Some(content) = &self.template_content {
            check_content(v, content);
        }
        if let Some(url) = &self.success_redirection_url {
            check_redirect(v, "success_redirection_url", url);
        }
        if let Some(url) = &self.failure_redirection_url {
            check_redirect(v, "failure_redirection_url", url);
        }
    }
}

/// Read a custom verification email template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCustomVerificationEmailTemplateRequest {
    /// Template name.
    pub template_name: String,
}

impl Validate for GetCustomVerificationEmailTemplateRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("template_name", &self.template_name);
    }
}

/// Result of `GetCustomVerificationEmailTemplate`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetCustomVerificationEmailTemplateResult {
    /// Template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    /// Sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_email_address: Option<String>,
    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_subject: Option<String>,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_content: Option<String>,
    /// Success redirect.
    #[serde(
        rename = "SuccessRedirectionURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub success_redirection_url: Option<String>,
    /// Failure redirect.
    #[serde(
        rename = "FailureRedirectionURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub failure_redirection_url: Option<String>,
}

/// Delete a custom verification email template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCustomVerificationEmailTemplateRequest {
    /// Template name.
    pub template_name: String,
}

impl Validate for DeleteCustomVerificationEmailTemplateRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("template_name", &self.template_name);
    }
}

/// List custom verification email templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCustomVerificationEmailTemplatesRequest {
    /// Pagination token from a previous call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, 1 to 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

impl Validate for ListCustomVerificationEmailTemplatesRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        if let Some(max) = self.max_results {
            if !(1..=50).contains(&max) {
                v.push("max_results", format!("{} is outside 1..=50", max));
            }
        }
    }
}

/// Result of `ListCustomVerificationEmailTemplates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCustomVerificationEmailTemplatesResult {
    /// Templates on this page.
    #[serde(default)]
    pub custom_verification_email_templates: Vec<CustomVerificationEmailTemplate>,
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

ses_operation! {
    CreateCustomVerificationEmailTemplateRequest => "CreateCustomVerificationEmailTemplate", EmptyResult;
    UpdateCustomVerificationEmailTemplateRequest => "UpdateCustomVerificationEmailTemplate", EmptyResult;
    GetCustomVerificationEmailTemplateRequest => "GetCustomVerificationEmailTemplate", GetCustomVerificationEmailTemplateResult;
    DeleteCustomVerificationEmailTemplateRequest => "DeleteCustomVerificationEmailTemplate", EmptyResult;
    ListCustomVerificationEmailTemplatesRequest => "ListCustomVerificationEmailTemplates", ListCustomVerificationEmailTemplatesResult;
}
