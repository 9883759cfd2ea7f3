//! Builders for constructing SES requests.
//!
//! The request types in [`operations`](crate::operations) are plain structs
//! and can be built directly. The builders here cover the requests with the
//! most optional parts and check required fields at `build()` time, before
//! any service constraint validation runs.
//!
//! # Builders
//!
//! - [`EmailBuilder`] - For `SendEmail` requests
//! - [`BulkTemplatedEmailBuilder`] - For `SendBulkTemplatedEmail` requests
//! - [`CustomVerificationTemplateBuilder`] - For custom verification email templates
//! - [`SendBounceBuilder`] - For `SendBounce` requests
//! - [`ReceiptRuleBuilder`] - For receipt rules
//!
//! # Examples
//!
//! ## Sending a simple email
//!
//! ```rust
//! use integrations_aws_ses_model::builders::EmailBuilder;
//!
//! let request = EmailBuilder::new()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Hello World")
//!     .text("This is a plain text email")
//!     .html("<p>This is an HTML email</p>")
//!     .build()?;
//! # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
//! ```
//!
//! ## Bouncing a received message
//!
//! ```rust
//! use integrations_aws_ses_model::builders::SendBounceBuilder;
//! use integrations_aws_ses_model::types::{BounceType, BouncedRecipientInfo};
//!
//! let request = SendBounceBuilder::new()
//!     .original_message_id("00000138111222aa-33322211-cccc-cccc-cccc-ddddaaaa0680-000000")
//!     .bounce_sender("mailer-daemon@example.com")
//!     .add_recipient(BouncedRecipientInfo::new("a@example.com", BounceType::DoesNotExist))
//!     .build()?;
//! # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
//! ```
//!
//! ## Building a receipt rule
//!
//! ```rust
//! use integrations_aws_ses_model::builders::ReceiptRuleBuilder;
//! use integrations_aws_ses_model::types::{ReceiptAction, TlsPolicy};
//!
//! let rule = ReceiptRuleBuilder::new()
//!     .name("store-and-stop")
//!     .recipient("support@example.com")
//!     .tls_policy(TlsPolicy::Require)
//!     .action(ReceiptAction::s3("inbound-mail"))
//!     .action(ReceiptAction::stop())
//!     .build()?;
//! # Ok::<(), integrations_aws_ses_model::builders::BuilderError>(())
//! ```

mod bounce_builder;
mod bulk_builder;
mod email_builder;
mod receipt_rule_builder;
mod template_builder;

pub use bounce_builder::SendBounceBuilder;
pub use bulk_builder::BulkTemplatedEmailBuilder;
pub use email_builder::EmailBuilder;
pub use receipt_rule_builder::ReceiptRuleBuilder;
pub use template_builder::CustomVerificationTemplateBuilder;

use thiserror::Error;

/// Error type for builder operations.
///
/// This error is returned when a builder's `build()` method is called
/// but the builder is in an invalid state (e.g., missing required fields
/// or invalid field values).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// A required field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A field has an invalid value.
    #[error("Invalid value for field '{field}': {message}")]
    InvalidValue {
        /// The name of the field with the invalid value.
        field: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl BuilderError {
    /// Create a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Take a required string, rejecting unset or blank values.
fn required(field: &str, value: Option<String>) -> Result<String, BuilderError> {
    let value = value.ok_or_else(|| BuilderError::missing_field(field))?;
    if value.trim().is_empty() {
        return Err(BuilderError::invalid_value(field, "cannot be empty"));
    }
    Ok(value)
}
