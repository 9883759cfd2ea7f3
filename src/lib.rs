//! Typed model of the Amazon SES (classic, `2010-12-01`) API.
//!
//! Strongly-typed requests, results and data types for the SES actions,
//! with the invariants the service enforces expressed in the types or
//! checked locally before a payload leaves the process.
//!
//! # Features
//!
//! - **Receipt Rules**: Rule sets, rules, IP filters and the seven receipt actions
//! - **Bounces**: `SendBounce` with per-recipient DSN fields
//! - **Sending**: Plain, raw, templated and bulk templated email
//! - **Identities**: Verification, DKIM, MAIL FROM, notifications and policies
//! - **Configuration Sets**: Event destinations and tracking options
//! - **Constrained Enums**: Typed values with wire-literal conversions
//! - **Error Handling**: The SES service error taxonomy with retryability information
//! - **Validation**: Strict or permissive enforcement of service constraints
//!
//! The crate performs no I/O. Requests are encoded with [`codec`] and sent by
//! whatever transport the caller uses; service errors are mapped back with
//! [`error::map_service_error`].
//!
//! # Quick Start
//!
//! ```rust
//! use integrations_aws_ses_model::builders::SendBounceBuilder;
//! use integrations_aws_ses_model::codec::encode_request;
//! use integrations_aws_ses_model::config::ModelConfig;
//! use integrations_aws_ses_model::operations::{SendBounceRequest, SesOperation};
//! use integrations_aws_ses_model::types::BounceType;
//!
//! let request = SendBounceBuilder::new()
//!     .original_message_id("00000138111222aa-33322211-cccc-cccc-cccc-ddddaaaa0680-000000")
//!     .bounce_sender("mailer-daemon@example.com")
//!     .bounce("a@example.com", BounceType::DoesNotExist)
//!     .build()?;
//!
//! let config = ModelConfig::default();
//! let body = encode_request(&request, &config)?;
//! assert_eq!(<SendBounceRequest as SesOperation>::ACTION, "SendBounce");
//! assert!(!body.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! - [`types`]: Data types shared by several actions
//! - [`operations`]: One request and result per action
//! - [`builders`]: Fluent builders for the larger requests
//! - [`validation`]: Service constraint checks
//! - [`codec`]: JSON encoding of requests and results
//! - [`config`]: Validation mode and service limits
//! - [`error`]: Error types and service error mapping

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod codec;
pub mod config;
pub mod error;
pub mod operations;
pub mod types;
pub mod validation;

pub use builders::{
    BuilderError, BulkTemplatedEmailBuilder, CustomVerificationTemplateBuilder, EmailBuilder,
    ReceiptRuleBuilder, SendBounceBuilder,
};
pub use config::{ModelConfig, ValidationMode};
pub use error::{ServiceError, ServiceErrorKind, SesError, SesResult};
pub use operations::{SesOperation, API_VERSION};
pub use validation::{Validate, Violation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let _ = std::any::type_name::<SesError>();
        let _ = std::any::type_name::<ModelConfig>();
        let _ = std::any::type_name::<types::ReceiptAction>();
        let _ = std::any::type_name::<operations::SendBounceRequest>();
        assert_eq!(API_VERSION, "2010-12-01");
    }
}
