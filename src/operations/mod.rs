//! Request and result types for every supported SES action.
//!
//! Each request type implements [`SesOperation`], which names the Query API
//! action and the result type the service returns for it. Actions that
//! return nothing beyond response metadata use [`EmptyResult`].
//!
//! # Modules
//!
//! - **sending**: send email, raw, templated, bulk, bounce; quota and statistics
//! - **identities**: verification, DKIM, MAIL FROM, notifications, policies
//! - **configuration_sets**: configuration sets, event destinations, tracking
//! - **templates**: custom verification email templates
//! - **receipt_rules**: receipt rule sets, rules and IP filters
//!
//! # Examples
//!
//! ```rust
//! use integrations_aws_ses_model::operations::{SesOperation, SendBounceRequest};
//!
//! assert_eq!(SendBounceRequest::ACTION, "SendBounce");
//! ```

use crate::validation::Validate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Query API version of the classic SES endpoint.
pub const API_VERSION: &str = "2010-12-01";

/// A request for one SES action.
pub trait SesOperation: Serialize + DeserializeOwned + Validate {
    /// The Query API `Action` name.
    const ACTION: &'static str;

    /// What the service returns for this action.
    type Output: Serialize + DeserializeOwned;
}

/// Result of actions that return no members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmptyResult {}

macro_rules! ses_operation {
    ($($request:ty => $action:literal, $output:ty;)+) => {
        $(
            impl $crate::operations::SesOperation for $request {
                const ACTION: &'static str = $action;
                type Output = $output;
            }
        )+
    };
}

mod configuration_sets;
mod identities;
mod receipt_rules;
mod sending;
mod templates;

pub use configuration_sets::*;
pub use identities::*;
pub use receipt_rules::*;
pub use sending::*;
pub use templates::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_wire_form() {
        assert_eq!(serde_json::to_string(&EmptyResult {}).unwrap(), "{}");
        let parsed: EmptyResult =
            serde_json::from_str(r#"{"ResponseMetadata": {"RequestId": "r-1"}}"#).unwrap();
        assert_eq!(parsed, EmptyResult::default());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(SendEmailRequest::ACTION, "SendEmail");
        assert_eq!(CreateReceiptRuleRequest::ACTION, "CreateReceiptRule");
        assert_eq!(
            CreateConfigurationSetEventDestinationRequest::ACTION,
            "CreateConfigurationSetEventDestination"
        );
        assert_eq!(
            GetIdentityMailFromDomainAttributesRequest::ACTION,
            "GetIdentityMailFromDomainAttributes"
        );
    }

    #[test]
    fn test_legacy_address_action_names() {
        assert_eq!(VerifyEmailAddressRequest::ACTION, "VerifyEmailAddress");
        assert_eq!(
            DeleteVerifiedEmailAddressRequest::ACTION,
            "DeleteVerifiedEmailAddress"
        );
        assert_eq!(
            ListVerifiedEmailAddressesRequest::ACTION,
            "ListVerifiedEmailAddresses"
        );
    }
}
