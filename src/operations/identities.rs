//! Identity actions: verification, attribute queries, DKIM, custom MAIL FROM,
//! feedback notifications, and sending-authorization policies.

use super::EmptyResult;
use crate::error::SesResult;
use crate::types::{
    BehaviorOnMxFailure, IdentityDkimAttributes, IdentityMailFromDomainAttributes,
    IdentityNotificationAttributes, IdentityType, IdentityVerificationAttributes,
    NotificationType,
};
use crate::validation::{Validate, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identities accepted by one `GetIdentity*Attributes` call.
pub const MAX_IDENTITIES_PER_QUERY: usize = 100;

/// Policy names accepted by one `GetIdentityPolicies` call.
pub const MAX_POLICIES_PER_QUERY: usize = 20;

fn is_policy_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= 64
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn check_policy_name(v: &mut Validator<'_>, field: &str, name: &str) {
    if !is_policy_name(name) {
        v.push(field, format!("'{}' is not a valid policy name", name));
    }
}

fn check_identities(v: &mut Validator<'_>, identities: &[String]) {
    v.require_non_empty("identities", identities);
    v.limit("identities", identities, MAX_IDENTITIES_PER_QUERY);
    for (index, identity) in identities.iter().enumerate() {
        v.require(&format!("identities[{}]", index), identity);
    }
}

/// Start verification of an email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyEmailIdentityRequest {
    /// Address to verify.
    pub email_address: String,
}

impl Validate for VerifyEmailIdentityRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("email_address", &self.email_address);
    }
}

/// Start verification of an email address with the legacy address API.
///
/// Superseded by [`VerifyEmailIdentityRequest`]; the service still accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyEmailAddressRequest {
    /// Address to verify.
    pub email_address: String,
}

impl Validate for VerifyEmailAddressRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("email_address", &self.email_address);
    }
}

/// Remove an address verified with the legacy address API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVerifiedEmailAddressRequest {
    /// Address to remove.
    pub email_address: String,
}

impl Validate for DeleteVerifiedEmailAddressRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.email_address("email_address", &self.email_address);
    }
}

/// List every verified address, without pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListVerifiedEmailAddressesRequest {}

impl Validate for ListVerifiedEmailAddressesRequest {}

/// Result of `ListVerifiedEmailAddresses`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListVerifiedEmailAddressesResult {
    /// Verified addresses, in service order.
    #[serde(default)]
    pub verified_email_addresses: Vec<String>,
}

/// Start verification of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDomainIdentityRequest {
    /// Domain to verify.
    pub domain: String,
}

impl Validate for VerifyDomainIdentityRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("domain", &self.domain);
        if self.domain.contains('@') {
            v.push("domain", "must be a domain, not an address");
        }
    }
}

/// Result of `VerifyDomainIdentity`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDomainIdentityResult {
    /// Value of the `_amazonses` TXT record to publish.
    pub verification_token: String,
}

/// Generate Easy DKIM tokens for a domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDomainDkimRequest {
    /// Domain to sign for.
    pub domain: String,
}

impl Validate for VerifyDomainDkimRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("domain", &self.domain);
    }
}

/// Result of `VerifyDomainDkim`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyDomainDkimResult {
    /// CNAME tokens, in order.
    #[serde(default)]
    pub dkim_tokens: Vec<String>,
}

/// Remove an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIdentityRequest {
    /// Address or domain.
    pub identity: String,
}

impl Validate for DeleteIdentityRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
    }
}

/// List identities, optionally of one type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentitiesRequest {
    /// Restrict to one identity type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<IdentityType>,
    /// Pagination token from a previous call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, at most 1000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

impl ListIdentitiesRequest {
    /// Restrict to one identity type.
    pub fn with_identity_type(mut self, identity_type: IdentityType) -> Self {
        self.identity_type = Some(identity_type);
        self
    }

    /// Restrict to one identity type given as its literal.
    pub fn try_identity_type(self, identity_type: &str) -> SesResult<Self> {
        Ok(self.with_identity_type(identity_type.parse()?))
    }
}

impl Validate for ListIdentitiesRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        if let Some(max) = self.max_items {
            if max > 1000 {
                v.push("max_items", format!("{} exceeds the page limit of 1000", max));
            }
        }
    }
}

/// Result of `ListIdentities`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentitiesResult {
    /// Identities on this page.
    #[serde(default)]
    pub identities: Vec<String>,
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

macro_rules! identity_query {
    (
        $(#[$meta:meta])*
        $request:ident => $result:ident { $field:ident: $attrs:ty }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $request {
            /// Addresses and domains to query, at most 100.
            pub identities: Vec<String>,
        }

        impl $request {
            /// Query the given identities.
            pub fn new<I, S>(identities: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self {
                    identities: identities.into_iter().map(Into::into).collect(),
                }
            }
        }

        impl Validate for $request {
            fn validate(&self, v: &mut Validator<'_>) {
                check_identities(v, &self.identities);
            }
        }

        #[doc = concat!("Result of `", stringify!($request), "`, keyed by identity.")]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $result {
            /// Attributes per identity.
            #[serde(default)]
            pub $field: BTreeMap<String, $attrs>,
        }
    };
}

identity_query! {
    /// Read verification status of identities.
    GetIdentityVerificationAttributesRequest => GetIdentityVerificationAttributesResult {
        verification_attributes: IdentityVerificationAttributes
    }
}

identity_query! {
    /// Read Easy DKIM state of identities.
    GetIdentityDkimAttributesRequest => GetIdentityDkimAttributesResult {
        dkim_attributes: IdentityDkimAttributes
    }
}

identity_query! {
    /// Read custom MAIL FROM settings of identities.
    GetIdentityMailFromDomainAttributesRequest => GetIdentityMailFromDomainAttributesResult {
        mail_from_domain_attributes: IdentityMailFromDomainAttributes
    }
}

identity_query! {
    /// Read notification settings of identities.
    GetIdentityNotificationAttributesRequest => GetIdentityNotificationAttributesResult {
        notification_attributes: IdentityNotificationAttributes
    }
}

/// Enable or disable Easy DKIM signing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetIdentityDkimEnabledRequest {
    /// Address or domain.
    pub identity: String,
    /// Whether to sign.
    pub dkim_enabled: bool,
}

impl Validate for SetIdentityDkimEnabledRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
    }
}

/// Enable or disable forwarding of bounces and complaints by email.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetIdentityFeedbackForwardingEnabledRequest {
    /// Address or domain.
    pub identity: String,
    /// Whether to forward.
    pub forwarding_enabled: bool,
}

impl Validate for SetIdentityFeedbackForwardingEnabledRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
    }
}

/// Include or omit original headers in one kind of notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetIdentityHeadersInNotificationsEnabledRequest {
    /// Address or domain.
    pub identity: String,
    /// Notification kind.
    pub notification_type: NotificationType,
    /// Whether to include headers.
    pub enabled: bool,
}

impl SetIdentityHeadersInNotificationsEnabledRequest {
    /// Create a request.
    pub fn new(identity: impl Into<String>, notification_type: NotificationType, enabled: bool) -> Self {
        Self {
            identity: identity.into(),
            notification_type,
            enabled,
        }
    }

    /// Set the notification kind from its literal.
    pub fn try_notification_type(mut self, notification_type: &str) -> SesResult<Self> {
        self.notification_type = notification_type.parse()?;
        Ok(self)
    }
}

impl Validate for SetIdentityHeadersInNotificationsEnabledRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
    }
}

/// Set or clear the custom MAIL FROM domain of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetIdentityMailFromDomainRequest {
    /// Address or domain.
    pub identity: String,
    /// Subdomain to use; `None` disables the custom domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_from_domain: Option<String>,
    /// What SES does when the MX record is missing.
    #[serde(
        rename = "BehaviorOnMXFailure",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub behavior_on_mx_failure: Option<BehaviorOnMxFailure>,
}

impl SetIdentityMailFromDomainRequest {
    /// Create a request for `identity` with no domain set.
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            mail_from_domain: None,
            behavior_on_mx_failure: None,
        }
    }

    /// Set the MAIL FROM domain.
    pub fn with_mail_from_domain(mut self, domain: impl Into<String>) -> Self {
        self.mail_from_domain = Some(domain.into());
        self
    }

    /// Set the MX failure behavior.
    pub fn with_behavior_on_mx_failure(mut self, behavior: BehaviorOnMxFailure) -> Self {
        self.behavior_on_mx_failure = Some(behavior);
        self
    }

    /// Set the MX failure behavior from its literal.
    pub fn try_behavior_on_mx_failure(self, behavior: &str) -> SesResult<Self> {
        Ok(self.with_behavior_on_mx_failure(behavior.parse()?))
    }
}

impl Validate for SetIdentityMailFromDomainRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
        let Some(domain) = &self.mail_from_domain else {
            return;
        };
        let parent = match self.identity.rsplit_once('@') {
            Some((_, domain)) => domain,
            None => self.identity.as_str(),
        };
        let suffix = format!(".{}", parent.to_ascii_lowercase());
        if !domain.to_ascii_lowercase().ends_with(&suffix) {
            v.push(
                "mail_from_domain",
                format!("'{}' is not a subdomain of '{}'", domain, parent),
            );
        }
    }
}

/// Set or clear the SNS topic for one kind of notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetIdentityNotificationTopicRequest {
    /// Address or domain.
    pub identity: String,
    /// Notification kind.
    pub notification_type: NotificationType,
    /// Topic ARN; `None` stops publishing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sns_topic: Option<String>,
}

impl Validate for SetIdentityNotificationTopicRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
        v.require_if_set("sns_topic", self.sns_topic.as_deref());
    }
}

/// Read sending-authorization policies by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIdentityPoliciesRequest {
    /// Address, domain or identity ARN.
    pub identity: String,
    /// Policies to read, at most 20.
    pub policy_names: Vec<String>,
}

impl Validate for GetIdentityPoliciesRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
        v.require_non_empty("policy_names", &self.policy_names);
        v.limit("policy_names", &self.policy_names, MAX_POLICIES_PER_QUERY);
        for (index, name) in self.policy_names.iter().enumerate() {
            check_policy_name(v, &format!("policy_names[{}]", index), name);
        }
    }
}

/// Result of `GetIdentityPolicies`: policy documents keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetIdentityPoliciesResult {
    /// Policy JSON per name.
    #[serde(default)]
    pub policies: BTreeMap<String, String>,
}

/// List the policy names attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentityPoliciesRequest {
    /// Address, domain or identity ARN.
    pub identity: String,
}

impl Validate for ListIdentityPoliciesRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
    }
}

/// Result of `ListIdentityPolicies`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListIdentityPoliciesResult {
    /// Policy names.
    #[serde(default)]
    pub policy_names: Vec<String>,
}

/// Attach or replace a sending-authorization policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutIdentityPolicyRequest {
    /// Address, domain or identity ARN.
    pub identity: String,
    /// Policy name.
    pub policy_name: String,
    /// Policy document (JSON).
    pub policy: String,
}

impl PutIdentityPolicyRequest {
    /// Create a request from a policy document value.
    pub fn new(
        identity: impl Into<String>,
        policy_name: impl Into<String>,
        policy: &serde_json::Value,
    ) -> Self {
        Self {
            identity: identity.into(),
            policy_name: policy_name.into(),
            policy: policy.to_string(),
        }
    }
}

impl Validate for PutIdentityPolicyRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
        check_policy_name(v, "policy_name", &self.policy_name);
        v.json_document("policy", &self.policy);
    }
}

/// Remove a sending-authorization policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteIdentityPolicyRequest {
    /// Address, domain or identity ARN.
    pub identity: String,
    /// Policy name.
    pub policy_name: String,
}

impl Validate for DeleteIdentityPolicyRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("identity", &self.identity);
        check_policy_name(v, "policy_name", &self.policy_name);
    }
}

ses_operation! {
    VerifyEmailIdentityRequest => "VerifyEmailIdentity", EmptyResult;
    VerifyDomainIdentityRequest => "VerifyDomainIdentity", VerifyDomainIdentityResult;
    VerifyDomainDkimRequest => "VerifyDomainDkim", VerifyDomainDkimResult;
    DeleteIdentityRequest => "DeleteIdentity", EmptyResult;
    ListIdentitiesRequest => "ListIdentities", ListIdentitiesResult;
    GetIdentityVerificationAttributesRequest => "GetIdentityVerificationAttributes", GetIdentityVerificationAttributesResult;
    GetIdentityDkimAttributesRequest => "GetIdentityDkimAttributes", GetIdentityDkimAttributesResult;
    GetIdentityMailFromDomainAttributesRequest => "GetIdentityMailFromDomainAttributes", GetIdentityMailFromDomainAttributesResult;
    GetIdentityNotificationAttributesRequest => "GetIdentityNotificationAttributes", GetIdentityNotificationAttributesResult;
    SetIdentityDkimEnabledRequest => "SetIdentityDkimEnabled", EmptyResult;
    SetIdentityFeedbackForwardingEnabledRequest => "SetIdentityFeedbackForwardingEnabled", EmptyResult;
    SetIdentityHeadersInNotificationsEnabledRequest => "SetIdentityHeadersInNotificationsEnabled", EmptyResult;
    SetIdentityMailFromDomainRequest => "SetIdentityMailFromDomain", EmptyResult;
    SetIdentityNotificationTopicRequest => "SetIdentityNotificationTopic", EmptyResult;
    GetIdentityPoliciesRequest => "GetIdentityPolicies", GetIdentityPoliciesResult;
    ListIdentityPoliciesRequest => "ListIdentityPolicies", ListIdentityPoliciesResult;
    PutIdentityPolicyRequest => "PutIdentityPolicy", EmptyResult;
    DeleteIdentityPolicyRequest => "DeleteIdentityPolicy", EmptyResult;
    VerifyEmailAddressRequest => "VerifyEmailAddress", EmptyResult;
    DeleteVerifiedEmailAddressRequest => "DeleteVerifiedEmailAddress", EmptyResult;
    ListVerifiedEmailAddressesRequest => "ListVerifiedEmailAddresses", ListVerifiedEmailAddressesResult;
}
