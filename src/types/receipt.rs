//! Receipt rule types for inbound mail.
//!
//! A receipt rule runs an ordered list of [`ReceiptAction`]s against mail
//! arriving for its recipients. On the wire an action is a record with one
//! optional member per action kind, and the service expects exactly one of
//! them to be set. [`ReceiptAction`] is the typed form of that record;
//! [`ReceiptActionShape`] is the record itself.

use super::{InvocationType, ReceiptFilterPolicy, SnsActionEncoding, StopScope, TlsPolicy};
use crate::error::{SesError, SesResult};
use crate::validation::{
    is_cidr, is_header_name, is_resource_name, is_smtp_reply_code, is_enhanced_status_code,
    Validate, Validator,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deliver the message to an S3 bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Action {
    /// SNS topic notified when the message is saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    /// Destination bucket.
    pub bucket_name: String,
    /// Key prefix for stored objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_key_prefix: Option<String>,
    /// KMS key used to encrypt the stored message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_arn: Option<String>,
}

impl S3Action {
    /// Create an S3 action for the given bucket.
    pub fn new(bucket_name: impl Into<String>) -> Self {
        Self {
            topic_arn: None,
            bucket_name: bucket_name.into(),
            object_key_prefix: None,
            kms_key_arn: None,
        }
    }

    /// Set the notification topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Set the object key prefix.
    pub fn with_object_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.object_key_prefix = Some(prefix.into());
        self
    }

    /// Set the KMS key.
    pub fn with_kms_key_arn(mut self, kms_key_arn: impl Into<String>) -> Self {
        self.kms_key_arn = Some(kms_key_arn.into());
        self
    }
}

impl Validate for S3Action {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("bucket_name", &self.bucket_name);
    }
}

/// Reject the message with a bounce back to the sender.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BounceAction {
    /// SNS topic notified when the bounce is sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    /// SMTP reply code, e.g. `550`.
    pub smtp_reply_code: String,
    /// Enhanced status code, e.g. `5.1.1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    /// Human-readable bounce text.
    pub message: String,
    /// Address the bounce is sent from.
    pub sender: String,
}

impl BounceAction {
    /// Create a bounce action.
    pub fn new(
        smtp_reply_code: impl Into<String>,
        message: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            topic_arn: None,
            smtp_reply_code: smtp_reply_code.into(),
            status_code: None,
            message: message.into(),
            sender: sender.into(),
        }
    }

    /// Set the notification topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Set the enhanced status code.
    pub fn with_status_code(mut self, status_code: impl Into<String>) -> Self {
        self.status_code = Some(status_code.into());
        self
    }
}

impl Validate for BounceAction {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_smtp_reply_code(&self.smtp_reply_code) {
            v.push(
                "smtp_reply_code",
                format!("'{}' is not a 4xx/5xx SMTP reply code", self.smtp_reply_code),
            );
        }
        if let Some(status) = &self.status_code {
            if !is_enhanced_status_code(status) {
                v.push("status_code", format!("'{}' is not an x.y.z status code", status));
            }
        }
        v.require("message", &self.message);
        v.require("sender", &self.sender);
    }
}

/// Hand the message to Amazon WorkMail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkmailAction {
    /// SNS topic notified when the action runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    /// WorkMail organization.
    pub organization_arn: String,
}

impl WorkmailAction {
    /// Create a WorkMail action.
    pub fn new(organization_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: None,
            organization_arn: organization_arn.into(),
        }
    }

    /// Set the notification topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }
}

impl Validate for WorkmailAction {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("organization_arn", &self.organization_arn);
    }
}

/// Invoke a Lambda function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaAction {
    /// SNS topic notified when the function is invoked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
    /// Function to invoke.
    pub function_arn: String,
    /// Invocation type; the service defaults to `Event`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invocation_type: Option<InvocationType>,
}

impl LambdaAction {
    /// Create a Lambda action.
    pub fn new(function_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: None,
            function_arn: function_arn.into(),
            invocation_type: None,
        }
    }

    /// Set the notification topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Set the invocation type.
    pub fn with_invocation_type(mut self, invocation_type: InvocationType) -> Self {
        self.invocation_type = Some(invocation_type);
        self
    }

    /// Set the invocation type from its literal.
    pub fn try_invocation_type(self, invocation_type: &str) -> SesResult<Self> {
        Ok(self.with_invocation_type(invocation_type.parse()?))
    }
}

impl Validate for LambdaAction {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("function_arn", &self.function_arn);
    }
}

/// Stop evaluating the rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopAction {
    /// What to stop.
    pub scope: StopScope,
    /// SNS topic notified when the action runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_arn: Option<String>,
}

impl StopAction {
    /// Create a stop action for the rule set.
    pub fn new() -> Self {
        Self {
            scope: StopScope::RuleSet,
            topic_arn: None,
        }
    }

    /// Set the notification topic.
    pub fn with_topic_arn(mut self, topic_arn: impl Into<String>) -> Self {
        self.topic_arn = Some(topic_arn.into());
        self
    }

    /// Set what to stop.
    pub fn with_scope(mut self, scope: StopScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set what to stop from its literal.
    pub fn try_scope(self, scope: &str) -> SesResult<Self> {
        Ok(self.with_scope(scope.parse()?))
    }
}

impl Default for StopAction {
    fn default() -> Self {
        Self::new()
    }
}

/// Add a header to the received message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddHeaderAction {
    /// Header name.
    pub header_name: String,
    /// Header value.
    pub header_value: String,
}

impl AddHeaderAction {
    /// Create an add-header action.
    pub fn new(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        Self {
            header_name: header_name.into(),
            header_value: header_value.into(),
        }
    }
}

impl Validate for AddHeaderAction {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_header_name(&self.header_name) {
            v.push(
                "header_name",
                format!("'{}' is not a valid header name", self.header_name),
            );
        }
        if self.header_value.chars().count() >= 2048 {
            v.push("header_value", "must be shorter than 2048 characters");
        }
        if self.header_value.contains(|c: char| c == '\r' || c == '\n') {
            v.push("header_value", "must not contain line breaks");
        }
    }
}

/// Publish the message to an SNS topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnsAction {
    /// Topic to publish to.
    pub topic_arn: String,
    /// Encoding of the published body; the service defaults to UTF-8.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<SnsActionEncoding>,
}

impl SnsAction {
    /// Create an SNS action.
    pub fn new(topic_arn: impl Into<String>) -> Self {
        Self {
            topic_arn: topic_arn.into(),
            encoding: None,
        }
    }

    /// Set the encoding.
    pub fn with_encoding(mut self, encoding: SnsActionEncoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the encoding from its literal (`UTF-8` or `Base64`).
    pub fn try_encoding(self, encoding: &str) -> SesResult<Self> {
        Ok(self.with_encoding(encoding.parse()?))
    }
}

impl Validate for SnsAction {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("topic_arn", &self.topic_arn);
    }
}

/// One action of a receipt rule.
///
/// ```rust
/// use integrations_aws_ses_model::types::{ReceiptAction, ReceiptActionShape, S3Action};
///
/// let action = ReceiptAction::from(S3Action::new("inbound-mail"));
/// let json = serde_json::to_string(&action).unwrap();
/// assert_eq!(json, r#"{"S3Action":{"BucketName":"inbound-mail"}}"#);
///
/// // An empty record is a valid shape but not a valid action.
/// assert!(ReceiptAction::try_from(ReceiptActionShape::default()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ReceiptActionShape", into = "ReceiptActionShape")]
pub enum ReceiptAction {
    /// Save to S3.
    S3(S3Action),
    /// Bounce to the sender.
    Bounce(BounceAction),
    /// Deliver to WorkMail.
    Workmail(WorkmailAction),
    /// Invoke Lambda.
    Lambda(LambdaAction),
    /// Stop the rule set.
    Stop(StopAction),
    /// Add a header.
    AddHeader(AddHeaderAction),
    /// Publish to SNS.
    Sns(SnsAction),
}

impl ReceiptAction {
    /// Save to the given bucket.
    pub fn s3(bucket_name: impl Into<String>) -> Self {
        ReceiptAction::S3(S3Action::new(bucket_name))
    }

    /// Bounce with the given reply code, text and sender.
    pub fn bounce(
        smtp_reply_code: impl Into<String>,
        message: impl Into<String>,
        sender: impl Into<String>,
    ) -> Self {
        ReceiptAction::Bounce(BounceAction::new(smtp_reply_code, message, sender))
    }

    /// Deliver to a WorkMail organization.
    pub fn workmail(organization_arn: impl Into<String>) -> Self {
        ReceiptAction::Workmail(WorkmailAction::new(organization_arn))
    }

    /// Invoke a Lambda function.
    pub fn lambda(function_arn: impl Into<String>) -> Self {
        ReceiptAction::Lambda(LambdaAction::new(function_arn))
    }

    /// Stop the rule set.
    pub fn stop() -> Self {
        ReceiptAction::Stop(StopAction::new())
    }

    /// Add a header.
    pub fn add_header(header_name: impl Into<String>, header_value: impl Into<String>) -> Self {
        ReceiptAction::AddHeader(AddHeaderAction::new(header_name, header_value))
    }

    /// Publish to an SNS topic.
    pub fn sns(topic_arn: impl Into<String>) -> Self {
        ReceiptAction::Sns(SnsAction::new(topic_arn))
    }

    /// The wire member name of this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ReceiptAction::S3(_) => "S3Action",
            ReceiptAction::Bounce(_) => "BounceAction",
            ReceiptAction::Workmail(_) => "WorkmailAction",
            ReceiptAction::Lambda(_) => "LambdaAction",
            ReceiptAction::Stop(_) => "StopAction",
            ReceiptAction::AddHeader(_) => "AddHeaderAction",
            ReceiptAction::Sns(_) => "SNSAction",
        }
    }

    /// The SNS topic this action notifies or publishes to, if any.
    pub fn topic_arn(&self) -> Option<&str> {
        match self {
            ReceiptAction::S3(a) => a.topic_arn.as_deref(),
            ReceiptAction::Bounce(a) => a.topic_arn.as_deref(),
            ReceiptAction::Workmail(a) => a.topic_arn.as_deref(),
            ReceiptAction::Lambda(a) => a.topic_arn.as_deref(),
            ReceiptAction::Stop(a) => a.topic_arn.as_deref(),
            ReceiptAction::AddHeader(_) => None,
            ReceiptAction::Sns(a) => Some(a.topic_arn.as_str()),
        }
    }

    /// Returns true if no later action or rule runs after this one.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReceiptAction::Stop(_))
    }
}

impl From<S3Action> for ReceiptAction {
    fn from(action: S3Action) -> Self {
        ReceiptAction::S3(action)
    }
}

impl From<BounceAction> for ReceiptAction {
    fn from(action: BounceAction) -> Self {
        ReceiptAction::Bounce(action)
    }
}

impl From<WorkmailAction> for ReceiptAction {
    fn from(action: WorkmailAction) -> Self {
        ReceiptAction::Workmail(action)
    }
}

impl From<LambdaAction> for ReceiptAction {
    fn from(action: LambdaAction) -> Self {
        ReceiptAction::Lambda(action)
    }
}

impl From<StopAction> for ReceiptAction {
    fn from(action: StopAction) -> Self {
        ReceiptAction::Stop(action)
    }
}

impl From<AddHeaderAction> for ReceiptAction {
    fn from(action: AddHeaderAction) -> Self {
        ReceiptAction::AddHeader(action)
    }
}

impl From<SnsAction> for ReceiptAction {
    fn from(action: SnsAction) -> Self {
        ReceiptAction::Sns(action)
    }
}

impl Validate for ReceiptAction {
    fn validate(&self, v: &mut Validator<'_>) {
        let kind = self.kind();
        match self {
            ReceiptAction::S3(a) => v.check(kind, a),
            ReceiptAction::Bounce(a) => v.check(kind, a),
            ReceiptAction::Workmail(a) => v.check(kind, a),
            ReceiptAction::Lambda(a) => v.check(kind, a),
            ReceiptAction::Stop(_) => {}
            ReceiptAction::AddHeader(a) => v.check(kind, a),
            ReceiptAction::Sns(a) => v.check(kind, a),
        }
    }
}

/// Wire layout of a receipt action: one optional member per kind.
///
/// Any combination of members can be set here, including none or several.
/// Nothing checks this locally; use `ReceiptAction::try_from` to get a value
/// the service will accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptActionShape {
    /// S3 action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_action: Option<S3Action>,
    /// Bounce action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_action: Option<BounceAction>,
    /// WorkMail action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workmail_action: Option<WorkmailAction>,
    /// Lambda action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lambda_action: Option<LambdaAction>,
    /// Stop action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_action: Option<StopAction>,
    /// Add-header action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_header_action: Option<AddHeaderAction>,
    /// SNS action.
    #[serde(rename = "SNSAction", default, skip_serializing_if = "Option::is_none")]
    pub sns_action: Option<SnsAction>,
}

impl ReceiptActionShape {
    /// Number of members that are set.
    pub fn populated(&self) -> usize {
        [
            self.s3_action.is_some(),
            self.bounce_action.is_some(),
            self.workmail_action.is_some(),
            self.lambda_action.is_some(),
            self.stop_action.is_some(),
            self.add_header_action.is_some(),
            self.sns_action.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

impl TryFrom<ReceiptActionShape> for ReceiptAction {
    type Error = SesError;

    fn try_from(shape: ReceiptActionShape) -> Result<Self, Self::Error> {
        let count = shape.populated();
        if count != 1 {
            tracing::debug!(count, "receipt action record must carry one action");
            return Err(SesError::InvalidVariantCount {
                type_name: "ReceiptAction",
                count,
            });
        }

        let ReceiptActionShape {
            s3_action,
            bounce_action,
            workmail_action,
            lambda_action,
            stop_action,
            add_header_action,
            sns_action,
        } = shape;

        let action = s3_action
            .map(ReceiptAction::S3)
            .or_else(|| bounce_action.map(ReceiptAction::Bounce))
            .or_else(|| workmail_action.map(ReceiptAction::Workmail))
            .or_else(|| lambda_action.map(ReceiptAction::Lambda))
            .or_else(|| stop_action.map(ReceiptAction::Stop))
            .or_else(|| add_header_action.map(ReceiptAction::AddHeader))
            .or_else(|| sns_action.map(ReceiptAction::Sns));

        action.ok_or(SesError::InvalidVariantCount {
            type_name: "ReceiptAction",
            count: 0,
        })
    }
}

impl From<ReceiptAction> for ReceiptActionShape {
    fn from(action: ReceiptAction) -> Self {
        let mut shape = ReceiptActionShape::default();
        match action {
            ReceiptAction::S3(a) => shape.s3_action = Some(a),
            ReceiptAction::Bounce(a) => shape.bounce_action = Some(a),
            ReceiptAction::Workmail(a) => shape.workmail_action = Some(a),
            ReceiptAction::Lambda(a) => shape.lambda_action = Some(a),
            ReceiptAction::Stop(a) => shape.stop_action = Some(a),
            ReceiptAction::AddHeader(a) => shape.add_header_action = Some(a),
            ReceiptAction::Sns(a) => shape.sns_action = Some(a),
        }
        shape
    }
}

/// A receipt rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptRule {
    /// Rule name, unique within its rule set.
    pub name: String,
    /// Whether the rule is active.
    #[serde(default)]
    pub enabled: bool,
    /// Whether inbound mail must use TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_policy: Option<TlsPolicy>,
    /// Addresses and domains the rule applies to; empty means all verified identities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recipients: Vec<String>,
    /// Actions, run in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ReceiptAction>,
    /// Whether messages are scanned for spam and viruses.
    #[serde(default)]
    pub scan_enabled: bool,
}

impl ReceiptRule {
    /// Create an enabled rule with no recipients or actions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            tls_policy: None,
            recipients: Vec::new(),
            actions: Vec::new(),
            scan_enabled: false,
        }
    }
}

impl Validate for ReceiptRule {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_resource_name(&self.name) {
            v.push("name", format!("'{}' is not a valid rule name", self.name));
        }
        for (index, recipient) in self.recipients.iter().enumerate() {
            v.require(&format!("recipients[{}]", index), recipient);
        }
        v.check_each("actions", &self.actions);
        if let Some(position) = self.actions.iter().position(ReceiptAction::is_terminal) {
            if position + 1 < self.actions.len() {
                v.push(
                    &format!("actions[{}]", position + 1),
                    "is unreachable after a stop action",
                );
            }
        }
    }
}

/// Name and creation time of a receipt rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptRuleSetMetadata {
    /// Rule set name.
    pub name: String,
    /// When the rule set was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<DateTime<Utc>>,
}

/// An IP address range filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptIpFilter {
    /// Block or allow.
    pub policy: ReceiptFilterPolicy,
    /// Single address or CIDR range.
    pub cidr: String,
}

impl Validate for ReceiptIpFilter {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_cidr(&self.cidr) {
            v.push("cidr", format!("'{}' is not an IP address or CIDR range", self.cidr));
        }
    }
}

/// A named IP filter applied to all inbound mail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReceiptFilter {
    /// Filter name.
    pub name: String,
    /// The address range and policy.
    pub ip_filter: ReceiptIpFilter,
}

impl ReceiptFilter {
    /// Create a filter.
    pub fn new(name: impl Into<String>, policy: ReceiptFilterPolicy, cidr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip_filter: ReceiptIpFilter {
                policy,
                cidr: cidr.into(),
            },
        }
    }

    /// Set the policy.
    pub fn with_policy(mut self, policy: ReceiptFilterPolicy) -> Self {
        self.ip_filter.policy = policy;
        self
    }

    /// Set the policy from its literal.
    pub fn try_policy(self, policy: &str) -> SesResult<Self> {
        Ok(self.with_policy(policy.parse()?))
    }
}

impl Validate for ReceiptFilter {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_resource_name(&self.name) {
            v.push("name", format!("'{}' is not a valid filter name", self.name));
        }
        v.check("ip_filter", &self.ip_filter);
    }
}
