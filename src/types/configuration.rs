//! Configuration set types.
//!
//! Configuration sets group sending rules: where events are published, how
//! links are tracked, whether TLS is required, and reputation tracking.

use super::{DimensionValueSource, EventType, TlsPolicy};
use crate::error::{SesError, SesResult};
use crate::validation::{is_resource_name, Validate, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigurationSet {
    /// The name of the configuration set.
    pub name: String,
}

impl ConfigurationSet {
    /// Create a new configuration set with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validate for ConfigurationSet {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_resource_name(&self.name) {
            v.push("name", format!("'{}' is not a valid configuration set name", self.name));
        }
    }
}

/// Open and click tracking options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrackingOptions {
    /// Domain used in place of the SES tracking domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_redirect_domain: Option<String>,
}

impl TrackingOptions {
    /// Tracking options with a custom redirect domain.
    pub fn with_redirect_domain(domain: impl Into<String>) -> Self {
        Self {
            custom_redirect_domain: Some(domain.into()),
        }
    }
}

impl Validate for TrackingOptions {
    fn validate(&self, v: &mut Validator<'_>) {
        if let Some(domain) = &self.custom_redirect_domain {
            if domain.trim().is_empty() || domain.contains(|c: char| c == '/' || c == ':') {
                v.push(
                    "custom_redirect_domain",
                    format!("'{}' is not a bare domain name", domain),
                );
            }
        }
    }
}

/// Delivery options for a configuration set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryOptions {
    /// Whether outbound mail must use TLS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_policy: Option<TlsPolicy>,
}

impl DeliveryOptions {
    /// Create new delivery options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set TLS policy.
    pub fn with_tls_policy(mut self, policy: TlsPolicy) -> Self {
        self.tls_policy = Some(policy);
        self
    }

    /// Set TLS policy from its literal.
    pub fn try_tls_policy(self, policy: &str) -> SesResult<Self> {
        Ok(self.with_tls_policy(policy.parse()?))
    }
}

/// Reputation settings of a configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReputationOptions {
    /// Whether sending is enabled.
    #[serde(default = "default_true")]
    pub sending_enabled: bool,
    /// Whether reputation metrics are published to CloudWatch.
    #[serde(default)]
    pub reputation_metrics_enabled: bool,
    /// When reputation metrics were last reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_fresh_start: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

impl Default for ReputationOptions {
    fn default() -> Self {
        Self {
            sending_enabled: true,
            reputation_metrics_enabled: false,
            last_fresh_start: None,
        }
    }
}

/// Publish events to a Kinesis Data Firehose stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KinesisFirehoseDestination {
    /// Role SES assumes to write to the stream.
    #[serde(rename = "IAMRoleARN")]
    pub iam_role_arn: String,
    /// Target delivery stream.
    #[serde(rename = "DeliveryStreamARN")]
    pub delivery_stream_arn: String,
}

impl KinesisFirehoseDestination {
    /// Create a Firehose destination.
    pub fn new(iam_role_arn: impl Into<String>, delivery_stream_arn: impl Into<String>) -> Self {
        Self {
            iam_role_arn: iam_role_arn.into(),
            delivery_stream_arn: delivery_stream_arn.into(),
        }
    }
}

impl Validate for KinesisFirehoseDestination {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("iam_role_arn", &self.iam_role_arn);
        v.require("delivery_stream_arn", &self.delivery_stream_arn);
    }
}

/// One CloudWatch dimension and where its value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudWatchDimensionConfiguration {
    /// Dimension name.
    pub dimension_name: String,
    /// Where the value is read from.
    pub dimension_value_source: DimensionValueSource,
    /// Value used when the source does not supply one.
    pub default_dimension_value: String,
}

impl CloudWatchDimensionConfiguration {
    /// Create a dimension configuration.
    pub fn new(
        dimension_name: impl Into<String>,
        dimension_value_source: DimensionValueSource,
        default_dimension_value: impl Into<String>,
    ) -> Self {
        Self {
            dimension_name: dimension_name.into(),
            dimension_value_source,
            default_dimension_value: default_dimension_value.into(),
        }
    }

    /// Set the value source from its literal (`messageTag`, `emailHeader`, `linkTag`).
    pub fn try_dimension_value_source(mut self, source: &str) -> SesResult<Self> {
        self.dimension_value_source = source.parse()?;
        Ok(self)
    }
}

fn is_dimension_text(s: &str) -> bool {
    !s.is_empty()
        && s.len() < 256
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b'@'))
}

impl Validate for CloudWatchDimensionConfiguration {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_dimension_text(&self.dimension_name) {
            v.push(
                "dimension_name",
                format!("'{}' is not a valid dimension name", self.dimension_name),
            );
        }
        if !is_dimension_text(&self.default_dimension_value) {
            v.push(
                "default_dimension_value",
                format!("'{}' is not a valid dimension value", self.default_dimension_value),
            );
        }
    }
}

/// Publish events as CloudWatch metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloudWatchDestination {
    /// Dimensions attached to each metric.
    #[serde(default)]
    pub dimension_configurations: Vec<CloudWatchDimensionConfiguration>,
}

impl Validate for CloudWatchDestination {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require_non_empty("dimension_configurations", &self.dimension_configurations);
        v.check_each("dimension_configurations", &self.dimension_configurations);
    }
}

/// Publish events to an SNS topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnsDestination {
    /// Topic ARN.
    #[serde(rename = "TopicARN")]
    pub topic_arn: String,
}

impl Validate for SnsDestination {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("topic_arn", &self.topic_arn);
    }
}

/// Where an event destination publishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventDestinationTarget {
    /// Kinesis Data Firehose.
    KinesisFirehose(KinesisFirehoseDestination),
    /// CloudWatch metrics.
    CloudWatch(CloudWatchDestination),
    /// SNS topic.
    Sns(SnsDestination),
}

impl From<KinesisFirehoseDestination> for EventDestinationTarget {
    fn from(value: KinesisFirehoseDestination) -> Self {
        EventDestinationTarget::KinesisFirehose(value)
    }
}

impl From<CloudWatchDestination> for EventDestinationTarget {
    fn from(value: CloudWatchDestination) -> Self {
        EventDestinationTarget::CloudWatch(value)
    }
}

impl From<SnsDestination> for EventDestinationTarget {
    fn from(value: SnsDestination) -> Self {
        EventDestinationTarget::Sns(value)
    }
}

/// Where and which sending events of a configuration set are published.
///
/// ```rust
/// use integrations_aws_ses_model::types::{EventDestination, EventType, SnsDestination};
///
/// let dest = EventDestination::new(
///     "bounces-to-sns",
///     SnsDestination { topic_arn: "arn:aws:sns:us-east-1:123456789012:bounces".into() },
/// )
/// .add_event_type(EventType::Bounce)
/// .add_event_type(EventType::Complaint);
///
/// let json = serde_json::to_value(&dest).unwrap();
/// assert_eq!(json["MatchingEventTypes"], serde_json::json!(["bounce", "complaint"]));
/// assert!(json.get("SNSDestination").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventDestinationShape", into = "EventDestinationShape")]
pub struct EventDestination {
    /// Destination name.
    pub name: String,
    /// Whether publishing is enabled.
    pub enabled: bool,
    /// Events to publish, in order; duplicates are kept.
    pub matching_event_types: Vec<EventType>,
    /// Where events go.
    pub target: EventDestinationTarget,
}

impl EventDestination {
    /// Create an enabled destination with no event types.
    pub fn new(name: impl Into<String>, target: impl Into<EventDestinationTarget>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            matching_event_types: Vec::new(),
            target: target.into(),
        }
    }

    /// Append an event type.
    pub fn add_event_type(mut self, event_type: EventType) -> Self {
        self.matching_event_types.push(event_type);
        self
    }

    /// Append an event type given as its literal.
    pub fn try_add_event_type(self, event_type: &str) -> SesResult<Self> {
        Ok(self.add_event_type(event_type.parse()?))
    }

    /// Set whether publishing is enabled.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Validate for EventDestination {
    fn validate(&self, v: &mut Validator<'_>) {
        if !is_resource_name(&self.name) {
            v.push("name", format!("'{}' is not a valid event destination name", self.name));
        }
        v.require_non_empty("matching_event_types", &self.matching_event_types);
        match &self.target {
            EventDestinationTarget::KinesisFirehose(t) => v.check("kinesis_firehose_destination", t),
            EventDestinationTarget::CloudWatch(t) => v.check("cloud_watch_destination", t),
            EventDestinationTarget::Sns(t) => v.check("sns_destination", t),
        }
    }
}

/// Wire layout of [`EventDestination`] with every target as an optional sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventDestinationShape {
    /// Destination name.
    pub name: String,
    /// Whether publishing is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Events to publish.
    #[serde(default)]
    pub matching_event_types: Vec<EventType>,
    /// Firehose target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinesis_firehose_destination: Option<KinesisFirehoseDestination>,
    /// CloudWatch target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_watch_destination: Option<CloudWatchDestination>,
    /// SNS target.
    #[serde(rename = "SNSDestination", default, skip_serializing_if = "Option::is_none")]
    pub sns_destination: Option<SnsDestination>,
}

impl TryFrom<EventDestinationShape> for EventDestination {
    type Error = SesError;

    fn try_from(shape: EventDestinationShape) -> Result<Self, Self::Error> {
        let target = match (
            shape.kinesis_firehose_destination,
            shape.cloud_watch_destination,
            shape.sns_destination,
        ) {
            (Some(t), None, None) => EventDestinationTarget::KinesisFirehose(t),
            (None, Some(t), None) => EventDestinationTarget::CloudWatch(t),
            (None, None, Some(t)) => EventDestinationTarget::Sns(t),
            (k, c, s) => {
                let count = usize::from(k.is_some())
                    + usize::from(c.is_some())
                    + usize::from(s.is_some());
                tracing::debug!(
                    name = %shape.name,
                    count,
                    "event destination must carry one target"
                );
                return Err(SesError::InvalidVariantCount {
                    type_name: "EventDestination",
                    count,
                });
            }
        };

        Ok(Self {
            name: shape.name,
            enabled: shape.enabled,
            matching_event_types: shape.matching_event_types,
            target,
        })
    }
}

impl From<EventDestination> for EventDestinationShape {
    fn from(dest: EventDestination) -> Self {
        let mut shape = EventDestinationShape {
            name: dest.name,
            enabled: dest.enabled,
            matching_event_types: dest.matching_event_types,
            ..Default::default()
        };
        match dest.target {
            EventDestinationTarget::KinesisFirehose(t) => shape.kinesis_firehose_destination = Some(t),
            EventDestinationTarget::CloudWatch(t) => shape.cloud_watch_destination = Some(t),
            EventDestinationTarget::Sns(t) => shape.sns_destination = Some(t),
        }
        shape
    }
}

/// Summary of a custom verification email template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomVerificationEmailTemplate {
    /// Template name.
    pub template_name: String,
    /// Sender of the verification email.
    pub from_email_address: String,
    /// Subject line.
    pub template_subject: String,
    /// Redirect after successful verification.
    #[serde(rename = "SuccessRedirectionURL")]
    pub success_redirection_url: String,
    /// Redirect after failed verification.
    #[serde(rename = "FailureRedirectionURL")]
    pub failure_redirection_url: String,
}
