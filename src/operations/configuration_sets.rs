//! Configuration set actions.

use super::EmptyResult;
use crate::error::SesResult;
use crate::types::{
    ConfigurationSet, ConfigurationSetAttribute, DeliveryOptions, EventDestination,
    ReputationOptions, TrackingOptions,
};
use crate::validation::{Validate, Validator};
use serde::{Deserialize, Serialize};

/// Create a configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConfigurationSetRequest {
    /// The set to create.
    pub configuration_set: ConfigurationSet,
}

impl Validate for CreateConfigurationSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.check("configuration_set", &self.configuration_set);
    }
}

/// Delete a configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteConfigurationSetRequest {
    /// Set name.
    pub configuration_set_name: String,
}

impl Validate for DeleteConfigurationSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
    }
}

/// Read a configuration set and the sections named in the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeConfigurationSetRequest {
    /// Set name.
    pub configuration_set_name: String,
    /// Sections to include.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configuration_set_attribute_names: Vec<ConfigurationSetAttribute>,
}

impl DescribeConfigurationSetRequest {
    /// Describe `name` with no optional sections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            configuration_set_name: name.into(),
            configuration_set_attribute_names: Vec::new(),
        }
    }

    /// Include one more section.
    pub fn add_attribute(mut self, attribute: ConfigurationSetAttribute) -> Self {
        self.configuration_set_attribute_names.push(attribute);
        self
    }

    /// Include one more section given as its literal.
    pub fn try_add_attribute(self, attribute: &str) -> SesResult<Self> {
        Ok(self.add_attribute(attribute.parse()?))
    }

    /// Describe `name` with every section included.
    pub fn all_sections(name: impl Into<String>) -> Self {
        Self {
            configuration_set_name: name.into(),
            configuration_set_attribute_names: ConfigurationSetAttribute::ALL.to_vec(),
        }
    }
}

impl Validate for DescribeConfigurationSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
    }
}

/// Result of `DescribeConfigurationSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeConfigurationSetResult {
    /// The set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_set: Option<ConfigurationSet>,
    /// Event destinations, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_destinations: Vec<EventDestination>,
    /// Tracking options, when requested and set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_options: Option<TrackingOptions>,
    /// Delivery options, when requested and set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_options: Option<DeliveryOptions>,
    /// Reputation options, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reputation_options: Option<ReputationOptions>,
}

/// List configuration sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConfigurationSetsRequest {
    /// Pagination token from a previous call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

impl Validate for ListConfigurationSetsRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        if self.max_items == Some(0) {
            v.push("max_items", "must be greater than zero");
        }
    }
}

/// Result of `ListConfigurationSets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListConfigurationSetsResult {
    /// Sets on this page.
    #[serde(default)]
    pub configuration_sets: Vec<ConfigurationSet>,
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Add an event destination to a configuration set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConfigurationSetEventDestinationRequest {
    /// Set name.
    pub configuration_set_name: String,
    /// Destination to add.
    pub event_destination: EventDestination,
}

impl Validate for CreateConfigurationSetEventDestinationRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
        v.check("event_destination", &self.event_destination);
    }
}

/// Set open and click tracking options for the first time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateConfigurationSetTrackingOptionsRequest {
    /// Set name.
    pub configuration_set_name: String,
    /// Tracking options.
    pub tracking_options: TrackingOptions,
}

impl Validate for CreateConfigurationSetTrackingOptionsRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
        v.check("tracking_options", &self.tracking_options);
    }
}

/// Replace open and click tracking options.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateConfigurationSetTrackingOptionsRequest {
    /// Set name.
    pub configuration_set_name: String,
    /// Tracking options.
    pub tracking_options: TrackingOptions,
}

impl Validate for UpdateConfigurationSetTrackingOptionsRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
        v.check("tracking_options", &self.tracking_options);
    }
}

/// Remove tracking options, reverting to the SES tracking domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteConfigurationSetTrackingOptionsRequest {
    /// Set name.
    pub configuration_set_name: String,
}

impl Validate for DeleteConfigurationSetTrackingOptionsRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("configuration_set_name", &self.configuration_set_name);
    }
}

ses_operation! {
    CreateConfigurationSetRequest => "CreateConfigurationSet", EmptyResult;
    DeleteConfigurationSetRequest => "DeleteConfigurationSet", EmptyResult;
    DescribeConfigurationSetRequest => "DescribeConfigurationSet", DescribeConfigurationSetResult;
    ListConfigurationSetsRequest => "ListConfigurationSets", ListConfigurationSetsResult;
    CreateConfigurationSetEventDestinationRequest => "CreateConfigurationSetEventDestination", EmptyResult;
    CreateConfigurationSetTrackingOptionsRequest => "CreateConfigurationSetTrackingOptions", EmptyResult;
    UpdateConfigurationSetTrackingOptionsRequest => "UpdateConfigurationSetTrackingOptions", EmptyResult;
    DeleteConfigurationSetTrackingOptionsRequest => "DeleteConfigurationSetTrackingOptions", EmptyResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::types::{EventType, SnsDestination, TlsPolicy};
    use crate::validation::violations;

    #[test]
    fn test_create_rejects_bad_name() {
        let request = CreateConfigurationSetRequest {
            configuration_set: ConfigurationSet::new("my set"),
        };
        let found = violations(&request, &ModelConfig::default());
        assert_eq!(found[0].field, "configuration_set.name");
    }

    #[test]
    fn test_describe_all_sections() {
        let request = DescribeConfigurationSetRequest::all_sections("marketing");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["ConfigurationSetAttributeNames"],
            serde_json::json!([
                "eventDestinations",
                "trackingOptions",
                "deliveryOptions",
                "reputationOptions"
            ])
        );
    }

    #[test]
    fn test_describe_result_decode() {
        let json = r#"{
            "ConfigurationSet": {"Name": "marketing"},
            "EventDestinations": [{
                "Name": "to-sns",
                "Enabled": true,
                "MatchingEventTypes": ["bounce"],
                "SNSDestination": {"TopicARN": "arn:aws:sns:us-east-1:123456789012:t"}
            }],
            "DeliveryOptions": {"TlsPolicy": "Require"},
            "ReputationOptions": {"SendingEnabled": false, "ReputationMetricsEnabled": true}
        }"#;
        let result: DescribeConfigurationSetResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.event_destinations.len(), 1);
        assert_eq!(result.event_destinations[0].matching_event_types, vec![EventType::Bounce]);
        assert_eq!(
            result.delivery_options.and_then(|d| d.tls_policy),
            Some(TlsPolicy::Require)
        );
        let reputation = result.reputation_options.unwrap();
        assert!(!reputation.sending_enabled);
        assert!(reputation.reputation_metrics_enabled);
    }

    #[test]
    fn test_event_destination_request_validation() {
        let request = CreateConfigurationSetEventDestinationRequest {
            configuration_set_name: "marketing".to_string(),
            event_destination: EventDestination::new(
                "to-sns",
                SnsDestination {
                    topic_arn: String::new(),
                },
            ),
        };
        let fields: Vec<String> = violations(&request, &ModelConfig::default())
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "event_destination.matching_event_types",
                "event_destination.sns_destination.topic_arn",
            ]
        );
    }

    #[test]
    fn test_tracking_options_redirect_domain() {
        let request = UpdateConfigurationSetTrackingOptionsRequest {
            configuration_set_name: "marketing".to_string(),
            tracking_options: TrackingOptions::with_redirect_domain("https://track.example.com"),
        };
        let found = violations(&request, &ModelConfig::default());
        assert_eq!(found[0].field, "tracking_options.custom_redirect_domain");
    }
}
