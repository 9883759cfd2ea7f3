//! Receipt rule set, receipt rule and IP filter actions.

use super::EmptyResult;
use crate::types::{ReceiptFilter, ReceiptRule, ReceiptRuleSetMetadata};
use crate::validation::{Validate, Validator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Create an empty receipt rule set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReceiptRuleSetRequest {
    /// Rule set name.
    pub rule_set_name: String,
}

impl Validate for CreateReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.resource_name("rule_set_name", &self.rule_set_name);
    }
}

/// Delete a receipt rule set and its rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteReceiptRuleSetRequest {
    /// Rule set name.
    pub rule_set_name: String,
}

impl Validate for DeleteReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
    }
}

/// Copy a rule set and all its rules under a new name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CloneReceiptRuleSetRequest {
    /// Name of the copy.
    pub rule_set_name: String,
    /// Set to copy.
    pub original_rule_set_name: String,
}

impl Validate for CloneReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.resource_name("rule_set_name", &self.rule_set_name);
        v.require("original_rule_set_name", &self.original_rule_set_name);
        if self.rule_set_name == self.original_rule_set_name {
            v.push("rule_set_name", "must differ from the original");
        }
    }
}

/// Read a rule set and its rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReceiptRuleSetRequest {
    /// Rule set name.
    pub rule_set_name: String,
}

impl Validate for DescribeReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
    }
}

/// Result of `DescribeReceiptRuleSet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReceiptRuleSetResult {
    /// Name and creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReceiptRuleSetMetadata>,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<ReceiptRule>,
}

impl DescribeReceiptRuleSetResult {
    /// Find a rule by name.
    pub fn rule(&self, name: &str) -> Option<&ReceiptRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }
}

/// Read the active rule set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DescribeActiveReceiptRuleSetRequest {}

impl Validate for DescribeActiveReceiptRuleSetRequest {}

/// Result of `DescribeActiveReceiptRuleSet`; both members are absent when no set is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeActiveReceiptRuleSetResult {
    /// Name and creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReceiptRuleSetMetadata>,
    /// Rules in evaluation order.
    #[serde(default)]
    pub rules: Vec<ReceiptRule>,
}

/// Make a rule set active, or deactivate all with `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetActiveReceiptRuleSetRequest {
    /// Rule set to activate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set_name: Option<String>,
}

impl Validate for SetActiveReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require_if_set("rule_set_name", self.rule_set_name.as_deref());
    }
}

/// List rule sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListReceiptRuleSetsRequest {
    /// Pagination token from a previous call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl Validate for ListReceiptRuleSetsRequest {}

/// Result of `ListReceiptRuleSets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListReceiptRuleSetsResult {
    /// Rule sets on this page.
    #[serde(default)]
    pub rule_sets: Vec<ReceiptRuleSetMetadata>,
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Replace the evaluation order of every rule in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReorderReceiptRuleSetRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// Every rule of the set, in the new order.
    pub rule_names: Vec<String>,
}

impl Validate for ReorderReceiptRuleSetRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.require_non_empty("rule_names", &self.rule_names);
        let mut seen = HashSet::new();
        for (index, name) in self.rule_names.iter().enumerate() {
            if !seen.insert(name.as_str()) {
                v.push(
                    &format!("rule_names[{}]", index),
                    format!("'{}' appears more than once", name),
                );
            }
        }
    }
}

/// Add a rule to a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReceiptRuleRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// Insert after this rule; `None` inserts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// The rule.
    pub rule: ReceiptRule,
}

impl Validate for CreateReceiptRuleRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.require_if_set("after", self.after.as_deref());
        if self.after.as_deref() == Some(self.rule.name.as_str()) {
            v.push("after", "cannot place a rule after itself");
        }
        v.check("rule", &self.rule);
    }
}

/// Replace a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateReceiptRuleRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// The new rule; matched by name.
    pub rule: ReceiptRule,
}

impl Validate for UpdateReceiptRuleRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.check("rule", &self.rule);
    }
}

/// Delete a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteReceiptRuleRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// Rule name.
    pub rule_name: String,
}

impl Validate for DeleteReceiptRuleRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.require("rule_name", &self.rule_name);
    }
}

/// Read a rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReceiptRuleRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// Rule name.
    pub rule_name: String,
}

impl Validate for DescribeReceiptRuleRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.require("rule_name", &self.rule_name);
    }
}

/// Result of `DescribeReceiptRule`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReceiptRuleResult {
    /// The rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<ReceiptRule>,
}

/// Move a rule within its set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetReceiptRulePositionRequest {
    /// Rule set name.
    pub rule_set_name: String,
    /// Rule to move.
    pub rule_name: String,
    /// Place after this rule; `None` moves it first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl Validate for SetReceiptRulePositionRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("rule_set_name", &self.rule_set_name);
        v.require("rule_name", &self.rule_name);
        if self.after.as_deref() == Some(self.rule_name.as_str()) {
            v.push("after", "cannot place a rule after itself");
        }
    }
}

/// Create an IP address filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateReceiptFilterRequest {
    /// The filter.
    pub filter: ReceiptFilter,
}

impl Validate for CreateReceiptFilterRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.check("filter", &self.filter);
    }
}

/// Delete an IP address filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteReceiptFilterRequest {
    /// Filter name.
    pub filter_name: String,
}

impl Validate for DeleteReceiptFilterRequest {
    fn validate(&self, v: &mut Validator<'_>) {
        v.require("filter_name", &self.filter_name);
    }
}

/// List IP address filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListReceiptFiltersRequest {}

impl Validate for ListReceiptFiltersRequest {}

/// Result of `ListReceiptFilters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListReceiptFiltersResult {
    /// Every filter of the account.
    #[serde(default)]
    pub filters: Vec<ReceiptFilter>,
}

ses_operation! {
    CreateReceiptRuleSetRequest => "CreateReceiptRuleSet", EmptyResult;
    DeleteReceiptRuleSetRequest => "DeleteReceiptRuleSet", EmptyResult;
    CloneReceiptRuleSetRequest => "CloneReceiptRuleSet", EmptyResult;
    DescribeReceiptRuleSetRequest => "DescribeReceiptRuleSet", DescribeReceiptRuleSetResult;
    DescribeActiveReceiptRuleSetRequest => "DescribeActiveReceiptRuleSet", DescribeActiveReceiptRuleSetResult;
    SetActiveReceiptRuleSetRequest => "SetActiveReceiptRuleSet", EmptyResult;
    ListReceiptRuleSetsRequest => "ListReceiptRuleSets", ListReceiptRuleSetsResult;
    ReorderReceiptRuleSetRequest => "ReorderReceiptRuleSet", EmptyResult;
    CreateReceiptRuleRequest => "CreateReceiptRule", EmptyResult;
    UpdateReceiptRuleRequest => "UpdateReceiptRule", EmptyResult;
    DeleteReceiptRuleRequest => "DeleteReceiptRule", EmptyResult;
    DescribeReceiptRuleRequest => "DescribeReceiptRule", DescribeReceiptRuleResult;
    SetReceiptRulePositionRequest => "SetReceiptRulePosition", EmptyResult;
    CreateReceiptFilterRequest => "CreateReceiptFilter", EmptyResult;
    DeleteReceiptFilterRequest => "DeleteReceiptFilter", EmptyResult;
    ListReceiptFiltersRequest => "ListReceiptFilters", ListReceiptFiltersResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::types::{ReceiptAction, ReceiptFilterPolicy, TlsPolicy};
    use crate::validation::violations;

    #[test]
    fn test_create_rule_wire_layout() {
        let mut rule = ReceiptRule::new("store-and-notify");
        rule.tls_policy = Some(TlsPolicy::Require);
        rule.recipients = vec!["support@example.com".to_string()];
        rule.actions = vec![
            ReceiptAction::s3("inbound-mail"),
            ReceiptAction::sns("arn:aws:sns:us-east-1:123456789012:inbound"),
        ];
        let request = CreateReceiptRuleRequest {
            rule_set_name: "default".to_string(),
            after: None,
            rule,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Rule"]["TlsPolicy"], "Require");
        assert_eq!(json["Rule"]["Actions"][0]["S3Action"]["BucketName"], "inbound-mail");
        assert!(json["Rule"]["Actions"][1].get("SNSAction").is_some());
        assert!(json.get("After").is_none());
        assert!(violations(&request, &ModelConfig::default()).is_empty());
    }

    #[test]
    fn test_create_rule_nested_violation_path() {
        let mut rule = ReceiptRule::new("tagger");
        rule.actions = vec![ReceiptAction::add_header("X Bad", "1")];
        let request = CreateReceiptRuleRequest {
            rule_set_name: "default".to_string(),
            after: Some("tagger".to_string()),
            rule,
        };

        let fields: Vec<String> = violations(&request, &ModelConfig::default())
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(
            fields,
            vec!["after", "rule.actions[0].AddHeaderAction.header_name"]
        );
    }

    #[test]
    fn test_reorder_rejects_duplicates() {
        let request = ReorderReceiptRuleSetRequest {
            rule_set_name: "default".to_string(),
            rule_names: vec!["a".into(), "b".into(), "a".into()],
        };
        let found = violations(&request, &ModelConfig::default());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "rule_names[2]");
    }

    #[test]
    fn test_describe_rule_set_decode() {
        let json = r#"{
            "Metadata": {"Name": "default", "CreatedTimestamp": "2024-01-15T08:30:00Z"},
            "Rules": [
                {"Name": "first", "Enabled": true, "ScanEnabled": true,
                 "Actions": [{"StopAction": {"Scope": "RuleSet"}}]},
                {"Name": "second", "Enabled": false}
            ]
        }"#;
        let result: DescribeReceiptRuleSetResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.rules.len(), 2);
        assert!(result.rule("first").map_or(false, |r| r.scan_enabled));
        assert!(result.rule("missing").is_none());
        assert!(result.metadata.and_then(|m| m.created_timestamp).is_some());
    }

    #[test]
    fn test_describe_active_none() {
        let result: DescribeActiveReceiptRuleSetResult = serde_json::from_str("{}").unwrap();
        assert!(result.metadata.is_none());
        assert!(result.rules.is_empty());
    }

    #[test]
    fn test_set_active_deactivate() {
        let request = SetActiveReceiptRuleSetRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
        assert!(violations(&request, &ModelConfig::default()).is_empty());
    }

    #[test]
    fn test_create_filter() {
        let request = CreateReceiptFilterRequest {
            filter: ReceiptFilter::new("block-range", ReceiptFilterPolicy::Block, "192.0.2.0/24"),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Filter"]["IpFilter"]["Policy"], "Block");
        assert_eq!(json["Filter"]["IpFilter"]["Cidr"], "192.0.2.0/24");
        assert!(violations(&request, &ModelConfig::default()).is_empty());
    }
}
