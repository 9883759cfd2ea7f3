//! Integration tests for constrained enumerations and their setters.

use integrations_aws_ses_model::operations::{
    DescribeConfigurationSetRequest, ListIdentitiesRequest,
    SetIdentityHeadersInNotificationsEnabledRequest, SetIdentityMailFromDomainRequest,
};
use integrations_aws_ses_model::types::{
    BehaviorOnMxFailure, BounceType, BouncedRecipientInfo, BulkEmailDestinationStatus,
    BulkEmailStatus, CloudWatchDimensionConfiguration, ConfigurationSetAttribute,
    CustomMailFromStatus, DeliveryOptions, DimensionValueSource, DsnAction, EventDestination,
    EventType, IdentityMailFromDomainAttributes, IdentityType, InvocationType, LambdaAction,
    NotificationType, ReceiptFilter, ReceiptFilterPolicy, RecipientDsnFields, SnsAction,
    SnsActionEncoding, SnsDestination, StopAction, StopScope, TlsPolicy, VerificationStatus,
};
use integrations_aws_ses_model::SesError;
use rstest::rstest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::str::FromStr;

/// Every literal parses back to its variant and serializes as itself.
fn assert_literals<E>(all: &[E])
where
    E: Copy + Debug + PartialEq + ToString + FromStr<Err = SesError> + Serialize + DeserializeOwned,
{
    for variant in all {
        let literal = variant.to_string();
        assert_eq!(literal.parse::<E>().unwrap(), *variant);
        assert_eq!(
            serde_json::to_value(variant).unwrap(),
            serde_json::Value::String(literal.clone())
        );
        let decoded: E = serde_json::from_value(serde_json::Value::String(literal)).unwrap();
        assert_eq!(decoded, *variant);
    }
}

#[test]
fn test_every_enumeration_literal() {
    assert_literals(BounceType::ALL);
    assert_literals(DsnAction::ALL);
    assert_literals(DimensionValueSource::ALL);
    assert_literals(VerificationStatus::ALL);
    assert_literals(NotificationType::ALL);
    assert_literals(IdentityType::ALL);
    assert_literals(EventType::ALL);
    assert_literals(CustomMailFromStatus::ALL);
    assert_literals(BehaviorOnMxFailure::ALL);
    assert_literals(InvocationType::ALL);
    assert_literals(SnsActionEncoding::ALL);
    assert_literals(StopScope::ALL);
    assert_literals(TlsPolicy::ALL);
    assert_literals(ReceiptFilterPolicy::ALL);
    assert_literals(ConfigurationSetAttribute::ALL);
    assert_literals(BulkEmailStatus::ALL);
}

#[test]
fn test_bounce_type_setters_equivalent() {
    for bounce_type in BounceType::ALL {
        let info = BouncedRecipientInfo::new("a@example.com", BounceType::Undefined);
        assert_eq!(
            info.clone().with_bounce_type(*bounce_type),
            info.try_bounce_type(bounce_type.as_str()).unwrap()
        );
    }
}

#[test]
fn test_dsn_action_setters_equivalent() {
    for action in DsnAction::ALL {
        let fields = RecipientDsnFields::new(DsnAction::Failed, "5.0.0");
        assert_eq!(
            fields.clone().with_action(*action),
            fields.try_action(action.as_str()).unwrap()
        );
    }
}

#[test]
fn test_invocation_type_setters_equivalent() {
    for invocation_type in InvocationType::ALL {
        let action = LambdaAction::new("arn:aws:lambda:us-east-1:123456789012:function:f");
        assert_eq!(
            action.clone().with_invocation_type(*invocation_type),
            action.try_invocation_type(invocation_type.as_str()).unwrap()
        );
    }
}

#[test]
fn test_sns_encoding_setters_equivalent() {
    for encoding in SnsActionEncoding::ALL {
        let action = SnsAction::new("arn:aws:sns:us-east-1:123456789012:t");
        assert_eq!(
            action.clone().with_encoding(*encoding),
            action.try_encoding(encoding.as_str()).unwrap()
        );
    }
}

#[test]
fn test_tls_policy_setters_equivalent() {
    for policy in TlsPolicy::ALL {
        assert_eq!(
            DeliveryOptions::new().with_tls_policy(*policy),
            DeliveryOptions::new().try_tls_policy(policy.as_str()).unwrap()
        );
    }
}

#[test]
fn test_dimension_value_source_setters_equivalent() {
    for source in DimensionValueSource::ALL {
        let expected = CloudWatchDimensionConfiguration::new("campaign", *source, "none");
        let parsed =
            CloudWatchDimensionConfiguration::new("campaign", DimensionValueSource::MessageTag, "none")
                .try_dimension_value_source(source.as_str())
                .unwrap();
        assert_eq!(expected, parsed);
    }
}

#[test]
fn test_event_type_setters_equivalent() {
    for event_type in EventType::ALL {
        let destination = EventDestination::new(
            "to-sns",
            SnsDestination {
                topic_arn: "arn:aws:sns:us-east-1:123456789012:t".to_string(),
            },
        );
        assert_eq!(
            destination.clone().add_event_type(*event_type),
            destination.try_add_event_type(event_type.as_str()).unwrap()
        );
    }
}

#[test]
fn test_identity_type_setters_equivalent() {
    for identity_type in IdentityType::ALL {
        assert_eq!(
            ListIdentitiesRequest::default().with_identity_type(*identity_type),
            ListIdentitiesRequest::default()
                .try_identity_type(identity_type.as_str())
                .unwrap()
        );
    }
}

#[test]
fn test_notification_type_setters_equivalent() {
    for notification_type in NotificationType::ALL {
        let expected =
            SetIdentityHeadersInNotificationsEnabledRequest::new("example.com", *notification_type, true);
        let parsed = SetIdentityHeadersInNotificationsEnabledRequest::new(
            "example.com",
            NotificationType::Bounce,
            true,
        )
        .try_notification_type(notification_type.as_str())
        .unwrap();
        assert_eq!(expected, parsed);
    }
}

#[test]
fn test_behavior_on_mx_failure_setters_equivalent() {
    for behavior in BehaviorOnMxFailure::ALL {
        let request = SetIdentityMailFromDomainRequest::new("example.com");
        assert_eq!(
            request.clone().with_behavior_on_mx_failure(*behavior),
            request.try_behavior_on_mx_failure(behavior.as_str()).unwrap()
        );
    }
}

#[test]
fn test_stop_scope_setters_equivalent() {
    for scope in StopScope::ALL {
        assert_eq!(
            StopAction::new().with_scope(*scope),
            StopAction::new().try_scope(scope.as_str()).unwrap()
        );
    }
    assert!(StopAction::new().try_scope("Rule").is_err());
}

#[test]
fn test_receipt_filter_policy_setters_equivalent() {
    for policy in ReceiptFilterPolicy::ALL {
        let filter = ReceiptFilter::new("office", ReceiptFilterPolicy::Block, "10.0.0.0/8");
        assert_eq!(
            filter.clone().with_policy(*policy),
            filter.try_policy(policy.as_str()).unwrap()
        );
    }
    assert!(ReceiptFilter::new("office", ReceiptFilterPolicy::Block, "10.0.0.0/8")
        .try_policy("allow")
        .is_err());
}

#[test]
fn test_configuration_set_attribute_setters_equivalent() {
    for attribute in ConfigurationSetAttribute::ALL {
        let request = DescribeConfigurationSetRequest::new("marketing");
        assert_eq!(
            request.clone().add_attribute(*attribute),
            request.try_add_attribute(attribute.as_str()).unwrap()
        );
    }

    let request = ConfigurationSetAttribute::ALL
        .iter()
        .try_fold(DescribeConfigurationSetRequest::new("marketing"), |request, attribute| {
            request.try_add_attribute(attribute.as_str())
        })
        .unwrap();
    assert_eq!(request, DescribeConfigurationSetRequest::all_sections("marketing"));
    assert!(DescribeConfigurationSetRequest::new("marketing")
        .try_add_attribute("EventDestinations")
        .is_err());
}

#[test]
fn test_custom_mail_from_status_decodes_in_attributes() {
    for status in CustomMailFromStatus::ALL {
        let json = serde_json::json!({
            "MailFromDomain": "bounce.example.com",
            "MailFromDomainStatus": status.as_str(),
            "BehaviorOnMXFailure": "UseDefaultValue"
        });
        let attributes: IdentityMailFromDomainAttributes =
            serde_json::from_value(json.clone()).unwrap();

        assert_eq!(attributes.mail_from_domain_status, *status);
        assert_eq!(serde_json::to_value(&attributes).unwrap(), json);
    }
}

#[test]
fn test_bulk_email_status_decodes_in_destination_status() {
    for status in BulkEmailStatus::ALL {
        let json = serde_json::json!({"Status": status.as_str(), "MessageId": "m-1"});
        let decoded: BulkEmailDestinationStatus = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(decoded.status, Some(*status));
        assert_eq!(decoded.is_success(), *status == BulkEmailStatus::Success);
        assert_eq!(serde_json::to_value(&decoded).unwrap(), json);
    }

    let unknown = serde_json::json!({"Status": "success"});
    assert!(serde_json::from_value::<BulkEmailDestinationStatus>(unknown).is_err());
}

#[rstest]
#[case("MessageToLarge")]
#[case("messagetoolarge")]
#[case("")]
#[case(" DoesNotExist")]
fn test_unknown_bounce_type_rejected(#[case] literal: &str) {
    let err = BouncedRecipientInfo::new("a@example.com", BounceType::Undefined)
        .try_bounce_type(literal)
        .unwrap_err();

    match err {
        SesError::UnknownVariant { type_name, value } => {
            assert_eq!(type_name, "BounceType");
            assert_eq!(value, literal);
        }
        other => panic!("Expected UnknownVariant, got {:?}", other),
    }
}

#[rstest]
#[case("Failed")]
#[case("bounced")]
fn test_unknown_dsn_action_rejected(#[case] literal: &str) {
    assert!(matches!(
        literal.parse::<DsnAction>(),
        Err(SesError::UnknownVariant { type_name: "DsnAction", .. })
    ));
}

#[rstest]
#[case("utf-8")]
#[case("UTF8")]
#[case("base64")]
fn test_sns_encoding_is_case_sensitive(#[case] literal: &str) {
    assert!(SnsAction::new("arn:aws:sns:us-east-1:123456789012:t")
        .try_encoding(literal)
        .is_err());
}

#[rstest]
#[case(EventType::RenderingFailure.to_string(), "renderingFailure")]
#[case(ConfigurationSetAttribute::ReputationOptions.to_string(), "reputationOptions")]
#[case(SnsActionEncoding::Utf8.to_string(), "UTF-8")]
#[case(DimensionValueSource::LinkTag.to_string(), "linkTag")]
fn test_wire_literals(#[case] actual: String, #[case] literal: &str) {
    assert_eq!(actual, literal);
}

#[test]
fn test_enum_into_string() {
    let literal: String = BounceType::ExceededQuota.into();
    assert_eq!(literal, "ExceededQuota");
    assert_eq!(
        BounceType::try_from("TemporaryFailure").unwrap(),
        BounceType::TemporaryFailure
    );
}
