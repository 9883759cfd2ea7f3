//! Integration tests for service error mapping.

use integrations_aws_ses_model::error::{
    map_service_error, parse_error_response, AwsErrorResponse, ServiceErrorKind,
};
use integrations_aws_ses_model::SesError;
use rstest::rstest;

#[rstest]
#[case("AlreadyExists")]
#[case("CannotDelete")]
#[case("ConfigurationSetDoesNotExist")]
#[case("CustomVerificationEmailTemplateDoesNotExist")]
#[case("CustomVerificationEmailTemplateAlreadyExists")]
#[case("CustomVerificationEmailInvalidContent")]
#[case("FromEmailAddressNotVerified")]
#[case("InvalidLambdaFunction")]
#[case("InvalidS3Configuration")]
#[case("InvalidSnsTopic")]
#[case("InvalidPolicy")]
#[case("InvalidTrackingOptions")]
#[case("EventDestinationAlreadyExists")]
#[case("LimitExceeded")]
#[case("MessageRejected")]
#[case("RuleDoesNotExist")]
#[case("RuleSetDoesNotExist")]
#[case("TemplateDoesNotExist")]
#[case("ProductionAccessNotGranted")]
#[case("Throttling")]
fn test_known_code_maps_to_itself(#[case] code: &str) {
    // Arrange
    let doc = AwsErrorResponse::new(code, "message");

    // Act
    let error = map_service_error(&doc, 400);

    // Assert
    assert_eq!(error.error_code(), code);
    assert!(!matches!(error.kind, ServiceErrorKind::Unknown { .. }));
}

#[rstest]
#[case("MailFromDomainNotVerifiedException")]
#[case("TrackingOptionsAlreadyExistsException")]
#[case("TrackingOptionsDoesNotExistException")]
#[case("AccountSendingPausedException")]
#[case("ConfigurationSetSendingPausedException")]
fn test_exception_suffixed_codes(#[case] code: &str) {
    let error = map_service_error(&AwsErrorResponse::new(code, "message"), 400);

    assert_eq!(error.error_code(), code);
    assert!(!matches!(error.kind, ServiceErrorKind::Unknown { .. }));
}

#[test]
fn test_from_email_address_not_verified_carries_address() {
    // Arrange
    let body = r#"{
        "Code": "FromEmailAddressNotVerified",
        "Message": "Email address is not verified.",
        "FromEmailAddress": "sender@example.com",
        "RequestId": "req-1"
    }"#;

    // Act
    let error: SesError = map_service_error(&parse_error_response(body).unwrap(), 400).into();

    // Assert
    assert_eq!(error.error_code(), Some("FromEmailAddressNotVerified"));
    assert_eq!(error.request_id(), Some("req-1"));
    assert!(!error.is_retryable());
    match error {
        SesError::Service(service) => {
            assert_eq!(service.from_email_address(), Some("sender@example.com"));
        }
        other => panic!("Expected Service error, got {:?}", other),
    }
}

#[test]
fn test_namespaced_type_is_stripped() {
    let body = r#"{"__type": "com.amazonaws.ses#RuleSetDoesNotExist", "message": "gone", "Name": "inbound"}"#;

    let error = map_service_error(&parse_error_response(body).unwrap(), 400);

    assert_eq!(
        error.kind,
        ServiceErrorKind::RuleSetDoesNotExist {
            name: Some("inbound".to_string())
        }
    );
    assert_eq!(error.message, "gone");
}

#[test]
fn test_retryable_only_for_throttling_and_server_errors() {
    let throttled = map_service_error(&AwsErrorResponse::new("Throttling", "slow down"), 400);
    let server = map_service_error(&AwsErrorResponse::new("InternalFailure", "oops"), 500);
    let rejected = map_service_error(&AwsErrorResponse::new("MessageRejected", "no"), 400);

    assert!(throttled.is_retryable());
    assert!(server.is_retryable());
    assert!(!rejected.is_retryable());
}

#[test]
fn test_unknown_code_preserved() {
    let error = map_service_error(&AwsErrorResponse::new("InternalFailure", "oops"), 500);

    assert_eq!(
        error.kind,
        ServiceErrorKind::Unknown {
            code: "InternalFailure".to_string()
        }
    );
    assert_eq!(error.error_code(), "InternalFailure");
}

#[test]
fn test_malformed_document() {
    let err = parse_error_response("<ErrorResponse/>").unwrap_err();

    assert!(matches!(err, SesError::Serialization { .. }));
}
