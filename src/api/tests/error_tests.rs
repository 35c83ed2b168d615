//! Tests for the error envelope.

use crate::access::domain::{AccessDenied, Authorization, Requirement};
use crate::api::{ApiError, ApiErrorKind};
use rstest::rstest;

#[rstest]
#[case(ApiErrorKind::NotFound, 404)]
#[case(ApiErrorKind::DuplicatedEmail, 409)]
#[case(ApiErrorKind::InvalidData, 400)]
#[case(ApiErrorKind::WrongCredentials, 401)]
#[case(ApiErrorKind::Unauthenticated, 401)]
#[case(ApiErrorKind::Unauthorized, 403)]
#[case(ApiErrorKind::Internal, 500)]
fn kinds_map_to_status_codes(#[case] kind: ApiErrorKind, #[case] status: u16) {
    assert_eq!(ApiError::new(kind, "x").status(), status);
}

#[rstest]
fn envelope_serializes_message_and_type() {
    let error = ApiError::new(ApiErrorKind::DuplicatedEmail, "Email Duplicated");

    let json = serde_json::to_value(&error).expect("serialization should succeed");

    assert_eq!(
        json,
        serde_json::json!({ "message": "Email Duplicated", "type": "DUPLICATED_EMAIL" })
    );
}

#[rstest]
fn access_denials_map_to_auth_kinds() {
    let anonymous = ApiError::from(AccessDenied::Unauthenticated);
    let forbidden = ApiError::from(AccessDenied::Unauthorized {
        required: Requirement::from(Authorization::EditUsers),
    });

    assert_eq!(anonymous.kind(), ApiErrorKind::Unauthenticated);
    assert_eq!(forbidden.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(forbidden.status(), 403);
}

#[rstest]
fn malformed_json_is_invalid_data() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid JSON");

    let error = ApiError::from(parse_error);

    assert_eq!(error.kind(), ApiErrorKind::InvalidData);
}
