//! Unit tests for domain error types

use crate::errors::{DomainError, SessionError, ValidationError};

#[test]
fn test_validation_error_bridges_into_domain_error() {
    let error: DomainError = ValidationError::required("email").into();
    assert_eq!(error.error_code(), "REQUIRED_FIELD");
    assert!(error.to_string().contains("email"));
    assert!(error.is_client_error());
}

#[test]
fn test_session_error_bridges_into_unauthorized() {
    let error: DomainError = SessionError::TokenExpired.into();
    assert!(matches!(error, DomainError::Unauthorized(SessionError::TokenExpired)));
    assert_eq!(error.error_code(), "TOKEN_EXPIRED");
}

#[test]
fn test_payment_error_codes() {
    assert_eq!(DomainError::SignatureInvalid.error_code(), "SIGNATURE_INVALID");
    assert_eq!(DomainError::GatewayUnavailable.error_code(), "GATEWAY_UNAVAILABLE");
    assert!(!DomainError::GatewayUnavailable.is_client_error());
    assert!(DomainError::SignatureInvalid.is_client_error());
}

#[test]
fn test_already_exists_message() {
    let error = DomainError::already_exists("email");
    assert_eq!(error.error_code(), "ALREADY_EXISTS");
    assert_eq!(error.to_string(), "Account already exists: email is taken");
}
