//! Leaf error types grouped under [`DomainError`](super::DomainError)

use thiserror::Error;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Unknown role: {role}")]
    UnknownRole { role: String },

    #[error("Role is not open for signup: {role}")]
    RoleNotAllowed { role: String },

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength { field: String, min: usize, max: usize },

    #[error("Invalid amount: {field} ({reason})")]
    InvalidAmount { field: String, reason: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::UnknownRole { .. } => "UNKNOWN_ROLE",
            ValidationError::RoleNotAllowed { .. } => "ROLE_NOT_ALLOWED",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
            ValidationError::InvalidAmount { .. } => "INVALID_AMOUNT",
            ValidationError::BusinessRuleViolation { .. } => "BUSINESS_RULE_VIOLATION",
        }
    }
}

/// Session and credential errors, all reported as 401
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session token missing")]
    MissingToken,

    #[error("Session token expired")]
    TokenExpired,

    #[error("Invalid session token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl SessionError {
    pub fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidCredentials => "INVALID_CREDENTIALS",
            SessionError::MissingToken => "MISSING_TOKEN",
            SessionError::TokenExpired => "TOKEN_EXPIRED",
            SessionError::InvalidToken => "INVALID_TOKEN",
            SessionError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}
