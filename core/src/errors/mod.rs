//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{SessionError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Every failure a service can report maps onto exactly one variant here; the
/// HTTP layer turns each variant into a status code and a
/// `{success: false, message}` body.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed client input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Email or username already registered
    #[error("Account already exists: {field} is taken")]
    AlreadyExists { field: String },

    /// A paid signup was requested but no gateway credentials are configured
    #[error("Payment gateway is not configured")]
    GatewayUnavailable,

    /// Payment signature did not match the gateway secret
    #[error("Payment signature verification failed")]
    SignatureInvalid,

    /// The payment gateway rejected or failed a request
    #[error("Payment gateway error: {message}")]
    Gateway { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Missing, invalid or expired session, or wrong credentials
    #[error(transparent)]
    Unauthorized(#[from] SessionError),

    /// Authenticated but not allowed
    #[error("Forbidden: {reason}")]
    Forbidden { reason: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    pub fn already_exists(field: impl Into<String>) -> Self {
        DomainError::AlreadyExists {
            field: field.into(),
        }
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        DomainError::Forbidden {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation(inner) => inner.error_code(),
            DomainError::AlreadyExists { .. } => "ALREADY_EXISTS",
            DomainError::GatewayUnavailable => "GATEWAY_UNAVAILABLE",
            DomainError::SignatureInvalid => "SIGNATURE_INVALID",
            DomainError::Gateway { .. } => "GATEWAY_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Unauthorized(inner) => inner.error_code(),
            DomainError::Forbidden { .. } => "FORBIDDEN",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller caused the failure
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            DomainError::GatewayUnavailable
                | DomainError::Gateway { .. }
                | DomainError::Internal { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
