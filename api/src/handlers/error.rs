use std::fmt;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use tracing::{error, warn};
use validator::ValidationErrors;

use rn_core::{DomainError, SessionError, ValidationError};
use rn_shared::ErrorResponse;

/// Error returned by every handler and by the session middleware
///
/// Renders as `{"success": false, "error": CODE, "message": ...}` with the
/// status mapped from the underlying failure.
#[derive(Debug)]
pub enum ApiError {
    /// Failure reported by a core service
    Domain(DomainError),
    /// Request body exceeded the bounds declared on its DTO
    InvalidRequest(ValidationErrors),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Domain(e) => write!(f, "{}", e),
            ApiError::InvalidRequest(e) => write!(f, "Invalid request: {}", e),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        ApiError::Domain(error)
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        ApiError::Domain(error.into())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidRequest(errors)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => status_for(e),
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Domain(e) => domain_error_response(e),
            ApiError::InvalidRequest(errors) => validation_errors_response(errors),
        }
    }
}

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::AlreadyExists { .. } => StatusCode::CONFLICT,
        DomainError::GatewayUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::SignatureInvalid => StatusCode::BAD_REQUEST,
        DomainError::Gateway { .. } => StatusCode::BAD_GATEWAY,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Unauthorized(SessionError::TokenGenerationFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Convert a domain error into its JSON response
///
/// Server-side failures are logged in full and answered with a generic
/// message.
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    let message = match error {
        DomainError::Internal { .. } => {
            error!(error = %error, "Internal error while handling request");
            "An internal error occurred".to_string()
        }
        DomainError::Gateway { .. } => {
            error!(error = %error, "Payment gateway call failed");
            "Payment gateway request failed, please try again".to_string()
        }
        DomainError::GatewayUnavailable => {
            warn!("Paid signup attempted without a configured payment gateway");
            error.to_string()
        }
        _ => error.to_string(),
    };

    HttpResponse::build(status).json(ErrorResponse::new(error.error_code(), message))
}

/// 400 response listing the offending fields
pub fn validation_errors_response(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
    fields.sort_unstable();

    HttpResponse::BadRequest().json(
        ErrorResponse::new("VALIDATION_ERROR", "Request validation failed").add_detail("fields", fields),
    )
}

/// Replaces actix's plain-text response for unreadable JSON bodies
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body is too large".to_string()
        }
        other => format!("Malformed JSON body: {}", other),
    };
    let response = HttpResponse::BadRequest().json(ErrorResponse::new("INVALID_REQUEST", message));
    InternalError::from_response(err, response).into()
}

/// JSON 404 for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ValidationError::InvalidEmail.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_for(&DomainError::already_exists("email")), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&DomainError::GatewayUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(status_for(&DomainError::SignatureInvalid), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&SessionError::TokenExpired.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(status_for(&DomainError::forbidden("no")), StatusCode::FORBIDDEN);
        assert_eq!(
            status_for(&DomainError::Gateway {
                message: "boom".to_string()
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&DomainError::internal("db down")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_internal_details_are_hidden() {
        let response = domain_error_response(&DomainError::internal("password=secret"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "INTERNAL_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("secret"));
    }

    #[actix_web::test]
    async fn test_conflict_body_names_field() {
        let body = body_json(domain_error_response(&DomainError::already_exists("username"))).await;
        assert_eq!(body["error"], "ALREADY_EXISTS");
        assert!(body["message"].as_str().unwrap().contains("username"));
    }
}
