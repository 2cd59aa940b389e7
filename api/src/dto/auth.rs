use serde::{Deserialize, Serialize};
use validator::Validate;

use rn_core::{AccountView, PaymentOrder, PaymentVerification, PendingSignup, Role, SignupRequest, ValidationError};

/// Body of `POST /api/v1/auth/signup`
///
/// Missing fields deserialize as empty strings so the service reports them
/// as `REQUIRED_FIELD` instead of a generic parse failure.
#[derive(Clone, Deserialize, Validate)]
pub struct SignupRequestDto {
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub username: String,

    /// bcrypt reads at most 72 bytes; the service enforces the byte limit
    #[serde(default)]
    #[validate(length(max = 72))]
    pub password: String,

    /// "user" or "admin"
    #[serde(default)]
    #[validate(length(max = 16))]
    pub role: String,
}

impl SignupRequestDto {
    pub fn into_request(self) -> Result<SignupRequest, ValidationError> {
        Ok(SignupRequest {
            role: parse_role(&self.role)?,
            email: self.email,
            username: self.username,
            password: self.password,
        })
    }
}

impl std::fmt::Debug for SignupRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequestDto")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Body of `POST /api/v1/auth/verify-payment`
///
/// The signup fields are the `userData` echoed back from the signup
/// response, plus the three values the checkout widget hands the client.
#[derive(Clone, Deserialize, Validate)]
pub struct VerifyPaymentRequestDto {
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 32))]
    pub username: String,

    /// bcrypt reads at most 72 bytes; the service enforces the byte limit
    #[serde(default)]
    #[validate(length(max = 72))]
    pub password: String,

    #[serde(default)]
    #[validate(length(max = 16))]
    pub role: String,

    #[serde(default)]
    #[validate(length(max = 64))]
    pub payment_id: String,

    #[serde(default)]
    #[validate(length(max = 64))]
    pub order_id: String,

    #[serde(default)]
    #[validate(length(max = 128))]
    pub signature: String,
}

impl VerifyPaymentRequestDto {
    pub fn into_verification(self) -> Result<PaymentVerification, ValidationError> {
        Ok(PaymentVerification {
            role: parse_role(&self.role)?,
            email: self.email,
            username: self.username,
            password: self.password,
            payment_id: self.payment_id,
            order_id: self.order_id,
            signature: self.signature,
        })
    }
}

impl std::fmt::Debug for VerifyPaymentRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerifyPaymentRequestDto")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("payment_id", &self.payment_id)
            .field("order_id", &self.order_id)
            .finish()
    }
}

/// Body of `POST /api/v1/auth/login`
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequestDto {
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,

    /// bcrypt reads at most 72 bytes; the service enforces the byte limit
    #[serde(default)]
    #[validate(length(max = 72))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequestDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequestDto")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Account plus session token, returned by free signup, verification and login
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    /// Present only on the free signup path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub user: AccountView,
    pub token: String,
}

/// Paid signup: checkout order plus the fields to echo back at verification
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequiredResponse {
    pub order: PaymentOrder,
    #[serde(rename = "userData")]
    pub user_data: PendingSignup,
}

/// Body of `GET /api/v1/auth/me`
#[derive(Debug, Clone, Serialize)]
pub struct CurrentAccountResponse {
    pub user: AccountView,
}

fn parse_role(role: &str) -> Result<Role, ValidationError> {
    let role = role.trim();
    if role.is_empty() {
        return Err(ValidationError::required("role"));
    }
    role.parse().map_err(|_| ValidationError::UnknownRole {
        role: role.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_dto(role: &str) -> SignupRequestDto {
        SignupRequestDto {
            email: "owner@example.com".to_string(),
            username: "owner".to_string(),
            password: "hunter22".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_role_is_parsed_case_insensitively() {
        let request = signup_dto("Admin").into_request().unwrap();
        assert_eq!(request.role, Role::Admin);
    }

    #[test]
    fn test_unknown_and_missing_roles() {
        assert_eq!(
            signup_dto("landlord").into_request().unwrap_err(),
            ValidationError::UnknownRole {
                role: "landlord".to_string()
            }
        );
        assert_eq!(
            signup_dto("  ").into_request().unwrap_err(),
            ValidationError::required("role")
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let dto: VerifyPaymentRequestDto = serde_json::from_str(r#"{"role": "admin"}"#).unwrap();
        assert!(dto.payment_id.is_empty());
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_oversized_username_fails_validation() {
        let mut dto = signup_dto("user");
        dto.username = "x".repeat(40);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", signup_dto("user"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn test_password_longer_than_bcrypt_input_fails_validation() {
        let mut dto = signup_dto("user");
        dto.password = "p".repeat(72);
        assert!(dto.validate().is_ok());

        dto.password = "p".repeat(73);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
