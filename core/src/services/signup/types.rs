//! Inputs to the signup flow

use crate::domain::entities::Role;

/// Request to start a signup
#[derive(Clone)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Checkout receipt plus the echoed signup fields
#[derive(Clone)]
pub struct PaymentVerification {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Gateway payment id; becomes the account's transaction id
    pub payment_id: String,
    /// Gateway order id the payment was made against
    pub order_id: String,
    /// Hex HMAC-SHA256 over `order_id|payment_id`
    pub signature: String,
}

impl PaymentVerification {
    pub(crate) fn as_signup(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role,
        }
    }
}

impl std::fmt::Debug for PaymentVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentVerification")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .field("payment_id", &self.payment_id)
            .field("order_id", &self.order_id)
            .field("signature", &"<redacted>")
            .finish()
    }
}
