//! In-flight signup records for the paid path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Role;

/// Signup fields returned with a payment order and echoed back at verification
///
/// Untrusted on the way back in: every field is validated again before an
/// account is created. The password stays plaintext until it is hashed at
/// account creation.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingSignup {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl std::fmt::Debug for PendingSignup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingSignup")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Gateway order handed to the client for checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Gateway order id
    pub order_id: String,
    /// Amount in minor units
    pub amount: i64,
    /// ISO currency code
    pub currency: String,
    /// Public gateway key id for the checkout widget
    pub key_id: String,
}

/// Server-side record of an order issued for a signup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupOrder {
    /// Gateway order id; primary key
    pub order_id: String,
    /// Role the order was priced for
    pub role: Role,
    /// Normalized email the order was issued to
    pub email: String,
    pub username: String,
    /// Amount charged in minor units
    pub amount_minor: i64,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

impl SignupOrder {
    pub fn new(order: &PaymentOrder, pending: &PendingSignup) -> Self {
        Self {
            order_id: order.order_id.clone(),
            role: pending.role,
            email: pending.email.clone(),
            username: pending.username.clone(),
            amount_minor: order.amount,
            currency: order.currency.clone(),
            created_at: Utc::now(),
        }
    }

    /// Whether the verification request refers to the same signup
    pub fn matches(&self, email: &str, username: &str, role: Role) -> bool {
        self.email == email && self.username == username && self.role == role
    }
}
