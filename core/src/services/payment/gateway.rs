//! Payment gateway trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DomainResult;

/// Order creation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    /// Amount in minor currency units
    pub amount: i64,
    pub currency: String,
    /// Merchant reference, e.g. `signup_admin_1700000000`
    pub receipt: String,
}

/// Order as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// External payment gateway
///
/// Implementations hold the merchant credentials. A gateway instance only
/// exists when both key id and secret are configured.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Public key id handed to the checkout client
    fn key_id(&self) -> &str;

    /// Create a payment order
    ///
    /// # Returns
    /// * `Ok(GatewayOrder)` - Order created
    /// * `Err(DomainError::Gateway)` - Upstream rejected or was unreachable
    async fn create_order(&self, request: CreateOrderRequest) -> DomainResult<GatewayOrder>;

    /// Check a checkout signature over `order_id|payment_id`
    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;
}
