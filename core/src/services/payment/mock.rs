//! In-process payment gateway for tests and local runs

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::errors::{DomainError, DomainResult};

use super::gateway::{CreateOrderRequest, GatewayOrder, PaymentGateway};
use super::signature::{compute_signature, verify_signature};

/// Gateway that mints sequential order ids and signs with a local secret
pub struct MockPaymentGateway {
    key_id: String,
    key_secret: String,
    orders_created: AtomicUsize,
    fail_orders: AtomicBool,
}

impl MockPaymentGateway {
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            orders_created: AtomicUsize::new(0),
            fail_orders: AtomicBool::new(false),
        }
    }

    /// Make subsequent `create_order` calls fail with a gateway error
    pub fn set_failing(&self, failing: bool) {
        self.fail_orders.store(failing, Ordering::SeqCst);
    }

    /// Number of orders created so far
    pub fn orders_created(&self) -> usize {
        self.orders_created.load(Ordering::SeqCst)
    }

    /// Signature the checkout client would receive for a payment
    pub fn sign(&self, order_id: &str, payment_id: &str) -> String {
        compute_signature(&self.key_secret, order_id, payment_id)
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    fn key_id(&self) -> &str {
        &self.key_id
    }

    async fn create_order(&self, request: CreateOrderRequest) -> DomainResult<GatewayOrder> {
        if self.fail_orders.load(Ordering::SeqCst) {
            return Err(DomainError::Gateway {
                message: "order creation refused".to_string(),
            });
        }
        let n = self.orders_created.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(GatewayOrder {
            id: format!("order_mock_{}", n),
            amount: request.amount,
            currency: request.currency,
            receipt: Some(request.receipt),
            status: Some("created".to_string()),
        })
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        verify_signature(&self.key_secret, order_id, payment_id, signature)
    }
}
