//! Shared fixtures for signup service tests

use std::sync::Arc;

use crate::domain::entities::{Role, SignupPrice};
use crate::repositories::{
    InMemoryAccountRepository, InMemoryPricingRepository, InMemorySignupOrderRepository,
};
use crate::services::payment::{MockPaymentGateway, PaymentGateway};
use crate::services::session::{SessionConfig, SessionService};
use crate::services::signup::{PaymentVerification, SignupRequest, SignupService, SignupServiceConfig};

pub const KEY_ID: &str = "rzp_test_key";
pub const KEY_SECRET: &str = "rzp_test_secret";

pub type TestSignupService =
    SignupService<InMemoryAccountRepository, InMemoryPricingRepository, InMemorySignupOrderRepository>;

pub struct Harness {
    pub service: TestSignupService,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub pricing: Arc<InMemoryPricingRepository>,
    pub orders: Arc<InMemorySignupOrderRepository>,
    pub gateway: Arc<MockPaymentGateway>,
    pub sessions: Arc<SessionService>,
}

fn config() -> SignupServiceConfig {
    SignupServiceConfig {
        bcrypt_cost: 4,
        ..SignupServiceConfig::default()
    }
}

/// Admin ₹100, user free, gateway configured
pub fn harness() -> Harness {
    build(
        [(Role::Admin, SignupPrice::Paid(10000)), (Role::User, SignupPrice::Free)],
        true,
    )
}

pub fn harness_without_gateway() -> Harness {
    build([(Role::Admin, SignupPrice::Paid(10000))], false)
}

fn build<const N: usize>(prices: [(Role, SignupPrice); N], with_gateway: bool) -> Harness {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let pricing = Arc::new(InMemoryPricingRepository::with_prices(prices));
    let orders = Arc::new(InMemorySignupOrderRepository::new());
    let gateway = Arc::new(MockPaymentGateway::new(KEY_ID, KEY_SECRET));
    let sessions = Arc::new(SessionService::new(SessionConfig {
        jwt_secret: "signup-test-secret".to_string(),
        ..SessionConfig::default()
    }));

    let dyn_gateway: Option<Arc<dyn PaymentGateway>> = if with_gateway {
        Some(gateway.clone())
    } else {
        None
    };

    let service = SignupService::new(
        accounts.clone(),
        pricing.clone(),
        orders.clone(),
        dyn_gateway,
        sessions.clone(),
        config(),
    );

    Harness {
        service,
        accounts,
        pricing,
        orders,
        gateway,
        sessions,
    }
}

pub fn signup_request(email: &str, username: &str, role: Role) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        username: username.to_string(),
        password: "secret123".to_string(),
        role,
    }
}

/// Verification as the checkout client would send it, correctly signed
pub fn signed_verification(
    gateway: &MockPaymentGateway,
    request: &SignupRequest,
    order_id: &str,
    payment_id: &str,
) -> PaymentVerification {
    PaymentVerification {
        email: request.email.clone(),
        username: request.username.clone(),
        password: request.password.clone(),
        role: request.role,
        payment_id: payment_id.to_string(),
        order_id: order_id.to_string(),
        signature: gateway.sign(order_id, payment_id),
    }
}
