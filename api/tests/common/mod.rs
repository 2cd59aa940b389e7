//! Shared wiring for API integration tests: in-memory repositories, the mock
//! gateway and a fast bcrypt cost.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use serde_json::{json, Value};

use rn_api::AppState;
use rn_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryPricingRepository,
    InMemorySignupOrderRepository,
};
use rn_core::services::payment::{MockPaymentGateway, PaymentGateway};
use rn_core::{
    Account, PricingService, Role, SessionConfig, SessionService, SignupPrice, SignupService,
    SignupServiceConfig,
};

pub const KEY_ID: &str = "rzp_test_key";
pub const KEY_SECRET: &str = "rzp_test_secret";

pub type TestState =
    AppState<InMemoryAccountRepository, InMemoryPricingRepository, InMemorySignupOrderRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub sessions: web::Data<SessionService>,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub pricing: Arc<InMemoryPricingRepository>,
    pub gateway: Arc<MockPaymentGateway>,
}

/// Admin ₹100, user free, gateway configured
pub fn context() -> TestContext {
    build(true)
}

pub fn context_without_gateway() -> TestContext {
    build(false)
}

fn build(with_gateway: bool) -> TestContext {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let pricing = Arc::new(InMemoryPricingRepository::with_prices([
        (Role::Admin, SignupPrice::Paid(10000)),
        (Role::User, SignupPrice::Free),
    ]));
    let orders = Arc::new(InMemorySignupOrderRepository::new());
    let gateway = Arc::new(MockPaymentGateway::new(KEY_ID, KEY_SECRET));
    let sessions = Arc::new(SessionService::new(SessionConfig {
        jwt_secret: "api-test-secret".to_string(),
        ..SessionConfig::default()
    }));

    let dyn_gateway: Option<Arc<dyn PaymentGateway>> = if with_gateway {
        Some(gateway.clone())
    } else {
        None
    };

    let signup_service = Arc::new(SignupService::new(
        accounts.clone(),
        pricing.clone(),
        orders,
        dyn_gateway,
        sessions.clone(),
        SignupServiceConfig {
            bcrypt_cost: 4,
            ..SignupServiceConfig::default()
        },
    ));

    TestContext {
        state: web::Data::new(AppState {
            signup_service,
            pricing_service: Arc::new(PricingService::new(pricing.clone())),
        }),
        sessions: web::Data::from(sessions),
        accounts,
        pricing,
        gateway,
    }
}

impl TestContext {
    /// Inserts an account directly and returns a session token for it
    pub async fn seed_account(&self, role: Role, email: &str, username: &str) -> (Account, String) {
        let account = Account::new_free(
            email.to_string(),
            username.to_string(),
            "$2b$04$unusedunusedunusedunuseduOq5a0yQ3dDq9rX7t2b2cC4m8GZ0u".to_string(),
            role,
        );
        let account = self.accounts.create(account).await.unwrap();
        let token = self.sessions.issue(&account).unwrap();
        (account, token)
    }
}

pub fn signup_body(email: &str, username: &str, role: &str) -> Value {
    json!({
        "email": email,
        "username": username,
        "password": "secret123",
        "role": role,
    })
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
