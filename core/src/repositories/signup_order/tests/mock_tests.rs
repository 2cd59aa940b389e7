//! Unit tests for the in-memory signup order repository

use crate::domain::entities::{PaymentOrder, PendingSignup, Role, SignupOrder};
use crate::repositories::signup_order::{
    InMemorySignupOrderRepository, SignupOrderRepository,
};

fn record(order_id: &str) -> SignupOrder {
    let order = PaymentOrder {
        order_id: order_id.to_string(),
        amount: 10000,
        currency: "INR".to_string(),
        key_id: "rzp_test_key".to_string(),
    };
    let pending = PendingSignup {
        email: "owner@example.com".to_string(),
        username: "owner".to_string(),
        password: "secret1".to_string(),
        role: Role::Admin,
    };
    SignupOrder::new(&order, &pending)
}

#[tokio::test]
async fn test_save_find_delete() {
    let repo = InMemorySignupOrderRepository::new();
    repo.save(record("order_1")).await.unwrap();

    let found = repo.find_by_order_id("order_1").await.unwrap().unwrap();
    assert_eq!(found.amount_minor, 10000);
    assert_eq!(found.role, Role::Admin);

    assert!(repo.delete("order_1").await.unwrap());
    assert!(!repo.delete("order_1").await.unwrap());
    assert!(repo.find_by_order_id("order_1").await.unwrap().is_none());
    assert!(repo.is_empty().await);
}
