//! Tests for payment verification

use crate::domain::entities::{PaymentPlan, PaymentStatus, Role, SignupPrice};
use crate::domain::value_objects::SignupOutcome;
use crate::errors::{DomainError, ValidationError};
use crate::repositories::{AccountRepository, PricingRepository, SignupOrderRepository};

use super::support::*;

async fn start_admin_signup(h: &Harness) -> (crate::services::signup::SignupRequest, String) {
    let request = signup_request("owner@example.com", "owner", Role::Admin);
    match h.service.initiate_signup(request.clone()).await.unwrap() {
        SignupOutcome::PaymentRequired { order, .. } => (request, order.order_id),
        other => panic!("expected payment required, got {:?}", other),
    }
}

#[tokio::test]
async fn test_valid_verification_creates_paid_account() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let session = h
        .service
        .verify_payment(signed_verification(&h.gateway, &request, &order_id, "pay_001"))
        .await
        .unwrap();

    assert!(session.user.paid);
    assert_eq!(session.user.payment_status, PaymentStatus::Completed);
    assert_eq!(session.user.payment_plan, PaymentPlan::Paid);
    assert_eq!(session.user.transaction_id.as_deref(), Some("pay_001"));
    assert_eq!(session.user.payment_amount, 100.0);
    assert_eq!(session.user.role, Role::Admin);

    let claims = h.sessions.verify(&session.token).unwrap();
    assert_eq!(claims.role, Role::Admin);

    // Consumed order is removed
    assert!(h.orders.find_by_order_id(&order_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_bad_signature_creates_nothing() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.signature = "0".repeat(64);

    let result = h.service.verify_payment(verification).await;
    assert!(matches!(result, Err(DomainError::SignatureInvalid)));
    assert_eq!(h.accounts.count().await, 0);
    assert!(h.orders.find_by_order_id(&order_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_signature_for_other_payment_rejected() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.payment_id = "pay_002".to_string();

    assert!(matches!(
        h.service.verify_payment(verification).await,
        Err(DomainError::SignatureInvalid)
    ));
}

#[tokio::test]
async fn test_replayed_verification_is_already_exists() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;
    let verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");

    h.service.verify_payment(verification.clone()).await.unwrap();
    let second = h.service.verify_payment(verification).await;

    assert!(matches!(second, Err(DomainError::AlreadyExists { .. })));
    assert_eq!(h.accounts.count().await, 1);
}

#[tokio::test]
async fn test_echoed_role_must_match_recorded_order() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.role = Role::User;

    let result = h.service.verify_payment(verification).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::BusinessRuleViolation { .. }))
    ));
    assert_eq!(h.accounts.count().await, 0);
}

#[tokio::test]
async fn test_echoed_email_must_match_recorded_order() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.email = "intruder@example.com".to_string();

    assert!(h.service.verify_payment(verification).await.is_err());
    assert!(h.accounts.find_by_email("intruder@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_recorded_amount_wins_over_later_price_change() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;
    h.pricing.set(Role::Admin, SignupPrice::Paid(25000)).await.unwrap();

    let session = h
        .service
        .verify_payment(signed_verification(&h.gateway, &request, &order_id, "pay_001"))
        .await
        .unwrap();

    assert_eq!(session.user.payment_amount, 100.0);
}

#[tokio::test]
async fn test_unrecorded_order_falls_back_to_current_price() {
    let h = harness();
    let request = signup_request("owner@example.com", "owner", Role::Admin);

    let session = h
        .service
        .verify_payment(signed_verification(&h.gateway, &request, "order_external", "pay_009"))
        .await
        .unwrap();

    assert!(session.user.paid);
    assert_eq!(session.user.payment_amount, 100.0);
}

#[tokio::test]
async fn test_missing_receipt_fields() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.signature = "  ".to_string();
    assert!(matches!(
        h.service.verify_payment(verification).await,
        Err(DomainError::Validation(ValidationError::RequiredField { .. }))
    ));

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.password = String::new();
    assert!(matches!(
        h.service.verify_payment(verification).await,
        Err(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn test_verification_without_gateway_is_unavailable() {
    let h = harness_without_gateway();
    let request = signup_request("owner@example.com", "owner", Role::Admin);
    let verification = signed_verification(&h.gateway, &request, "order_1", "pay_1");

    assert!(matches!(
        h.service.verify_payment(verification).await,
        Err(DomainError::GatewayUnavailable)
    ));
}

#[tokio::test]
async fn test_replay_with_other_identity_is_already_exists() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;
    let verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    h.service.verify_payment(verification.clone()).await.unwrap();

    // Order record is gone by now; the payment id must still be refused
    let mut replay = verification;
    replay.email = "attacker@example.com".to_string();
    replay.username = "attacker".to_string();

    let result = h.service.verify_payment(replay).await;
    match result {
        Err(DomainError::AlreadyExists { field }) => assert_eq!(field, "transaction_id"),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(h.accounts.count().await, 1);
    assert!(h.accounts.find_by_email("attacker@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_echoed_username_must_match_recorded_order() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;

    let mut verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");
    verification.username = "someone_else".to_string();

    let result = h.service.verify_payment(verification).await;
    assert!(matches!(
        result,
        Err(DomainError::Validation(ValidationError::BusinessRuleViolation { .. }))
    ));
    assert_eq!(h.accounts.count().await, 0);
    assert!(h.orders.find_by_order_id(&order_id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_verifications_provision_one_account() {
    let h = harness();
    let first = signup_request("owner@example.com", "owner", Role::Admin);
    let second = signup_request("other@example.com", "other", Role::Admin);

    // Unrecorded order, so both requests get past every pre-check
    let (a, b) = tokio::join!(
        h.service
            .verify_payment(signed_verification(&h.gateway, &first, "order_external", "pay_042")),
        h.service
            .verify_payment(signed_verification(&h.gateway, &second, "order_external", "pay_042")),
    );

    let succeeded = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(succeeded, 1);
    for result in [a, b] {
        if let Err(e) = result {
            assert!(matches!(e, DomainError::AlreadyExists { .. }), "got {:?}", e);
        }
    }
    assert_eq!(h.accounts.count().await, 1);
    assert!(h.accounts.find_by_transaction_id("pay_042").await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_replays_of_one_verification() {
    let h = harness();
    let (request, order_id) = start_admin_signup(&h).await;
    let verification = signed_verification(&h.gateway, &request, &order_id, "pay_001");

    let (a, b, c) = tokio::join!(
        h.service.verify_payment(verification.clone()),
        h.service.verify_payment(verification.clone()),
        h.service.verify_payment(verification),
    );

    let outcomes = [a, b, c];
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(outcomes
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, DomainError::AlreadyExists { .. })));
    assert_eq!(h.accounts.count().await, 1);
}
