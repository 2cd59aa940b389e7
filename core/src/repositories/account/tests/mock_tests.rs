//! Unit tests for the in-memory account repository

use crate::domain::entities::{Account, Role};
use crate::errors::DomainError;
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn account(email: &str, username: &str) -> Account {
    Account::new_free(
        email.to_string(),
        username.to_string(),
        "$2b$10$hash".to_string(),
        Role::User,
    )
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("a@example.com", "alice")).await.unwrap();

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.unwrap().email, "a@example.com");

    let by_email = repo.find_by_email("a@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().id, created.id);

    assert!(repo.find_by_email("b@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("a@example.com", "alice")).await.unwrap();

    let result = repo.create(account("a@example.com", "other")).await;
    match result {
        Err(DomainError::AlreadyExists { field }) => assert_eq!(field, "email"),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("a@example.com", "alice")).await.unwrap();

    let result = repo.create(account("b@example.com", "alice")).await;
    match result {
        Err(DomainError::AlreadyExists { field }) => assert_eq!(field, "username"),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
}

#[tokio::test]
async fn test_find_conflict_prefers_email() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("a@example.com", "alice")).await.unwrap();

    assert_eq!(
        repo.find_conflict("a@example.com", "alice").await.unwrap(),
        Some("email")
    );
    assert_eq!(
        repo.find_conflict("b@example.com", "alice").await.unwrap(),
        Some("username")
    );
    assert_eq!(repo.find_conflict("b@example.com", "bob").await.unwrap(), None);
}

fn paid_account(email: &str, username: &str, payment_id: &str) -> Account {
    Account::new_paid(
        email.to_string(),
        username.to_string(),
        "$2b$10$hash".to_string(),
        Role::Admin,
        payment_id.to_string(),
        10000,
    )
}

#[tokio::test]
async fn test_find_by_transaction_id() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("a@example.com", "alice")).await.unwrap();
    let paid = repo
        .create(paid_account("b@example.com", "bob", "pay_001"))
        .await
        .unwrap();

    let found = repo.find_by_transaction_id("pay_001").await.unwrap();
    assert_eq!(found.unwrap().id, paid.id);
    assert!(repo.find_by_transaction_id("pay_002").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_transaction_rejected() {
    let repo = InMemoryAccountRepository::new();
    repo.create(paid_account("a@example.com", "alice", "pay_001"))
        .await
        .unwrap();

    let result = repo
        .create(paid_account("b@example.com", "bob", "pay_001"))
        .await;
    match result {
        Err(DomainError::AlreadyExists { field }) => assert_eq!(field, "transaction_id"),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }

    // Free accounts carry no transaction id and never clash on it
    repo.create(account("c@example.com", "carol")).await.unwrap();
    repo.create(account("d@example.com", "dave")).await.unwrap();
    assert_eq!(repo.count().await, 3);
}
