//! Unit tests for the in-memory pricing repository

use crate::domain::entities::{Role, SignupPrice};
use crate::repositories::pricing::{InMemoryPricingRepository, PricingRepository};

#[tokio::test]
async fn test_missing_entry_is_free() {
    let repo = InMemoryPricingRepository::new();
    assert_eq!(repo.get(Role::Admin).await.unwrap(), SignupPrice::Free);
    assert_eq!(repo.get(Role::User).await.unwrap(), SignupPrice::Free);
}

#[tokio::test]
async fn test_set_then_get() {
    let repo = InMemoryPricingRepository::new();
    repo.set(Role::Admin, SignupPrice::Paid(10000)).await.unwrap();

    assert_eq!(repo.get(Role::Admin).await.unwrap(), SignupPrice::Paid(10000));
    assert_eq!(repo.get(Role::User).await.unwrap(), SignupPrice::Free);
}

#[tokio::test]
async fn test_set_many_overwrites() {
    let repo = InMemoryPricingRepository::with_prices([(Role::User, SignupPrice::Paid(500))]);
    repo.set_many(&[
        (Role::Admin, SignupPrice::Paid(20000)),
        (Role::User, SignupPrice::Free),
    ])
    .await
    .unwrap();

    assert_eq!(repo.get(Role::Admin).await.unwrap(), SignupPrice::Paid(20000));
    assert_eq!(repo.get(Role::User).await.unwrap(), SignupPrice::Free);
}
