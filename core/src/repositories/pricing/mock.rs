//! In-memory implementation of PricingRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Role, SignupPrice};
use crate::errors::DomainError;

use super::trait_::PricingRepository;

pub struct InMemoryPricingRepository {
    prices: Arc<RwLock<HashMap<Role, SignupPrice>>>,
}

impl InMemoryPricingRepository {
    pub fn new() -> Self {
        Self {
            prices: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Repository seeded with prices
    pub fn with_prices(prices: impl IntoIterator<Item = (Role, SignupPrice)>) -> Self {
        Self {
            prices: Arc::new(RwLock::new(prices.into_iter().collect())),
        }
    }
}

impl Default for InMemoryPricingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PricingRepository for InMemoryPricingRepository {
    async fn get(&self, role: Role) -> Result<SignupPrice, DomainError> {
        let prices = self.prices.read().await;
        Ok(prices.get(&role).copied().unwrap_or_default())
    }

    async fn set(&self, role: Role, price: SignupPrice) -> Result<(), DomainError> {
        self.prices.write().await.insert(role, price);
        Ok(())
    }

    async fn set_many(&self, prices: &[(Role, SignupPrice)]) -> Result<(), DomainError> {
        let mut stored = self.prices.write().await;
        for (role, price) in prices {
            stored.insert(*role, *price);
        }
        Ok(())
    }
}
