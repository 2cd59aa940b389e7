//! In-memory implementation of SignupOrderRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::SignupOrder;
use crate::errors::DomainError;

use super::trait_::SignupOrderRepository;

pub struct InMemorySignupOrderRepository {
    orders: Arc<RwLock<HashMap<String, SignupOrder>>>,
}

impl InMemorySignupOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

impl Default for InMemorySignupOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SignupOrderRepository for InMemorySignupOrderRepository {
    async fn save(&self, order: SignupOrder) -> Result<(), DomainError> {
        self.orders
            .write()
            .await
            .insert(order.order_id.clone(), order);
        Ok(())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<SignupOrder>, DomainError> {
        Ok(self.orders.read().await.get(order_id).cloned())
    }

    async fn delete(&self, order_id: &str) -> Result<bool, DomainError> {
        Ok(self.orders.write().await.remove(order_id).is_some())
    }
}
