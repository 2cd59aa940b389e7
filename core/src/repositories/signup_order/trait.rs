//! Repository for orders issued during paid signup.

use async_trait::async_trait;

use crate::domain::entities::SignupOrder;
use crate::errors::DomainError;

/// Server-side record of gateway orders created for signups
///
/// Lets verification trust the amount and role the order was issued for
/// instead of what the client echoes back.
#[async_trait]
pub trait SignupOrderRepository: Send + Sync {
    /// Store an order; an existing record with the same order id is replaced
    async fn save(&self, order: SignupOrder) -> Result<(), DomainError>;

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<SignupOrder>, DomainError>;

    /// Remove a consumed order
    ///
    /// # Returns
    /// * `Ok(true)` - Order removed
    /// * `Ok(false)` - No such order
    async fn delete(&self, order_id: &str) -> Result<bool, DomainError>;
}
