//! Pricing repository trait for per-role signup prices.

use async_trait::async_trait;

use crate::domain::entities::{Role, SignupPrice};
use crate::errors::DomainError;

/// Persistent per-role signup price store
///
/// A role with no stored entry is free.
#[async_trait]
pub trait PricingRepository: Send + Sync {
    /// Current price for a role, `SignupPrice::Free` when unset
    async fn get(&self, role: Role) -> Result<SignupPrice, DomainError>;

    /// Replace the price for a role
    async fn set(&self, role: Role, price: SignupPrice) -> Result<(), DomainError>;

    /// Replace several prices as one unit
    ///
    /// Readers never observe a partially applied batch.
    async fn set_many(&self, prices: &[(Role, SignupPrice)]) -> Result<(), DomainError>;
}
