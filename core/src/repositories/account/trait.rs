//! Account repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// Email, username and payment transaction id are unique. Implementations
/// must enforce that at write time and report a clash as [`DomainError::AlreadyExists`] naming the
/// field, so two concurrent signups for the same identity cannot both succeed.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its normalized (lower-cased) email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with that email
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find the account provisioned by a gateway payment
    async fn find_by_transaction_id(&self, transaction_id: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Check whether either identity field is already taken
    ///
    /// Returns the name of the clashing field (`"email"` or `"username"`),
    /// email first.
    async fn find_conflict(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<&'static str>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::AlreadyExists)` - Email, username or transaction id taken
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}
