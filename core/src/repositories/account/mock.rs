//! In-memory implementation of AccountRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// Account repository backed by a map; uniqueness is checked under the write lock
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<Uuid, Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Replace a stored account, e.g. to deactivate it in tests
    pub async fn replace(&self, account: Account) {
        self.accounts.write().await.insert(account.id, account);
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn conflict_in<'a>(
    accounts: impl Iterator<Item = &'a Account> + Clone,
    email: &str,
    username: &str,
) -> Option<&'static str> {
    if accounts.clone().any(|a| a.email == email) {
        Some("email")
    } else if accounts.into_iter().any(|a| a.username == username) {
        Some("username")
    } else {
        None
    }
}

/// Mirrors the unique key on `accounts.transaction_id`
fn transaction_taken<'a>(mut accounts: impl Iterator<Item = &'a Account>, account: &Account) -> bool {
    match account.transaction_id.as_deref() {
        Some(id) => accounts.any(|a| a.transaction_id.as_deref() == Some(id)),
        None => false,
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().find(|a| a.email == email).cloned())
    }

    async fn find_by_transaction_id(&self, transaction_id: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.transaction_id.as_deref() == Some(transaction_id))
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&id).cloned())
    }

    async fn find_conflict(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<&'static str>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(conflict_in(accounts.values(), email, username))
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if let Some(field) = conflict_in(accounts.values(), &account.email, &account.username) {
            return Err(DomainError::already_exists(field));
        }
        if transaction_taken(accounts.values(), &account) {
            return Err(DomainError::already_exists("transaction_id"));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }
}
