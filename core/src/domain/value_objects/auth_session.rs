//! Authenticated session value object returned after signup or login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::{Account, AccountView};

/// Account view plus the signed session token
///
/// Serializes as `{"user": {...}, "token": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Public view of the authenticated account
    pub user: AccountView,

    /// Signed JWT session token
    pub token: String,
}

impl AuthSession {
    pub fn new(account: &Account, token: String) -> Self {
        Self {
            user: account.view(),
            token,
        }
    }
}
