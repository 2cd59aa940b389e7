//! Result of starting a signup.

use crate::domain::entities::signup::{PaymentOrder, PendingSignup};

use super::auth_session::AuthSession;

/// Outcome of `SignupService::initiate_signup`
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    /// Free path: the account exists and a session was issued
    Provisioned(AuthSession),

    /// Paid path: no account yet; the client must complete checkout for
    /// `order` and send `pending` back with the payment receipt
    PaymentRequired {
        order: PaymentOrder,
        pending: PendingSignup,
    },
}

impl SignupOutcome {
    pub fn is_provisioned(&self) -> bool {
        matches!(self, SignupOutcome::Provisioned(_))
    }
}
