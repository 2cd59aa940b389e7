//! Route handlers
//!
//! - `auth` - Signup, payment verification, login and current account
//! - `settings` - Signup pricing
//! - `health` - Liveness probe

pub mod auth;
pub mod health;
pub mod settings;

use std::sync::Arc;

use rn_core::{AccountRepository, PricingRepository, PricingService, SignupOrderRepository, SignupService};

/// Application state that holds shared services
pub struct AppState<A, P, O>
where
    A: AccountRepository,
    P: PricingRepository,
    O: SignupOrderRepository,
{
    pub signup_service: Arc<SignupService<A, P, O>>,
    pub pricing_service: Arc<PricingService<P>>,
}
