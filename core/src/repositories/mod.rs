//! Repository interfaces for persistence, with in-memory implementations
//! used by tests and local wiring.

pub mod account;
pub mod pricing;
pub mod signup_order;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use pricing::{InMemoryPricingRepository, PricingRepository};
pub use signup_order::{InMemorySignupOrderRepository, SignupOrderRepository};
