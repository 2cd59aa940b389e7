//! Signup orchestration
//!
//! This module owns the tiered signup flow:
//! - Free roles get an account and a session immediately
//! - Paid roles get a gateway order; the account is created only after the
//!   checkout signature verifies
//! - Login and current-account lookup for existing accounts

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::SignupServiceConfig;
pub use service::SignupService;
pub use types::{PaymentVerification, SignupRequest};
