//! # RentNest Core
//!
//! Core business logic and domain layer for the RentNest backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    Account, AccountView, Claims, PaymentOrder, PaymentPlan, PaymentStatus, PendingSignup, Role,
    SignupOrder, SignupPrice,
};
pub use domain::value_objects::{AuthSession, PricingView, SignupOutcome};
pub use errors::{DomainError, DomainResult, SessionError, ValidationError};
pub use repositories::{AccountRepository, PricingRepository, SignupOrderRepository};
pub use services::{
    PaymentGateway, PaymentVerification, PricingService, PricingUpdate, SessionConfig,
    SessionService, SignupRequest, SignupService, SignupServiceConfig,
};
