//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the RentNest backend.
//! It provides concrete implementations of the core repository traits and the
//! payment gateway seam.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL repositories and pool management using SQLx
//! - **Payment**: Razorpay-compatible REST client implementing `PaymentGateway`
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

use rn_core::errors::DomainError;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Payment gateway clients
pub mod payment;

#[cfg(feature = "mysql")]
pub use database::{
    DatabasePool, MySqlAccountRepository, MySqlPricingRepository, MySqlSignupOrderRepository,
};
pub use payment::{RazorpayConfig, RazorpayGateway};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration statement failed
    #[error("Migration error: {0}")]
    Migration(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::internal(error.to_string())
    }
}
