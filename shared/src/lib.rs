//! Shared utilities and common types for the RentNest server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response envelopes used by the HTTP layer
//! - Utility functions (email validation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    PasswordConfig, PaymentConfig, ServerConfig,
};
pub use types::{ApiResponse, ErrorResponse, HealthResponse, HealthStatus};
pub use utils::validation;
