//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and schema bootstrap
//! - Repository implementations for accounts, pricing and signup orders

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlAccountRepository, MySqlPricingRepository, MySqlSignupOrderRepository};
