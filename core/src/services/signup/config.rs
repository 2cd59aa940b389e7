//! Configuration for the signup service

use rn_shared::config::{PasswordConfig, PaymentConfig};

/// Configuration for the signup service
#[derive(Debug, Clone)]
pub struct SignupServiceConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Minimum password length in characters
    pub min_password_length: usize,
    /// ISO currency for gateway orders
    pub currency: String,
}

impl Default for SignupServiceConfig {
    fn default() -> Self {
        Self::from_configs(&PasswordConfig::default(), &PaymentConfig::default())
    }
}

impl SignupServiceConfig {
    pub fn from_configs(password: &PasswordConfig, payment: &PaymentConfig) -> Self {
        Self {
            bcrypt_cost: password.bcrypt_cost,
            min_password_length: password.min_length,
            currency: payment.currency.clone(),
        }
    }
}
