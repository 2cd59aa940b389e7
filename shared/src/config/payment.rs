//! Payment gateway configuration

use serde::{Deserialize, Serialize};

/// Payment gateway configuration (Razorpay-compatible API)
///
/// The gateway counts as configured only when both the key id and the key
/// secret are present. Paid signups fail fast otherwise.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Public key id, returned to clients alongside an order
    pub key_id: Option<String>,

    /// Shared secret used for basic auth and signature verification
    #[serde(skip_serializing)]
    pub key_secret: Option<String>,

    /// Gateway REST base URL
    pub base_url: String,

    /// ISO currency code for signup orders
    pub currency: String,

    /// Timeout for gateway requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: None,
            key_secret: None,
            base_url: String::from("https://api.razorpay.com"),
            currency: String::from("INR"),
            request_timeout_secs: 30,
        }
    }
}

impl PaymentConfig {
    /// Create a configured gateway with credentials
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: Some(key_id.into()),
            key_secret: Some(key_secret.into()),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_id: non_empty_var("RAZORPAY_KEY_ID"),
            key_secret: non_empty_var("RAZORPAY_KEY_SECRET"),
            base_url: non_empty_var("RAZORPAY_BASE_URL").unwrap_or(defaults.base_url),
            currency: non_empty_var("PAYMENT_CURRENCY").unwrap_or(defaults.currency),
            request_timeout_secs: std::env::var("PAYMENT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }

    /// Whether both credentials are present
    pub fn is_configured(&self) -> bool {
        self.key_id.is_some() && self.key_secret.is_some()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
