//! Razorpay order client
//!
//! Implements [`PaymentGateway`] over the Razorpay REST API:
//!
//! - `POST {base_url}/v1/orders` with HTTP basic auth `key_id:key_secret`
//! - Checkout signatures are HMAC-SHA256 of `order_id|payment_id` keyed by
//!   the key secret
//!
//! No retries. A failed call surfaces as `DomainError::Gateway`.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use rn_core::errors::{DomainError, DomainResult};
use rn_core::services::payment::{verify_signature, CreateOrderRequest, GatewayOrder, PaymentGateway};
use rn_shared::config::PaymentConfig;

use crate::InfrastructureError;

/// Razorpay credentials and endpoint
#[derive(Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    /// API root, without trailing `/v1`
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl RazorpayConfig {
    /// Build from the shared payment configuration
    ///
    /// # Returns
    /// * `Ok(Some(config))` - Key id and secret are both present
    /// * `Ok(None)` - Gateway not configured; paid signups are unavailable
    /// * `Err(InfrastructureError::Config)` - Base URL is unusable
    pub fn from_payment_config(payment: &PaymentConfig) -> Result<Option<Self>, InfrastructureError> {
        let (key_id, key_secret) = match (&payment.key_id, &payment.key_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                (id.clone(), secret.clone())
            }
            _ => return Ok(None),
        };

        let base_url = payment.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(InfrastructureError::Config(format!(
                "RAZORPAY_BASE_URL must be an http(s) URL, got {}",
                base_url
            )));
        }

        Ok(Some(Self {
            key_id,
            key_secret,
            base_url,
            request_timeout_secs: payment.request_timeout_secs,
        }))
    }

    /// Order creation endpoint
    pub fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.base_url)
    }
}

/// Error body returned by the gateway
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Razorpay-backed payment gateway
pub struct RazorpayGateway {
    client: reqwest::Client,
    config: RazorpayConfig,
}

impl RazorpayGateway {
    /// Create a new client with the configured request timeout
    pub fn new(config: RazorpayConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            key_id = %config.key_id,
            base_url = %config.base_url,
            "Razorpay gateway initialized"
        );
        Ok(Self { client, config })
    }

    /// Create from shared configuration, `None` when credentials are absent
    pub fn from_payment_config(payment: &PaymentConfig) -> Result<Option<Self>, InfrastructureError> {
        RazorpayConfig::from_payment_config(payment)?
            .map(Self::new)
            .transpose()
    }

    fn gateway_error(message: impl Into<String>) -> DomainError {
        DomainError::Gateway {
            message: message.into(),
        }
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn key_id(&self) -> &str {
        &self.config.key_id
    }

    async fn create_order(&self, request: CreateOrderRequest) -> DomainResult<GatewayOrder> {
        debug!(
            amount = request.amount,
            currency = %request.currency,
            receipt = %request.receipt,
            "Creating gateway order"
        );

        let response = self
            .client
            .post(self.config.orders_url())
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Gateway request failed");
                Self::gateway_error(if e.is_timeout() {
                    "gateway request timed out".to_string()
                } else {
                    format!("gateway request failed: {}", e)
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| {
                    envelope
                        .error
                        .description
                        .or(envelope.error.code)
                })
                .unwrap_or_else(|| "no error description".to_string());

            error!(status = status.as_u16(), detail = %detail, "Gateway rejected order");
            return Err(Self::gateway_error(format!(
                "order creation returned {}: {}",
                status.as_u16(),
                detail
            )));
        }

        let order: GatewayOrder = response
            .json()
            .await
            .map_err(|e| Self::gateway_error(format!("unreadable order response: {}", e)))?;

        info!(order_id = %order.id, amount = order.amount, "Gateway order created");
        Ok(order)
    }

    fn verify_payment_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool {
        verify_signature(&self.config.key_secret, order_id, payment_id, signature)
    }
}
