//! Payment gateway seam and signature verification
//!
//! The gateway creates orders; the client pays against an order and returns a
//! signature that proves the gateway saw the payment.

mod gateway;
mod mock;
mod signature;

pub use gateway::{CreateOrderRequest, GatewayOrder, PaymentGateway};
pub use mock::MockPaymentGateway;
pub use signature::{compute_signature, verify_signature};
