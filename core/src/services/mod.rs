//! Business services containing domain logic and use cases.

pub mod password;
pub mod payment;
pub mod pricing;
pub mod session;
pub mod signup;

// Re-export commonly used types
pub use payment::{
    compute_signature, verify_signature, CreateOrderRequest, GatewayOrder, MockPaymentGateway,
    PaymentGateway,
};
pub use pricing::{PricingService, PricingUpdate};
pub use session::{SessionConfig, SessionService};
pub use signup::{PaymentVerification, SignupRequest, SignupService, SignupServiceConfig};
