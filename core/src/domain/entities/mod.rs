//! Domain entities representing core business objects.

pub mod account;
pub mod pricing;
pub mod session;
pub mod signup;

// Re-export commonly used types
pub use account::{Account, AccountView, PaymentPlan, PaymentStatus, Role};
pub use pricing::{SignupPrice, MINOR_UNITS_PER_MAJOR};
pub use session::{Claims, JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_DAYS};
pub use signup::{PaymentOrder, PendingSignup, SignupOrder};
