//! Value objects representing immutable domain concepts.

pub mod auth_session;
pub mod pricing_view;
pub mod signup_outcome;

// Re-export commonly used types
pub use auth_session::AuthSession;
pub use pricing_view::PricingView;
pub use signup_outcome::SignupOutcome;
