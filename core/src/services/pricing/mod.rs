//! Signup pricing administration

mod service;

pub use service::{PricingService, PricingUpdate};
