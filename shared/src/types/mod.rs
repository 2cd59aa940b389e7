//! Type definitions shared by the HTTP layer
//!
//! - `response` - API response envelopes and health checks

pub mod response;

pub use response::{ApiResponse, ErrorResponse, HealthResponse, HealthStatus};
