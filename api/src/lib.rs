//! HTTP layer for the RentNest backend
//!
//! Exposes the signup, payment verification, login and pricing endpoints
//! on top of `rn_core` services. The binary in `main.rs` wires MySQL and
//! Razorpay implementations; tests wire in-memory ones.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
