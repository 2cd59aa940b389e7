//! Session token service
//!
//! Issues and verifies the HS256 JWT handed out after signup or login.

mod config;
mod service;


pub use config::SessionConfig;
pub use service::SessionService;
