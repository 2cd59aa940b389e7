//! Request and response bodies for the HTTP API

pub mod auth;
pub mod pricing;

pub use auth::*;
pub use pricing::*;
