//! Authentication route handlers
//!
//! - Signup, free or order-backed depending on the role's price
//! - Payment verification completing a paid signup
//! - Login
//! - Current account lookup

pub mod login;
pub mod me;
pub mod signup;
pub mod verify_payment;
